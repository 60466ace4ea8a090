//! Data types making up a generated paradigm.

use core::fmt;

use arrayvec::ArrayVec;
use fixed_map::{Key, Map};
use serde::Serialize;

/// How the written form of a [`Base`] relates to its reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Irregular {
    /// The written form is read regularly.
    Regular,
    /// The form deviates from the regular pattern of its class.
    Irregular,
    /// The written form is read irregularly, with the given kana reading.
    Reading(Box<str>),
}

impl Irregular {
    /// Test if this is anything but [`Irregular::Regular`].
    #[inline]
    pub fn is_irregular(&self) -> bool {
        !matches!(self, Irregular::Regular)
    }
}

/// A single stem variant which suffixes are attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Base {
    text: Box<str>,
    irregular: Irregular,
}

impl Base {
    /// A regular base.
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Self {
            text: text.into(),
            irregular: Irregular::Regular,
        }
    }

    /// A base which is irregular with respect to its verb class.
    pub fn irregular(text: impl Into<Box<str>>) -> Self {
        Self {
            text: text.into(),
            irregular: Irregular::Irregular,
        }
    }

    /// A base whose written form has an irregular kana reading.
    pub fn reading(text: impl Into<Box<str>>, reading: impl Into<Box<str>>) -> Self {
        Self {
            text: text.into(),
            irregular: Irregular::Reading(reading.into()),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn irregularity(&self) -> &Irregular {
        &self.irregular
    }

    /// Attach a suffix to this base, producing an inflection.
    pub fn inflect(&self, suffix: &str) -> Inflection {
        let reading = match &self.irregular {
            Irregular::Reading(reading) => Some(format!("{reading}{suffix}").into()),
            _ => None,
        };

        Inflection {
            default: format!("{}{suffix}", self.text).into(),
            spoken: None,
            reading,
            irregular: self.irregular.clone(),
            uncommon: false,
        }
    }
}

/// One concrete surface form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Inflection {
    default: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spoken: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reading: Option<Box<str>>,
    irregular: Irregular,
    uncommon: bool,
}

impl Inflection {
    /// Add a colloquial rendering built from another base.
    ///
    /// Only the written text of `base` is used, any reading it carries is not
    /// recorded for the spoken form.
    pub(crate) fn with_spoken(mut self, base: &Base, suffix: &str) -> Self {
        self.spoken = Some(format!("{}{suffix}", base.text).into());
        self
    }

    /// Mark the inflection as uncommon.
    pub(crate) fn uncommon(mut self) -> Self {
        self.uncommon = true;
        self
    }

    /// The default written form.
    #[inline]
    pub fn default_form(&self) -> &str {
        &self.default
    }

    /// The spoken or colloquial form, if one exists.
    #[inline]
    pub fn spoken_form(&self) -> Option<&str> {
        self.spoken.as_deref()
    }

    /// The full kana reading, if the written form is read irregularly.
    #[inline]
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    /// Irregularity inherited from the base this was built from.
    #[inline]
    pub fn irregular(&self) -> &Irregular {
        &self.irregular
    }

    #[inline]
    pub fn is_uncommon(&self) -> bool {
        self.uncommon
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.default.fmt(f)?;

        if let Some(reading) = &self.reading {
            write!(f, " ({reading})")?;
        }

        if let Some(spoken) = &self.spoken {
            write!(f, " / {spoken}")?;
        }

        if self.uncommon {
            write!(f, " [uncommon]")?;
        }

        Ok(())
    }
}

/// Largest number of alternatives any single slot holds.
const MAX_ALTERNATIVES: usize = 2;

/// An ordered, non-empty set of alternative forms. The first one is the
/// canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Alternatives<T> {
    items: ArrayVec<T, MAX_ALTERNATIVES>,
}

impl<T> Alternatives<T> {
    /// The canonical form.
    #[inline]
    pub fn first(&self) -> &T {
        // Never empty, see the constructors.
        &self.items[0]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<Inflection> for Alternatives<Inflection> {
    #[inline]
    fn from(value: Inflection) -> Self {
        let mut items = ArrayVec::new();
        items.push(value);
        Self { items }
    }
}

impl<T> From<[T; MAX_ALTERNATIVES]> for Alternatives<T> {
    #[inline]
    fn from(values: [T; MAX_ALTERNATIVES]) -> Self {
        Self {
            items: ArrayVec::from(values),
        }
    }
}

impl<'a, T> IntoIterator for &'a Alternatives<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Key)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    NonPast,
    Past,
    Imperative,
    /// Connective or ~te form.
    Connective,
    Conditional,
    /// Volitional / presumptive.
    Volitional,
    /// Doing something without ~, only in the negative.
    Absentative,
}

impl Mood {
    pub fn describe(&self) -> &'static str {
        match self {
            Mood::NonPast => "non-past",
            Mood::Past => "past",
            Mood::Imperative => "imperative",
            Mood::Connective => "connective",
            Mood::Conditional => "conditional",
            Mood::Volitional => "volitional",
            Mood::Absentative => "absentative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Informal,
    Formal,
}

impl Formality {
    pub fn describe(&self) -> &'static str {
        match self {
            Formality::Informal => "informal",
            Formality::Formal => "formal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Affirmative,
    Negative,
}

impl Polarity {
    pub fn describe(&self) -> &'static str {
        match self {
            Polarity::Affirmative => "affirmative",
            Polarity::Negative => "negative",
        }
    }
}

/// Derived voices, only available for verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Potential,
    Passive,
    Causative,
    CausativePassive,
}

impl Voice {
    pub fn describe(&self) -> &'static str {
        match self {
            Voice::Potential => "potential",
            Voice::Passive => "passive",
            Voice::Causative => "causative",
            Voice::CausativePassive => "causative-passive",
        }
    }
}

/// Identifies a single cell in a [`Paradigm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Mood(Formality, Polarity, Mood),
    /// Must do ~, "have to".
    Compulsive(Formality),
    /// Must do ~, "obliged to".
    Obligative(Formality),
    Voice(Voice),
}

impl Slot {
    /// The formality of the slot, if it has one.
    pub fn formality(&self) -> Option<Formality> {
        match *self {
            Slot::Mood(formality, ..) => Some(formality),
            Slot::Compulsive(formality) => Some(formality),
            Slot::Obligative(formality) => Some(formality),
            Slot::Voice(..) => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Mood(formality, polarity, mood) => write!(
                f,
                "{} {} {}",
                formality.describe(),
                polarity.describe(),
                mood.describe()
            ),
            Slot::Compulsive(formality) => write!(f, "{} compulsive", formality.describe()),
            Slot::Obligative(formality) => write!(f, "{} obligative", formality.describe()),
            Slot::Voice(voice) => voice.describe().fmt(f),
        }
    }
}

/// Forms of one polarity, keyed by mood.
pub type Forms = Map<Mood, Alternatives<Inflection>>;

/// All forms at one level of formality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormalityLevel {
    pub affirmative: Forms,
    pub negative: Forms,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compulsive: Option<Alternatives<Inflection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obligative: Option<Alternatives<Inflection>>,
}

impl FormalityLevel {
    fn get(&self, polarity: Polarity, mood: Mood) -> Option<&Alternatives<Inflection>> {
        match polarity {
            Polarity::Affirmative => self.affirmative.get(mood),
            Polarity::Negative => self.negative.get(mood),
        }
    }

    fn iter(
        &self,
        formality: Formality,
    ) -> impl Iterator<Item = (Slot, &Alternatives<Inflection>)> + '_ {
        let affirmative = self
            .affirmative
            .iter()
            .map(move |(mood, forms)| (Slot::Mood(formality, Polarity::Affirmative, mood), forms));

        let negative = self
            .negative
            .iter()
            .map(move |(mood, forms)| (Slot::Mood(formality, Polarity::Negative, mood), forms));

        let compulsive = self
            .compulsive
            .iter()
            .map(move |forms| (Slot::Compulsive(formality), forms));

        let obligative = self
            .obligative
            .iter()
            .map(move |forms| (Slot::Obligative(formality), forms));

        affirmative.chain(negative).chain(compulsive).chain(obligative)
    }
}

/// Derived voices of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voices {
    pub potential: Alternatives<Inflection>,
    pub passive: Alternatives<Inflection>,
    pub causative: Alternatives<Inflection>,
    pub causative_passive: Alternatives<Inflection>,
}

impl Voices {
    pub fn get(&self, voice: Voice) -> &Alternatives<Inflection> {
        match voice {
            Voice::Potential => &self.potential,
            Voice::Passive => &self.passive,
            Voice::Causative => &self.causative,
            Voice::CausativePassive => &self.causative_passive,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (Slot, &Alternatives<Inflection>)> + '_ {
        [
            Voice::Potential,
            Voice::Passive,
            Voice::Causative,
            Voice::CausativePassive,
        ]
        .into_iter()
        .map(move |voice| (Slot::Voice(voice), self.get(voice)))
    }
}

/// The complete set of inflected forms for one lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Paradigm {
    pub informal: FormalityLevel,
    pub formal: FormalityLevel,
    /// Absent for the copula.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voices: Option<Voices>,
}

impl Paradigm {
    pub(crate) fn new(
        informal: FormalityLevel,
        formal: FormalityLevel,
        voices: Option<Voices>,
    ) -> Self {
        Self {
            informal,
            formal,
            voices,
        }
    }

    /// Access the forms at the given level of formality.
    pub fn level(&self, formality: Formality) -> &FormalityLevel {
        match formality {
            Formality::Informal => &self.informal,
            Formality::Formal => &self.formal,
        }
    }

    /// Get the forms of a single slot.
    pub fn get(&self, slot: Slot) -> Option<&Alternatives<Inflection>> {
        match slot {
            Slot::Mood(formality, polarity, mood) => self.level(formality).get(polarity, mood),
            Slot::Compulsive(formality) => self.level(formality).compulsive.as_ref(),
            Slot::Obligative(formality) => self.level(formality).obligative.as_ref(),
            Slot::Voice(voice) => Some(self.voices.as_ref()?.get(voice)),
        }
    }

    /// Iterate over all populated slots, informal forms first.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Alternatives<Inflection>)> + '_ {
        self.informal
            .iter(Formality::Informal)
            .chain(self.formal.iter(Formality::Formal))
            .chain(self.voices.iter().flat_map(|voices| voices.iter()))
    }
}
