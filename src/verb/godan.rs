use crate::error::Result;
use crate::inflection::{Base, Paradigm, Voices};
use crate::kana::{self, Consonant, Vowel};

use super::euphony;
use super::template::{self, Slots, VowelBases};

/// Honorific verbs which take an い stem in place of their i and e columns.
const HONORIFIC: &[&str] = &[
    "為さる",
    "なさる",
    "下さる",
    "くださる",
    "御座る",
    "ご座る",
    "ござる",
    "いらっしゃる",
    "仰る",
    "おっしゃる",
];

/// Verbs of existence, whose negative is a bare ない.
const EXISTENCE: &[&str] = &["有る", "在る", "ある"];

/// Generate the paradigm of a godan (consonant-stem) verb.
pub fn godan(lemma: &str) -> Result<Paradigm> {
    let mut chars = lemma.chars();
    let last = chars.next_back();
    let stem = chars.as_str();

    let (Some((consonant, Vowel::U)), false) = (last.and_then(kana::classify), stem.is_empty())
    else {
        return Err(super::invalid(lemma));
    };

    tracing::trace!(lemma, stem, %consonant, "godan");

    let base = |consonant, vowel| -> Result<Base> {
        Ok(Base::new(format!("{stem}{}", kana::lookup(consonant, vowel)?)))
    };

    // The a-column of う verbs is historically in the w-row, 買う → 買わない.
    let a = match consonant {
        Consonant::Bare => base(Consonant::W, Vowel::A)?,
        consonant => base(consonant, Vowel::A)?,
    };

    let i = base(consonant, Vowel::I)?;
    let e = base(consonant, Vowel::E)?;
    let o = base(consonant, Vowel::O)?;

    let (i, e) = if HONORIFIC.contains(&lemma) {
        let honorific = Base::irregular(format!("{stem}い"));
        (honorific.clone(), honorific)
    } else {
        (i, e)
    };

    let nai = if EXISTENCE.contains(&lemma) {
        Base::irregular("")
    } else {
        a.clone()
    };

    let (te, euphony) = euphony::resolve(lemma, stem, consonant)?;

    let slots = Slots {
        imperative: e.inflect("").into(),
        conditional: e.inflect("ば"),
        volitional: o.inflect("う"),
        connective: te.inflect(euphony.connective),
        past: te.inflect(euphony.past),
        voices: Voices {
            potential: e.inflect("る").into(),
            passive: a.inflect("れる").into(),
            causative: [a.inflect("せる"), a.inflect("す")].into(),
            causative_passive: [a.inflect("せられる"), a.inflect("される")].into(),
        },
    };

    let vowels = VowelBases {
        a: Some(a),
        i,
        u: Base::new(lemma),
    };

    Ok(template::verb(vowels, nai, slots))
}
