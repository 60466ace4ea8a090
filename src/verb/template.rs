use crate::inflection::{Alternatives, Base, FormalityLevel, Inflection, Paradigm, Voices};

/// The stems feeding the shared template.
pub(super) struct VowelBases {
    /// Stem for ~ずに. Falls back to the negative base if absent.
    pub(super) a: Option<Base>,
    /// Stem for the formal forms.
    pub(super) i: Base,
    /// The dictionary form itself.
    pub(super) u: Base,
}

/// Forms which differ between verb classes.
pub(super) struct Slots {
    pub(super) imperative: Alternatives<Inflection>,
    pub(super) conditional: Inflection,
    pub(super) volitional: Inflection,
    pub(super) connective: Inflection,
    pub(super) past: Inflection,
    pub(super) voices: Voices,
}

/// Fill in the shared verb template.
///
/// Negative forms are built from `nai`, formal forms from the `i` base.
pub(super) fn verb(vowels: VowelBases, nai: Base, slots: Slots) -> Paradigm {
    let VowelBases { a, i, u } = vowels;

    let Slots {
        imperative,
        conditional,
        volitional,
        connective,
        past,
        voices,
    } = slots;

    let informal = FormalityLevel {
        affirmative: forms! {
            NonPast => u.inflect(""),
            Past => past,
            Imperative => imperative,
            Connective => connective,
            Conditional => conditional,
            Volitional => volitional,
        },
        negative: forms! {
            NonPast => nai.inflect("ない"),
            Past => nai.inflect("なかった"),
            Imperative => nai.inflect("な"),
            Connective => nai.inflect("なくて"),
            Conditional => nai.inflect("なければ"),
            Volitional => nai.inflect("なかろう"),
            Absentative => nai.inflect("ないで"),
        },
        compulsive: Some(nai.inflect("なくちゃ").into()),
        obligative: Some(nai.inflect("なきゃ").into()),
    };

    let formal = FormalityLevel {
        affirmative: forms! {
            NonPast => i.inflect("ます"),
            Past => i.inflect("ました"),
            Imperative => [i.inflect("なさい"), i.inflect("な")],
            Connective => i.inflect("まして").uncommon(),
            Conditional => i.inflect("ますれば").uncommon(),
            Volitional => i.inflect("ましょう"),
        },
        negative: forms! {
            NonPast => i.inflect("ません"),
            Past => i.inflect("ませんでした"),
            Absentative => a.as_ref().unwrap_or(&nai).inflect("ずに"),
        },
        compulsive: Some(nai.inflect("なくてはいけない").into()),
        obligative: Some(
            [
                nai.inflect("なければならない"),
                nai.inflect("なければいけない"),
            ]
            .into(),
        ),
    };

    Paradigm::new(informal, formal, Some(voices))
}
