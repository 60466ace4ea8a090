use crate::error::{Error, ErrorKind, Result};
use crate::inflection::{Base, FormalityLevel, Inflection, Paradigm, Voices};

use super::template::{self, Slots, VowelBases};

/// Generate the paradigm of one of the irregular verbs する, 来る or the
/// copula だ.
///
/// Kanji spellings produce forms written with the kanji, carrying their kana
/// reading.
pub fn irregular(lemma: &str) -> Result<Paradigm> {
    tracing::trace!(lemma, "irregular");

    let paradigm = match lemma {
        "為る" => suru(Base::reading("為る", "する"), Some("為")),
        "する" => suru(Base::new("する"), None),
        "来る" => kuru(Base::reading("来る", "くる"), Some("来")),
        "くる" => kuru(Base::new("くる"), None),
        "だ" => da(),
        _ => {
            return Err(Error::new(ErrorKind::UnrecognizedIrregularVerb {
                lemma: lemma.into(),
            }));
        }
    };

    Ok(paradigm)
}

/// An irregular stem, written with the kanji if there is one.
fn stem(kanji: Option<&str>, kana: &str) -> Base {
    match kanji {
        Some(kanji) => Base::reading(kanji, kana),
        None => Base::irregular(kana),
    }
}

fn suru(u: Base, kanji: Option<&str>) -> Paradigm {
    let shi = stem(kanji, "し");
    let sa = stem(kanji, "さ");
    let se = stem(kanji, "せ");
    let su = stem(kanji, "す");

    let slots = Slots {
        imperative: [shi.inflect("ろ"), se.inflect("よ")].into(),
        conditional: su.inflect("れば"),
        volitional: shi.inflect("よう"),
        connective: shi.inflect("て"),
        past: shi.inflect("た"),
        voices: Voices {
            potential: [
                Base::reading("出来る", "できる").inflect(""),
                se.inflect("る"),
            ]
            .into(),
            passive: sa.inflect("れる").into(),
            causative: [sa.inflect("せる"), sa.inflect("す")].into(),
            causative_passive: sa.inflect("せられる").into(),
        },
    };

    let vowels = VowelBases {
        a: Some(se),
        i: shi.clone(),
        u,
    };

    template::verb(vowels, shi, slots)
}

fn kuru(u: Base, kanji: Option<&str>) -> Paradigm {
    let ki = stem(kanji, "き");
    let ko = stem(kanji, "こ");
    let ku = stem(kanji, "く");

    let slots = Slots {
        imperative: ko.inflect("い").into(),
        conditional: ku.inflect("れば"),
        volitional: ko.inflect("よう"),
        connective: ki.inflect("て"),
        past: ki.inflect("た"),
        voices: Voices {
            potential: ko.inflect("られる").into(),
            passive: [ko.inflect("られる"), ko.inflect("れる")].into(),
            causative: [ko.inflect("させる"), ko.inflect("さす")].into(),
            causative_passive: ko.inflect("させられる").into(),
        },
    };

    let vowels = VowelBases { a: None, i: ki, u };
    template::verb(vowels, ko, slots)
}

/// The copula has neither voices nor compulsive and obligative forms.
fn da() -> Paradigm {
    let dewa = Base::irregular("では");
    let ja = Base::irregular("じゃ");

    let form = |text: &str| Base::irregular(text).inflect("");
    let negative = |suffix: &str| -> Inflection { dewa.inflect(suffix).with_spoken(&ja, suffix) };

    let informal = FormalityLevel {
        affirmative: forms! {
            NonPast => form("だ"),
            Past => form("だった"),
            Connective => form("で"),
            Conditional => form("だったら"),
            Volitional => form("だろう"),
        },
        negative: forms! {
            NonPast => negative("ない"),
            Past => negative("なかった"),
            Connective => negative("なくて"),
            Conditional => negative("なかったら"),
        },
        compulsive: None,
        obligative: None,
    };

    let formal = FormalityLevel {
        affirmative: forms! {
            NonPast => form("です"),
            Past => form("でした"),
            Volitional => form("でしょう"),
        },
        negative: forms! {
            NonPast => negative("ありません"),
            Past => negative("ありませんでした"),
        },
        compulsive: None,
        obligative: None,
    };

    Paradigm::new(informal, formal, None)
}
