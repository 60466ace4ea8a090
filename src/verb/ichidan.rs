use crate::error::Result;
use crate::inflection::{Base, Paradigm, Voices};
use crate::kana::{self, Vowel};

use super::template::{self, Slots, VowelBases};

/// Generate the paradigm of an ichidan (vowel-stem) verb.
pub fn ichidan(lemma: &str) -> Result<Paradigm> {
    let Some(stem) = lemma.strip_suffix('る').filter(|stem| !stem.is_empty()) else {
        return Err(super::invalid(lemma));
    };

    // A kana right before る has to be in the i or e column, 食べる or 起きる.
    if let Some((_, vowel)) = stem.chars().next_back().and_then(kana::classify) {
        if !matches!(vowel, Vowel::I | Vowel::E) {
            return Err(super::invalid(lemma));
        }
    }

    tracing::trace!(lemma, stem, "ichidan");

    let base = Base::new(stem);

    let slots = Slots {
        imperative: base.inflect("ろ").into(),
        conditional: base.inflect("れば"),
        volitional: base.inflect("よう"),
        connective: base.inflect("て"),
        past: base.inflect("た"),
        voices: Voices {
            potential: base.inflect("られる").with_spoken(&base, "れる").into(),
            passive: base.inflect("られる").into(),
            causative: [base.inflect("させる"), base.inflect("さす")].into(),
            causative_passive: base.inflect("させられる").into(),
        },
    };

    let vowels = VowelBases {
        a: None,
        i: base.clone(),
        u: Base::new(lemma),
    };

    Ok(template::verb(vowels, base, slots))
}
