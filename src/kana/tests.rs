use super::{classify, consonant_of, lookup, Consonant, Vowel};
use crate::error::ErrorKind;

#[test]
fn lookup_rows() {
    assert_eq!(lookup(Consonant::K, Vowel::A).unwrap(), 'か');
    assert_eq!(lookup(Consonant::Bare, Vowel::U).unwrap(), 'う');
    assert_eq!(lookup(Consonant::W, Vowel::A).unwrap(), 'わ');
    assert_eq!(lookup(Consonant::P, Vowel::O).unwrap(), 'ぽ');
}

#[test]
fn unpopulated_syllables() {
    for (consonant, vowel) in [
        (Consonant::Y, Vowel::I),
        (Consonant::Y, Vowel::E),
        (Consonant::W, Vowel::U),
    ] {
        let error = lookup(consonant, vowel).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::UnsupportedSyllable { consonant, vowel }
        );
    }
}

#[test]
fn inverse_lookup() {
    assert_eq!(classify('む'), Some((Consonant::M, Vowel::U)));
    assert_eq!(classify('ゑ'), Some((Consonant::W, Vowel::E)));
    assert_eq!(consonant_of('う'), Some(Consonant::Bare));
    assert_eq!(consonant_of('ぐ'), Some(Consonant::G));
    assert_eq!(consonant_of('ん'), None);
    assert_eq!(consonant_of('読'), None);
}

#[test]
fn table_is_bijective() {
    for consonant in Consonant::ALL {
        for vowel in Vowel::ALL {
            if let Ok(kana) = lookup(consonant, vowel) {
                assert_eq!(classify(kana), Some((consonant, vowel)), "{kana}");
            }
        }
    }
}
