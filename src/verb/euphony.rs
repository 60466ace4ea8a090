//! Sound changes applied to the connective and past forms of godan verbs.

use crate::error::{Error, ErrorKind, Result};
use crate::inflection::Base;
use crate::kana::Consonant;

/// A connective / past suffix pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Euphony {
    pub(super) connective: &'static str,
    pub(super) past: &'static str,
}

impl Euphony {
    const fn new(connective: &'static str, past: &'static str) -> Self {
        Self { connective, past }
    }
}

/// Geminate sound change, 待つ → 待って.
pub(super) const TTE: Euphony = Euphony::new("って", "った");
/// Nasal sound change, 読む → 読んで.
pub(super) const NDE: Euphony = Euphony::new("んで", "んだ");
/// I-sound change, 書く → 書いて.
pub(super) const ITE: Euphony = Euphony::new("いて", "いた");
/// Voiced i-sound change, 泳ぐ → 泳いで.
pub(super) const IDE: Euphony = Euphony::new("いで", "いだ");
/// No sound change, 話す → 話して.
pub(super) const SHITE: Euphony = Euphony::new("して", "した");
/// U-sound change, 問う → 問うて.
pub(super) const UTE: Euphony = Euphony::new("うて", "うた");

/// The sound change of a consonant row, if one is defined.
pub(super) const fn by_consonant(consonant: Consonant) -> Option<Euphony> {
    match consonant {
        Consonant::Bare | Consonant::T | Consonant::R => Some(TTE),
        Consonant::N | Consonant::M | Consonant::B => Some(NDE),
        Consonant::K => Some(ITE),
        Consonant::G => Some(IDE),
        Consonant::S => Some(SHITE),
        Consonant::H
        | Consonant::Y
        | Consonant::W
        | Consonant::Z
        | Consonant::D
        | Consonant::P => None,
    }
}

/// Verbs whose sound change doesn't follow their consonant row.
fn exception(lemma: &str) -> Option<Euphony> {
    match lemma {
        "行く" | "いく" => Some(TTE),
        "問う" | "とう" | "請う" | "乞う" | "こう" => Some(UTE),
        _ => None,
    }
}

/// Resolve the base and suffix pair used for the connective and past forms.
pub(super) fn resolve(lemma: &str, stem: &str, consonant: Consonant) -> Result<(Base, Euphony)> {
    if let Some(euphony) = exception(lemma) {
        tracing::trace!(lemma, ?euphony, "lexical sound change");
        return Ok((Base::irregular(stem), euphony));
    }

    let Some(euphony) = by_consonant(consonant) else {
        return Err(Error::new(ErrorKind::UnhandledEuphonicClass {
            lemma: lemma.into(),
            consonant,
        }));
    };

    Ok((Base::new(stem), euphony))
}
