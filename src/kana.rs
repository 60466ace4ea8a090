//! Static table of the hiragana syllabary, keyed by consonant row and vowel
//! column.

#[cfg(test)]
mod tests;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result};

/// The consonant row of a kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Consonant {
    /// The bare vowel row (あいうえお).
    Bare,
    K,
    S,
    T,
    N,
    H,
    M,
    Y,
    R,
    W,
    G,
    Z,
    D,
    B,
    P,
}

impl Consonant {
    pub const ALL: [Consonant; 15] = [
        Consonant::Bare,
        Consonant::K,
        Consonant::S,
        Consonant::T,
        Consonant::N,
        Consonant::H,
        Consonant::M,
        Consonant::Y,
        Consonant::R,
        Consonant::W,
        Consonant::G,
        Consonant::Z,
        Consonant::D,
        Consonant::B,
        Consonant::P,
    ];

    /// Romanized name of the row.
    pub fn describe(&self) -> &'static str {
        match self {
            Consonant::Bare => "∅",
            Consonant::K => "k",
            Consonant::S => "s",
            Consonant::T => "t",
            Consonant::N => "n",
            Consonant::H => "h",
            Consonant::M => "m",
            Consonant::Y => "y",
            Consonant::R => "r",
            Consonant::W => "w",
            Consonant::G => "g",
            Consonant::Z => "z",
            Consonant::D => "d",
            Consonant::B => "b",
            Consonant::P => "p",
        }
    }
}

impl fmt::Display for Consonant {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}

/// The vowel column of a kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::I, Vowel::U, Vowel::E, Vowel::O];

    pub fn describe(&self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::I => "i",
            Vowel::U => "u",
            Vowel::E => "e",
            Vowel::O => "o",
        }
    }
}

impl fmt::Display for Vowel {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}

/// Look up the kana for the given consonant row and vowel column.
///
/// Fails for pairs which have no kana, like `y` + `i` or `w` + `u`.
pub fn lookup(consonant: Consonant, vowel: Vowel) -> Result<char> {
    match tables::ROWS[consonant as usize][vowel as usize] {
        Some(kana) => Ok(kana),
        None => Err(ErrorKind::UnsupportedSyllable { consonant, vowel }.into()),
    }
}

/// Classify a kana into its consonant row and vowel column.
pub fn classify(kana: char) -> Option<(Consonant, Vowel)> {
    for consonant in Consonant::ALL {
        for vowel in Vowel::ALL {
            if tables::ROWS[consonant as usize][vowel as usize] == Some(kana) {
                return Some((consonant, vowel));
            }
        }
    }

    None
}

/// Get the consonant row the given kana belongs to.
#[inline]
pub fn consonant_of(kana: char) -> Option<Consonant> {
    Some(classify(kana)?.0)
}

mod tables {
    #[rustfmt::skip]
    pub(super) static ROWS: [[Option<char>; 5]; 15] = [
        /*∅*/ [Some('あ'), Some('い'), Some('う'), Some('え'), Some('お')],
        /*k*/ [Some('か'), Some('き'), Some('く'), Some('け'), Some('こ')],
        /*s*/ [Some('さ'), Some('し'), Some('す'), Some('せ'), Some('そ')],
        /*t*/ [Some('た'), Some('ち'), Some('つ'), Some('て'), Some('と')],
        /*n*/ [Some('な'), Some('に'), Some('ぬ'), Some('ね'), Some('の')],
        /*h*/ [Some('は'), Some('ひ'), Some('ふ'), Some('へ'), Some('ほ')],
        /*m*/ [Some('ま'), Some('み'), Some('む'), Some('め'), Some('も')],
        /*y*/ [Some('や'), None,      Some('ゆ'), None,      Some('よ')],
        /*r*/ [Some('ら'), Some('り'), Some('る'), Some('れ'), Some('ろ')],
        /*w*/ [Some('わ'), Some('ゐ'), None,      Some('ゑ'), Some('を')],
        /*g*/ [Some('が'), Some('ぎ'), Some('ぐ'), Some('げ'), Some('ご')],
        /*z*/ [Some('ざ'), Some('じ'), Some('ず'), Some('ぜ'), Some('ぞ')],
        /*d*/ [Some('だ'), Some('ぢ'), Some('づ'), Some('で'), Some('ど')],
        /*b*/ [Some('ば'), Some('び'), Some('ぶ'), Some('べ'), Some('ぼ')],
        /*p*/ [Some('ぱ'), Some('ぴ'), Some('ぷ'), Some('ぺ'), Some('ぽ')],
    ];
}
