//! Module which generates the inflectional paradigm of a verb, based on its
//! conjugation class.

#[macro_use]
mod macros;

mod euphony;
mod godan;
mod ichidan;
mod irregular;
mod template;


use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};
use crate::inflection::Paradigm;

pub use self::godan::godan;
pub use self::ichidan::ichidan;
pub use self::irregular::irregular;

/// The conjugation class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbClass {
    /// Consonant-stem verb.
    Godan,
    /// Vowel-stem verb.
    Ichidan,
    /// One of する, 来る or the copula だ.
    Irregular,
}

impl VerbClass {
    pub const ALL: [VerbClass; 3] = [VerbClass::Godan, VerbClass::Ichidan, VerbClass::Irregular];

    pub fn describe(&self) -> &'static str {
        match self {
            VerbClass::Godan => "godan",
            VerbClass::Ichidan => "ichidan",
            VerbClass::Irregular => "irregular",
        }
    }
}

impl fmt::Display for VerbClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe().fmt(f)
    }
}

impl FromStr for VerbClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        for class in VerbClass::ALL {
            if class.describe().eq_ignore_ascii_case(s) {
                return Ok(class);
            }
        }

        Err(Error::new(ErrorKind::UnknownVerbClass { name: s.into() }))
    }
}

/// Generate the paradigm of a lemma of the given class.
pub fn generate(lemma: &str, class: VerbClass) -> Result<Paradigm> {
    match class {
        VerbClass::Godan => godan(lemma),
        VerbClass::Ichidan => ichidan(lemma),
        VerbClass::Irregular => irregular(lemma),
    }
}

fn invalid(lemma: &str) -> Error {
    Error::new(ErrorKind::InvalidVerbForm {
        lemma: lemma.into(),
    })
}
