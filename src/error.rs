use crate::kana::{Consonant, Vowel};

/// Error raised while generating a paradigm.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Access the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("No kana for consonant `{consonant}` and vowel `{vowel}`")]
    UnsupportedSyllable { consonant: Consonant, vowel: Vowel },
    #[error("No sound change rule for `{lemma}` ending in the `{consonant}` row")]
    UnhandledEuphonicClass {
        lemma: Box<str>,
        consonant: Consonant,
    },
    #[error("Not a dictionary form verb `{lemma}`")]
    InvalidVerbForm { lemma: Box<str> },
    #[error("Unrecognized irregular verb `{lemma}`")]
    UnrecognizedIrregularVerb { lemma: Box<str> },
    #[error("Unknown verb class `{name}`, expected one of godan, ichidan or irregular")]
    UnknownVerbClass { name: Box<str> },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
