//! Generation of the full inflectional paradigm of Japanese verbs and the
//! copula from their dictionary form.
//!
//! ```
//! let paradigm = jpv_inflect::godan("読む")?;
//!
//! let past = jpv_inflect::Slot::Mood(
//!     jpv_inflect::Formality::Informal,
//!     jpv_inflect::Polarity::Affirmative,
//!     jpv_inflect::Mood::Past,
//! );
//!
//! assert_eq!(paradigm.get(past).map(|p| p.first().default_form()), Some("読んだ"));
//! # Ok::<_, jpv_inflect::Error>(())
//! ```

mod error;
pub use self::error::{Error, ErrorKind, Result};

pub mod inflection;
pub use self::inflection::{
    Alternatives, Base, Formality, FormalityLevel, Inflection, Irregular, Mood, Paradigm,
    Polarity, Slot, Voice, Voices,
};

pub mod kana;

pub mod verb;
pub use self::verb::{generate, godan, ichidan, irregular, VerbClass};
