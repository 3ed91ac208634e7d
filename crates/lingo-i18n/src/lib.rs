#![forbid(unsafe_code)]

//! In-memory localization lookup for Lingo.
//!
//! Holds named locale dictionaries, tracks a default and an active
//! locale, and translates text written in the default locale into the
//! active one by reverse lookup on the default dictionary.
//!
//! Loading dictionaries from disk and displaying the results are left to
//! the caller. With the `serde` feature, [`LocaleDictionary`] can be
//! deserialized from any flat string-to-string map.

pub mod dictionary;
pub mod manager;

pub use dictionary::{Locale, LocaleDictionary};
pub use manager::{I18nError, LocaleManager};
