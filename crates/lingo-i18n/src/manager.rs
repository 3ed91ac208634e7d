//! Locale registry with reverse phrase translation.
//!
//! Callers translate by passing the *default-locale text* of a phrase
//! rather than its key. The manager finds the key whose default value
//! matches and returns the active locale's value for that key.
//!
//! # Invariants
//!
//! 1. **Default is registered**: the default locale is inserted at
//!    construction and nothing is ever removed.
//!
//! 2. **Active is registered**: [`LocaleManager::set_active`] only accepts
//!    registered codes, and a rejected call leaves the active locale as it
//!    was.
//!
//! 3. **Translation is pure**: `translate` only reads.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | `set_active` with unregistered code | `Err(UnknownLocale)` |
//! | Unknown phrase | Value not in default dictionary | `Err(UnknownPhrase)` |
//! | Untranslated key | Key missing in active dictionary | `Ok(None)` |
//! | Re-registration | `register` with existing code | Overwrites, logs a warning |

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::dictionary::{Locale, LocaleDictionary};

/// Errors from locale manager operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The requested locale has not been registered.
    UnknownLocale(String),
    /// The phrase is not a value in the default locale.
    UnknownPhrase {
        phrase: String,
        default_locale: String,
    },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLocale(code) => write!(f, "locale '{code}' has not been registered"),
            Self::UnknownPhrase {
                phrase,
                default_locale,
            } => write!(
                f,
                "phrase '{phrase}' does not exist in default locale '{default_locale}'"
            ),
        }
    }
}

impl std::error::Error for I18nError {}

/// Registry of locale dictionaries with one default and one active locale.
///
/// # Example
///
/// ```
/// use lingo_i18n::{LocaleDictionary, LocaleManager};
///
/// let en = LocaleDictionary::from([
///     ("hello", "Hello World!"),
///     ("subtitle", "This is a subtitle!"),
/// ]);
/// let es = LocaleDictionary::from([
///     ("hello", "Hola Mundo!"),
///     ("subtitle", "¡Este es un subtítulo!"),
/// ]);
///
/// let mut manager = LocaleManager::new("en", en);
/// manager.register("es", es);
///
/// assert_eq!(manager.translate("Hello World!"), Ok(Some("Hello World!")));
///
/// manager.set_active("es").unwrap();
/// assert_eq!(manager.translate("Hello World!"), Ok(Some("Hola Mundo!")));
/// ```
#[derive(Debug, Clone)]
pub struct LocaleManager {
    default_code: Locale,
    current_code: Locale,
    locales: HashMap<Locale, LocaleDictionary>,
    /// Registration order of `locales` keys.
    order: Vec<Locale>,
}

impl LocaleManager {
    /// Create a manager whose default and active locale is `default_code`.
    #[must_use]
    pub fn new(default_code: impl Into<String>, default_dictionary: LocaleDictionary) -> Self {
        let default_code = default_code.into();
        let mut locales = HashMap::new();
        locales.insert(default_code.clone(), default_dictionary);
        Self {
            current_code: default_code.clone(),
            order: vec![default_code.clone()],
            default_code,
            locales,
        }
    }

    /// Add a locale, replacing (with a warning) any existing one under `code`.
    ///
    /// Replacing the default locale also replaces the set of phrases that
    /// [`translate`](Self::translate) accepts.
    pub fn register(&mut self, code: impl Into<String>, dictionary: LocaleDictionary) {
        let code = code.into();
        let keys = dictionary.len();
        if self.locales.insert(code.clone(), dictionary).is_some() {
            warn!(
                locale = %code,
                keys,
                "locale already registered; overwritten by this call to register"
            );
        } else {
            debug!(locale = %code, keys, "locale registered");
            self.order.push(code);
        }
    }

    /// Make `code` the active locale.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnknownLocale`] if `code` was never registered.
    /// The active locale is unchanged in that case.
    pub fn set_active(&mut self, code: &str) -> Result<(), I18nError> {
        if !self.locales.contains_key(code) {
            debug!(locale = code, active = %self.current_code, "rejected unknown locale");
            return Err(I18nError::UnknownLocale(code.to_string()));
        }
        debug!(from = %self.current_code, to = code, "active locale changed");
        self.current_code = code.to_string();
        Ok(())
    }

    /// All registered locale codes, in registration order.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Translate a default-locale phrase into the active locale.
    ///
    /// Returns `Ok(None)` when the phrase is known but the active locale
    /// does not define its key.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnknownPhrase`] if no key in the default
    /// dictionary has exactly this value.
    pub fn translate(&self, phrase: &str) -> Result<Option<&str>, I18nError> {
        let Some(key) = self.default_dictionary().key_of(phrase) else {
            return Err(I18nError::UnknownPhrase {
                phrase: phrase.to_string(),
                default_locale: self.default_code.clone(),
            });
        };
        let translated = self.active_dictionary().get(key);
        trace!(phrase, key, locale = %self.current_code, found = translated.is_some(), "translate");
        Ok(translated)
    }

    /// The default locale code.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_code
    }

    /// The active locale code.
    #[must_use]
    pub fn active_locale(&self) -> &str {
        &self.current_code
    }

    /// Whether `code` has a registered dictionary.
    #[must_use]
    pub fn is_registered(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// The dictionary registered under `code`.
    #[must_use]
    pub fn dictionary(&self, code: &str) -> Option<&LocaleDictionary> {
        self.locales.get(code)
    }

    /// The default locale's dictionary.
    #[must_use]
    pub fn default_dictionary(&self) -> &LocaleDictionary {
        self.registered(&self.default_code)
    }

    /// The active locale's dictionary.
    #[must_use]
    pub fn active_dictionary(&self) -> &LocaleDictionary {
        self.registered(&self.current_code)
    }

    fn registered(&self, code: &str) -> &LocaleDictionary {
        // Both tracked codes are always present; see module invariants.
        &self.locales[code]
    }
}
