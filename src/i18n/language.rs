//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a small copyable handle that is
//! validated against the registry instead of being a hardcoded enum.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// This type represents a language that has been validated against the registry.
/// It ensures that only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "am")
    code: &'static str,
}

impl Language {
    /// English, the canonical content language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Amharic, the translated content language.
    pub const AMHARIC: Language = Language { code: "am" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "am")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Create a Language from a code, falling back to the canonical language.
    ///
    /// Unknown or disabled codes resolve to the canonical language rather
    /// than failing; display code paths never error on a bad `lang` value.
    pub fn from_code_or_canonical(code: &str) -> Language {
        Language::from_code(code).unwrap_or_else(|_| Language::canonical())
    }

    /// Get the canonical (source) language.
    ///
    /// This is the language content is originally authored in, and which all
    /// translated fields fall back to.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    ///
    /// # Returns
    /// `true` if this is the source language, `false` if it's a translation target.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
