//! Internationalization (i18n) module for the bilingual content service.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the validated `Language` type, and the localized UI string
//! tables served to the client.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type that replaces hardcoded enums
//! - `strings`: Centralized localized UI strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! // Get canonical language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from a query parameter, falling back to English
//! let lang = Language::from_code_or_canonical("am");
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, AMHARIC_STRINGS, ENGLISH_STRINGS};
