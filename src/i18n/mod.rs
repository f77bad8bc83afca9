// src/i18n/mod.rs
// DOCUMENTATION: Localisation module organization
// PURPOSE: Re-export language resolution and translation lookup

pub mod language;
pub mod translator;

pub use language::Language;
pub use translator::{Message, TranslationIdentifier, Translator};
