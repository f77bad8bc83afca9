// src/i18n/translator.rs
// DOCUMENTATION: Locale file loading and translation lookup
// PURPOSE: Resolve dotted keys per language with English fallback and placeholders

use super::Language;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading locale files
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Failed to read locale file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid locale file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Locale file {0} must contain a JSON object")]
    NotAnObject(PathBuf),

    #[error("No English locale files found under {0}")]
    MissingFallback(PathBuf),
}

/// A (language, filename) pair naming one translation table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationIdentifier {
    pub language: Language,
    pub filename: String,
}

impl TranslationIdentifier {
    pub fn new(language: Language, filename: impl Into<String>) -> Self {
        Self {
            language,
            filename: filename.into(),
        }
    }

    /// Locale file path: {root}/{lang}/{filename}.json
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(self.language.code())
            .join(format!("{}.json", self.filename))
    }
}

/// Deferred translation: resolved once the request language is known
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub filename: &'static str,
    pub key: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl Message {
    pub fn new(filename: &'static str, key: &'static str) -> Self {
        Self {
            filename,
            key,
            params: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.filename, self.key)
    }
}

/// In-memory translation tables for every supported language
/// DOCUMENTATION: Immutable after load; shared across workers behind an Arc.
/// Keyed language first so lookups borrow the filename instead of building a key.
#[derive(Debug, Default)]
pub struct Translator {
    tables: HashMap<Language, HashMap<String, Value>>,
}

impl Translator {
    /// Load every {lang}/{file}.json under root
    /// DOCUMENTATION: Languages without a directory are skipped,
    /// but English must be present since it backs every lookup
    pub async fn load(root: &Path) -> Result<Self, I18nError> {
        let mut translator = Translator::default();

        for language in Language::ALL {
            let dir = root.join(language.code());
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::warn!("No locale directory for {}: {}", language.code(), dir.display());
                    continue;
                }
                Err(source) => return Err(I18nError::Io { path: dir, source }),
            };

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|source| I18nError::Io {
                    path: dir.clone(),
                    source,
                })?
            {
                let entry_path = entry.path();
                if entry_path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(filename) = entry_path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                let id = TranslationIdentifier::new(language, filename);
                let path = id.path(root);
                let table = Self::read_table(&path).await?;
                log::debug!("Loaded locale file {}", path.display());
                translator.insert(id, table);
            }
        }

        let has_fallback = translator
            .tables
            .get(&Language::English)
            .is_some_and(|files| !files.is_empty());
        if !has_fallback {
            return Err(I18nError::MissingFallback(root.to_path_buf()));
        }

        let files: usize = translator.tables.values().map(HashMap::len).sum();
        log::info!("Loaded {} locale files from {}", files, root.display());
        Ok(translator)
    }

    async fn read_table(path: &Path) -> Result<Value, I18nError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| I18nError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let table: Value = serde_json::from_str(&raw).map_err(|source| I18nError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if !table.is_object() {
            return Err(I18nError::NotAnObject(path.to_path_buf()));
        }
        Ok(table)
    }

    pub fn insert(&mut self, id: TranslationIdentifier, table: Value) {
        self.tables
            .entry(id.language)
            .or_default()
            .insert(id.filename, table);
    }

    /// Raw lookup in a single language, no fallback
    pub fn lookup(&self, language: Language, filename: &str, key: &str) -> Option<&str> {
        self.tables
            .get(&language)?
            .get(filename)
            .and_then(|table| nested_get(table, key))
            .and_then(Value::as_str)
    }

    /// Translate a dotted key, falling back to English, then to the key itself
    pub fn get(
        &self,
        language: Language,
        filename: &str,
        key: &str,
        params: &[(&str, &str)],
    ) -> String {
        let template = self.lookup(language, filename, key).or_else(|| {
            if language != Language::English {
                log::debug!(
                    "Missing {} translation for {}.{}, using English",
                    language.code(),
                    filename,
                    key
                );
            }
            self.lookup(Language::English, filename, key)
        });

        match template {
            Some(template) => substitute(template, params),
            None => {
                log::warn!("Missing translation {}.{}", filename, key);
                format!("{}.{}", filename, key)
            }
        }
    }

    pub fn translate(&self, language: Language, message: &Message) -> String {
        let params: Vec<(&str, &str)> = message
            .params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        self.get(language, message.filename, message.key, &params)
    }
}

/// Walk nested objects following a dotted key ("errors.not_found")
fn nested_get<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

/// Replace {name} placeholders in one pass; unknown names stay as written
fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.iter().find(|(n, _)| *n == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
impl Translator {
    /// Small table set shared by tests across modules
    pub fn for_tests() -> Self {
        let mut translator = Translator::default();
        translator.insert(
            TranslationIdentifier::new(Language::English, "common"),
            serde_json::json!({
                "site": { "name": "MyEspacio" },
                "nav": { "home": "Home", "photos": "Photos", "albums": "Albums", "contact": "Contact" },
                "errors": {
                    "title": "Error",
                    "not_found": "Sorry, {resource} could not be found.",
                    "page_not_found": "This page does not exist.",
                    "method_not_allowed": "This action is not allowed here.",
                    "server": "Something went wrong, please try again later."
                }
            }),
        );
        translator.insert(
            TranslationIdentifier::new(Language::French, "common"),
            serde_json::json!({
                "errors": {
                    "title": "Erreur",
                    "page_not_found": "Cette page n'existe pas."
                }
            }),
        );
        translator
    }
}
