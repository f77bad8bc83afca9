// src/models/row.rs
// DOCUMENTATION: Flat key/value rows returned by SQL queries
// PURPOSE: Decode any MySQL row into text values and coerce them back into typed fields

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, FromRow, Row, TypeInfo};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Failures while building an entity from a row
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: '{value}' is not a valid {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl ModelError {
    pub fn invalid(field: &str, value: impl ToString, expected: &'static str) -> Self {
        ModelError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}

/// One result row keyed by column name (or alias)
/// DOCUMENTATION: SQL NULL is stored as None
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRow {
    values: BTreeMap<String, Option<String>>,
}

impl DataRow {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.values.insert(key.into(), value);
    }

    /// Raw value: None when the key is absent, NULL or empty
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    pub fn string(&self, key: &str) -> Result<String, ModelError> {
        self.required(key).map(str::to_string)
    }

    pub fn optional_string(&self, key: &str) -> Option<String> {
        self.raw(key).map(str::to_string)
    }

    pub fn int(&self, key: &str) -> Result<i64, ModelError> {
        let value = self.required(key)?;
        value
            .trim()
            .parse()
            .map_err(|_| ModelError::invalid(key, value, "integer"))
    }

    pub fn optional_int(&self, key: &str) -> Result<Option<i64>, ModelError> {
        self.raw(key).map(|_| self.int(key)).transpose()
    }

    pub fn unsigned(&self, key: &str) -> Result<u32, ModelError> {
        let value = self.required(key)?;
        value
            .trim()
            .parse()
            .map_err(|_| ModelError::invalid(key, value, "unsigned integer"))
    }

    pub fn float(&self, key: &str) -> Result<f64, ModelError> {
        let value = self.required(key)?;
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ModelError::invalid(key, value, "number"))
    }

    /// Accepts 1/0, true/false, yes/no
    pub fn bool(&self, key: &str) -> Result<bool, ModelError> {
        let value = self.required(key)?;
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ModelError::invalid(key, value, "boolean")),
        }
    }

    pub fn uuid(&self, key: &str) -> Result<Uuid, ModelError> {
        let value = self.required(key)?;
        Uuid::parse_str(value.trim()).map_err(|_| ModelError::invalid(key, value, "uuid"))
    }

    /// MySQL DATETIME/TIMESTAMP text, a bare date, or RFC 3339; read as UTC
    pub fn datetime(&self, key: &str) -> Result<DateTime<Utc>, ModelError> {
        let value = self.required(key)?;
        parse_datetime(value.trim()).ok_or_else(|| ModelError::invalid(key, value, "datetime"))
    }

    pub fn optional_datetime(&self, key: &str) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.raw(key).map(|_| self.datetime(key)).transpose()
    }

    fn required(&self, key: &str) -> Result<&str, ModelError> {
        self.raw(key)
            .ok_or_else(|| ModelError::MissingField(key.to_string()))
    }
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render every column to text so entities can share one coercion path
/// DOCUMENTATION: DECIMAL columns must be CAST in SQL; they have no text decoder
impl<'r> FromRow<'r, MySqlRow> for DataRow {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        let mut data = DataRow::default();

        for column in row.columns() {
            let index = column.ordinal();
            let type_name = column.type_info().name();

            let value = match type_name {
                "BOOLEAN" => row
                    .try_get::<Option<bool>, _>(index)?
                    .map(|v| if v { "1" } else { "0" }.to_string()),
                "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
                    row.try_get::<Option<i64>, _>(index)?.map(|v| v.to_string())
                }
                name if name.ends_with("UNSIGNED") => {
                    row.try_get::<Option<u64>, _>(index)?.map(|v| v.to_string())
                }
                "FLOAT" => row.try_get::<Option<f32>, _>(index)?.map(|v| v.to_string()),
                "DOUBLE" => row.try_get::<Option<f64>, _>(index)?.map(|v| v.to_string()),
                "DATETIME" | "TIMESTAMP" => row
                    .try_get::<Option<NaiveDateTime>, _>(index)?
                    .map(|v| v.format(DATETIME_FORMAT).to_string()),
                "DATE" => row
                    .try_get::<Option<NaiveDate>, _>(index)?
                    .map(|v| v.format(DATE_FORMAT).to_string()),
                _ => row.try_get::<Option<String>, _>(index)?,
            };

            data.insert(column.name(), value);
        }

        Ok(data)
    }
}
