// src/models/country.rs

use super::{DataRow, ModelError};
use serde::Serialize;

/// Country a photo or album was taken in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub two_char_code: String,
    pub three_char_code: String,
}

impl Country {
    /// Build from a row using the country_* column aliases
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        let two_char_code = row.string("two_char_code")?.to_ascii_uppercase();
        if two_char_code.len() != 2 {
            return Err(ModelError::invalid("two_char_code", two_char_code, "ISO 3166 alpha-2 code"));
        }
        let three_char_code = row.string("three_char_code")?.to_ascii_uppercase();
        if three_char_code.len() != 3 {
            return Err(ModelError::invalid(
                "three_char_code",
                three_char_code,
                "ISO 3166 alpha-3 code",
            ));
        }

        Ok(Country {
            id: row.int("country_id")?,
            name: row.string("country_name")?,
            two_char_code,
            three_char_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_uppercased() {
        let row = DataRow::from_pairs([
            ("country_id", Some("45")),
            ("country_name", Some("France")),
            ("two_char_code", Some("fr")),
            ("three_char_code", Some("fra")),
        ]);
        let country = Country::from_row(&row).unwrap();
        assert_eq!(country.two_char_code, "FR");
        assert_eq!(country.three_char_code, "FRA");
    }

    #[test]
    fn test_bad_code_length_is_rejected() {
        let row = DataRow::from_pairs([
            ("country_id", Some("45")),
            ("country_name", Some("France")),
            ("two_char_code", Some("FRA")),
            ("three_char_code", Some("FRA")),
        ]);
        assert!(Country::from_row(&row).is_err());
    }
}
