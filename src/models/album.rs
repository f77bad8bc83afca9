// src/models/album.rs

use super::photo::slugify;
use super::{Country, DataRow, ModelError};
use serde::Serialize;
use uuid::Uuid;

/// Named collection of photos from one trip or place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoAlbum {
    pub id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub country: Country,
}

impl PhotoAlbum {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(PhotoAlbum {
            id: row.int("album_id")?,
            uuid: row.uuid("uuid")?,
            title: row.string("title")?,
            description: row.optional_string("description"),
            country: Country::from_row(row)?,
        })
    }

    pub fn url_slug(&self) -> String {
        slugify(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_from_row() {
        let row = DataRow::from_pairs([
            ("album_id", Some("2")),
            ("uuid", Some("1c9a0f5e-2d3b-4c8a-9e7f-0a1b2c3d4e5f")),
            ("title", Some("Lisbon, Spring 2022")),
            ("description", None),
            ("country_id", Some("171")),
            ("country_name", Some("Portugal")),
            ("two_char_code", Some("PT")),
            ("three_char_code", Some("PRT")),
        ]);
        let album = PhotoAlbum::from_row(&row).unwrap();
        assert_eq!(album.id, 2);
        assert_eq!(album.description, None);
        assert_eq!(album.country.three_char_code, "PRT");
        assert_eq!(album.url_slug(), "lisbon-spring-2022");
    }

    #[test]
    fn test_album_requires_uuid() {
        let row = DataRow::from_pairs([("album_id", Some("2")), ("title", Some("x"))]);
        assert_eq!(
            PhotoAlbum::from_row(&row),
            Err(ModelError::MissingField("uuid".to_string()))
        );
    }
}
