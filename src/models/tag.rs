// src/models/tag.rs

use super::{DataRow, ModelError};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub id: i64,
    pub photo_uuid: Uuid,
    pub tag: String,
}

impl Tag {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(Tag {
            id: row.int("tag_id")?,
            photo_uuid: row.uuid("photo_uuid")?,
            tag: row.string("tag")?.trim().to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_normalised() {
        let row = DataRow::from_pairs([
            ("tag_id", Some("1")),
            ("photo_uuid", Some("5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4")),
            ("tag", Some(" Sunset ")),
        ]);
        assert_eq!(Tag::from_row(&row).unwrap().tag, "sunset");
    }
}
