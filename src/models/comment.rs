// src/models/comment.rs

use super::{DataRow, ModelError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Comment left by a user; title is the author's display name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub comment: String,
    pub created: DateTime<Utc>,
    pub title: String,
    pub user_uuid: Uuid,
}

impl Comment {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(Comment {
            comment: row.string("comment")?,
            created: row.datetime("created")?,
            title: row.string("title")?,
            user_uuid: row.uuid("user_uuid")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoComment {
    pub photo_uuid: Uuid,
    #[serde(flatten)]
    pub comment: Comment,
}

impl PhotoComment {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        Ok(PhotoComment {
            photo_uuid: row.uuid("photo_uuid")?,
            comment: Comment::from_row(row)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_comment_flattens() {
        let row = DataRow::from_pairs([
            ("photo_uuid", Some("5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4")),
            ("comment", Some("Lovely light")),
            ("created", Some("2023-05-06 10:11:12")),
            ("title", Some("Sam")),
            ("user_uuid", Some("9d8c7b6a-5f4e-4d3c-8b2a-1f0e9d8c7b6a")),
        ]);
        let comment = PhotoComment::from_row(&row).unwrap();
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["comment"], "Lovely light");
        assert_eq!(json["photo_uuid"], "5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4");
        assert_eq!(json["title"], "Sam");
    }
}
