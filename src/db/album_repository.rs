// src/db/album_repository.rs
// DOCUMENTATION: Album database operations

use super::photo_repository::{photos_from_rows, PHOTO_COLUMNS, PHOTO_JOINS};
use crate::errors::AppError;
use crate::models::{DataRow, Photo, PhotoAlbum};
use sqlx::MySqlPool;
use uuid::Uuid;

/// Album members joined the same way the photo listing joins them
const ALBUM_PHOTO_FILTER: &str = "JOIN photo_album_links l ON l.photo_id = p.id WHERE l.album_id = ?";

const ALBUM_SELECT: &str = r#"
    SELECT a.id AS album_id, a.uuid, a.title, a.description,
           c.id AS country_id, c.name AS country_name, c.two_char_code, c.three_char_code
    FROM photo_albums a
    JOIN countries c ON c.id = a.country_id
"#;

fn album_photos_sql() -> String {
    format!(
        "SELECT {}, 0 AS c_score {} {} ORDER BY p.date_taken ASC, p.id ASC LIMIT ? OFFSET ?",
        PHOTO_COLUMNS, PHOTO_JOINS, ALBUM_PHOTO_FILTER
    )
}

fn album_count_sql() -> String {
    format!("SELECT COUNT(*) {} {}", PHOTO_JOINS, ALBUM_PHOTO_FILTER)
}

pub struct AlbumRepository;

impl AlbumRepository {
    pub async fn get_all(pool: &MySqlPool) -> Result<Vec<PhotoAlbum>, AppError> {
        let sql = format!("{} ORDER BY a.title ASC", ALBUM_SELECT);
        let rows = sqlx::query_as::<_, DataRow>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch albums: {}", e);
                AppError::Database(e.to_string())
            })?;

        rows.iter()
            .map(|row| PhotoAlbum::from_row(row).map_err(AppError::from))
            .collect()
    }

    pub async fn get_by_uuid(pool: &MySqlPool, uuid: &Uuid) -> Result<Option<PhotoAlbum>, AppError> {
        let sql = format!("{} WHERE a.uuid = ?", ALBUM_SELECT);
        let row = sqlx::query_as::<_, DataRow>(&sql)
            .bind(uuid.to_string())
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch album {}: {}", uuid, e);
                AppError::Database(e.to_string())
            })?;

        row.map(|row| PhotoAlbum::from_row(&row).map_err(AppError::from))
            .transpose()
    }

    pub async fn get_photos(
        pool: &MySqlPool,
        album: &PhotoAlbum,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<Photo>, AppError> {
        let sql = album_photos_sql();
        let rows = sqlx::query_as::<_, DataRow>(&sql)
            .bind(album.id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch photos for album {}: {}", album.uuid, e);
                AppError::Database(e.to_string())
            })?;

        photos_from_rows(&rows)
    }

    pub async fn count_photos(pool: &MySqlPool, album: &PhotoAlbum) -> Result<u64, AppError> {
        let sql = album_count_sql();
        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(album.id)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to count photos for album {}: {}", album.uuid, e);
                AppError::Database(e.to_string())
            })?;

        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_count_matches_album_listing() {
        let listing = album_photos_sql();
        let count = album_count_sql();
        let shared = format!("{} {}", PHOTO_JOINS, ALBUM_PHOTO_FILTER);
        assert!(listing.contains(&shared));
        assert!(count.ends_with(&shared));
    }
}
