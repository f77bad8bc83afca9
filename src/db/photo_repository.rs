// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: Photo lookup, full-text search, tags, comments and faves

use crate::errors::AppError;
use crate::models::{DataRow, Fave, Photo, PhotoComment, Tag};
use sqlx::MySqlPool;
use uuid::Uuid;

/// Columns every photo query selects, aliased to the names Photo::from_row reads
pub(crate) const PHOTO_COLUMNS: &str = r#"
    p.id AS photo_id, p.uuid, p.title, p.description, p.town, p.date_taken,
    p.width, p.height,
    g.id AS geo_id, g.latitude, g.longitude, g.accuracy,
    c.id AS country_id, c.name AS country_name, c.two_char_code, c.three_char_code,
    (SELECT COUNT(*) FROM photo_faves f WHERE f.photo_uuid = p.uuid) AS p_score
"#;

pub(crate) const PHOTO_JOINS: &str = r#"
    FROM photos p
    JOIN countries c ON c.id = p.country_id
    JOIN geo g ON g.photo_id = p.id
"#;

const MATCH_CLAUSE: &str = "MATCH (p.title, p.description, p.town) AGAINST (? IN NATURAL LANGUAGE MODE)";

/// Listing query: newest first, or ranked by match score then popularity
fn search_sql(searching: bool) -> String {
    if searching {
        format!(
            "SELECT {}, CAST({} * 100 AS SIGNED) AS c_score {} WHERE {} \
             ORDER BY c_score DESC, p_score DESC, p.date_taken DESC LIMIT ? OFFSET ?",
            PHOTO_COLUMNS, MATCH_CLAUSE, PHOTO_JOINS, MATCH_CLAUSE
        )
    } else {
        format!(
            "SELECT {}, 0 AS c_score {} ORDER BY p.date_taken DESC, p.id DESC LIMIT ? OFFSET ?",
            PHOTO_COLUMNS, PHOTO_JOINS
        )
    }
}

/// Counts over the same joins as search_sql so totals match what can be listed
fn count_sql(searching: bool) -> String {
    if searching {
        format!("SELECT COUNT(*) {} WHERE {}", PHOTO_JOINS, MATCH_CLAUSE)
    } else {
        format!("SELECT COUNT(*) {}", PHOTO_JOINS)
    }
}

pub(crate) fn photos_from_rows(rows: &[DataRow]) -> Result<Vec<Photo>, AppError> {
    rows.iter()
        .map(|row| Photo::from_row(row).map_err(AppError::from))
        .collect()
}

pub struct PhotoRepository;

impl PhotoRepository {
    /// Fetch a single photo by its public uuid
    pub async fn get_by_uuid(pool: &MySqlPool, uuid: &Uuid) -> Result<Option<Photo>, AppError> {
        let sql = format!("SELECT {}, 0 AS c_score {} WHERE p.uuid = ?", PHOTO_COLUMNS, PHOTO_JOINS);

        let row = sqlx::query_as::<_, DataRow>(&sql)
            .bind(uuid.to_string())
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch photo {}: {}", uuid, e);
                AppError::Database(e.to_string())
            })?;

        row.map(|row| Photo::from_row(&row).map_err(AppError::from))
            .transpose()
    }

    /// Newest first, or ranked by match score then popularity when searching
    pub async fn search(
        pool: &MySqlPool,
        term: Option<&str>,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<Photo>, AppError> {
        let sql = search_sql(term.is_some());
        let query = sqlx::query_as::<_, DataRow>(&sql);
        let query = match term {
            Some(term) => query.bind(term).bind(term),
            None => query,
        };
        let rows = query
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Photo search failed: {}", e);
                AppError::Database(e.to_string())
            })?;

        log::debug!("Photo search returned {} rows", rows.len());
        photos_from_rows(&rows)
    }

    pub async fn count(pool: &MySqlPool, term: Option<&str>) -> Result<u64, AppError> {
        let sql = count_sql(term.is_some());
        let query = sqlx::query_as::<_, (i64,)>(&sql);
        let query = match term {
            Some(term) => query.bind(term),
            None => query,
        };
        let result = query.fetch_one(pool).await;

        let (count,) = result.map_err(|e| {
            log::error!("Photo count failed: {}", e);
            AppError::Database(e.to_string())
        })?;

        Ok(count.max(0) as u64)
    }

    pub async fn get_tags(pool: &MySqlPool, uuid: &Uuid) -> Result<Vec<Tag>, AppError> {
        let rows = sqlx::query_as::<_, DataRow>(
            r#"
            SELECT t.id AS tag_id, p.uuid AS photo_uuid, t.tag
            FROM photo_tags t
            JOIN photos p ON p.id = t.photo_id
            WHERE p.uuid = ?
            ORDER BY t.tag ASC
            "#,
        )
        .bind(uuid.to_string())
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch tags for photo {}: {}", uuid, e);
            AppError::Database(e.to_string())
        })?;

        rows.iter()
            .map(|row| Tag::from_row(row).map_err(AppError::from))
            .collect()
    }

    pub async fn get_comments(pool: &MySqlPool, uuid: &Uuid) -> Result<Vec<PhotoComment>, AppError> {
        let rows = sqlx::query_as::<_, DataRow>(
            r#"
            SELECT p.uuid AS photo_uuid, pc.comment, pc.created,
                   u.name AS title, u.uuid AS user_uuid
            FROM photo_comments pc
            JOIN photos p ON p.id = pc.photo_id
            JOIN users u ON u.id = pc.user_id
            WHERE p.uuid = ?
            ORDER BY pc.created DESC
            "#,
        )
        .bind(uuid.to_string())
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch comments for photo {}: {}", uuid, e);
            AppError::Database(e.to_string())
        })?;

        rows.iter()
            .map(|row| PhotoComment::from_row(row).map_err(AppError::from))
            .collect()
    }

    /// Record a fave; a repeat fave from the same visitor is ignored
    /// DOCUMENTATION: Returns true when a new row was written
    pub async fn add_fave(pool: &MySqlPool, fave: &Fave) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT IGNORE INTO photo_faves (photo_uuid, user_uuid, created)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(fave.photo_uuid.to_string())
        .bind(fave.user_uuid.to_string())
        .bind(fave.created.naive_utc())
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to add fave for photo {}: {}", fave.photo_uuid, e);
            AppError::Database(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn fave_count(pool: &MySqlPool, uuid: &Uuid) -> Result<i64, AppError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM photo_faves WHERE photo_uuid = ?")
                .bind(uuid.to_string())
                .fetch_one(pool)
                .await
                .map_err(|e| {
                    log::error!("Failed to count faves for photo {}: {}", uuid, e);
                    AppError::Database(e.to_string())
                })?;

        Ok(count)
    }
}
