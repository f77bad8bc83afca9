// src/db/contact_repository.rs
// DOCUMENTATION: Contact message storage

use crate::errors::AppError;
use crate::i18n::Language;
use crate::models::ContactRequest;
use sqlx::MySqlPool;

pub struct ContactRepository;

impl ContactRepository {
    /// Store a validated message; returns the new row id
    pub async fn insert(
        pool: &MySqlPool,
        req: &ContactRequest,
        language: Language,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (name, email, phone, subject, message, language, created)
            VALUES (?, ?, ?, ?, ?, ?, UTC_TIMESTAMP())
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.subject)
        .bind(&req.message)
        .bind(language.code())
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to store contact message: {}", e);
            AppError::Database(e.to_string())
        })?;

        let id = result.last_insert_id();
        log::info!("Stored contact message {}", id);
        Ok(id)
    }
}
