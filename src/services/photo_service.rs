// src/services/photo_service.rs
// DOCUMENTATION: Business logic for the photo gallery
// PURPOSE: Intermediary between handlers and repositories; pagination and view assembly

use crate::db::{AlbumRepository, PhotoRepository};
use crate::errors::AppError;
use crate::i18n::Message;
use crate::models::{Fave, Photo, PhotoAlbum, PhotoComment, Tag};
use serde::Serialize;
use sqlx::MySqlPool;
use uuid::Uuid;

/// Page position within a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Current page (1-based)
    pub page: u32,
    pub per_page: u32,
    /// Total matching items
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    /// Requested pages below 1 become 1; pages past the end stay put and yield no items
    pub fn new(requested_page: Option<u32>, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page as u64).min(u32::MAX as u64) as u32;
        Pagination {
            page: requested_page.unwrap_or(1).max(1),
            per_page,
            total,
            total_pages,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Lenient page parameter: anything that is not a positive integer means page 1
pub fn parse_page(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|p| p.trim().parse::<u32>().ok()).filter(|p| *p > 0)
}

/// Trimmed search term; blank means no search
pub fn normalise_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.chars().take(100).collect())
}

#[derive(Debug, Serialize)]
pub struct PhotoGrid {
    pub search: Option<String>,
    pub photos: Vec<Photo>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct PhotoDetail {
    pub photo: Photo,
    pub tags: Vec<Tag>,
    pub comments: Vec<PhotoComment>,
}

#[derive(Debug, Serialize)]
pub struct AlbumView {
    pub album: PhotoAlbum,
    pub photos: Vec<Photo>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct FaveResult {
    pub photo_uuid: Uuid,
    /// False when this visitor had already faved the photo
    pub added: bool,
    pub fave_count: i64,
}

pub struct PhotoService;

impl PhotoService {
    pub async fn grid(
        pool: &MySqlPool,
        search: Option<String>,
        page: Option<u32>,
        per_page: u32,
    ) -> Result<PhotoGrid, AppError> {
        let total = PhotoRepository::count(pool, search.as_deref()).await?;
        let pagination = Pagination::new(page, per_page, total);

        let photos = if pagination.offset() < total {
            PhotoRepository::search(pool, search.as_deref(), pagination.per_page, pagination.offset())
                .await?
        } else {
            Vec::new()
        };

        log::info!(
            "Photo grid: {} results, {} total (page {}/{})",
            photos.len(),
            total,
            pagination.page,
            pagination.total_pages
        );

        Ok(PhotoGrid {
            search,
            photos,
            pagination,
        })
    }

    pub async fn detail(pool: &MySqlPool, uuid: Uuid) -> Result<PhotoDetail, AppError> {
        let photo = PhotoRepository::get_by_uuid(pool, &uuid)
            .await?
            .ok_or_else(photo_not_found)?;
        let tags = PhotoRepository::get_tags(pool, &uuid).await?;
        let comments = PhotoRepository::get_comments(pool, &uuid).await?;

        Ok(PhotoDetail {
            photo,
            tags,
            comments,
        })
    }

    pub async fn fave(pool: &MySqlPool, photo_uuid: Uuid, visitor: Uuid) -> Result<FaveResult, AppError> {
        PhotoRepository::get_by_uuid(pool, &photo_uuid)
            .await?
            .ok_or_else(photo_not_found)?;

        let added = PhotoRepository::add_fave(pool, &Fave::new(photo_uuid, visitor)).await?;
        let fave_count = PhotoRepository::fave_count(pool, &photo_uuid).await?;

        if added {
            log::info!("Visitor {} faved photo {}", visitor, photo_uuid);
        }

        Ok(FaveResult {
            photo_uuid,
            added,
            fave_count,
        })
    }

    pub async fn albums(pool: &MySqlPool) -> Result<Vec<PhotoAlbum>, AppError> {
        AlbumRepository::get_all(pool).await
    }

    pub async fn album(
        pool: &MySqlPool,
        uuid: Uuid,
        page: Option<u32>,
        per_page: u32,
    ) -> Result<AlbumView, AppError> {
        let album = AlbumRepository::get_by_uuid(pool, &uuid)
            .await?
            .ok_or_else(|| AppError::NotFound(Message::new("photos", "album.not_found")))?;

        let total = AlbumRepository::count_photos(pool, &album).await?;
        let pagination = Pagination::new(page, per_page, total);
        let photos = if pagination.offset() < total {
            AlbumRepository::get_photos(pool, &album, pagination.per_page, pagination.offset())
                .await?
        } else {
            Vec::new()
        };

        Ok(AlbumView {
            album,
            photos,
            pagination,
        })
    }
}

fn photo_not_found() -> AppError {
    AppError::NotFound(Message::new("photos", "photo.not_found"))
}
