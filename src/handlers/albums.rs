// src/handlers/albums.rs
// DOCUMENTATION: HTTP handlers for photo albums

use super::common::method_not_allowed;
use super::parse_uuid;
use crate::config::Config;
use crate::errors::{InContext, RequestError};
use crate::http::{Page, RequestContext};
use crate::i18n::Message;
use crate::services::{parse_page, PhotoService};
use crate::views;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;

#[derive(Debug, Deserialize)]
pub struct AlbumQuery {
    pub page: Option<String>,
}

/// GET /albums
pub async fn list_albums(
    ctx: RequestContext,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, RequestError> {
    let albums = PhotoService::albums(pool.get_ref()).await.in_context(&ctx)?;

    let title = ctx.t("photos", "album.list_title");
    let data = json!({ "albums": albums });
    Ok(ctx.render(Page::new(title, views::albums::list(&ctx, &albums), data)))
}

#[derive(Debug, Deserialize)]
pub struct AlbumPath {
    pub uuid: String,
}

/// GET /album/{uuid} and /album/{uuid}/{slug}
pub async fn show_album(
    ctx: RequestContext,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    path: web::Path<AlbumPath>,
    query: web::Query<AlbumQuery>,
) -> Result<HttpResponse, RequestError> {
    let uuid = parse_uuid(&ctx, &path.uuid, Message::new("photos", "album.invalid_uuid"))?;
    let page = parse_page(query.page.as_deref());

    let view = PhotoService::album(pool.get_ref(), uuid, page, config.photos_per_page)
        .await
        .in_context(&ctx)?;

    let title = view.album.title.clone();
    let data = json!(view);
    Ok(ctx.render(Page::new(title, views::albums::show(&ctx, &view), data)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/albums")
            .route(web::get().to(list_albums))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(["/album/{uuid}", "/album/{uuid}/{slug}"])
            .route(web::get().to(show_album))
            .default_service(web::to(method_not_allowed)),
    );
}
