// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for the photo gallery
// PURPOSE: Parse requests, call PhotoService, render grid/detail/fave responses, serve images

use super::common::method_not_allowed;
use super::parse_uuid;
use crate::config::Config;
use crate::errors::{AppError, InContext, RequestError};
use crate::http::{Page, RequestContext};
use crate::i18n::Message;
use crate::models::ImageSize;
use crate::services::{normalise_search, parse_page, PhotoService};
use crate::views;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use uuid::Uuid;

/// Cookie identifying an anonymous visitor for faves
pub const VISITOR_COOKIE: &str = "visitor";

/// Query string for the grid; kept as raw strings so bad values fall back to defaults
#[derive(Debug, Deserialize)]
pub struct GridQuery {
    pub search: Option<String>,
    pub page: Option<String>,
}

/// GET /photos
pub async fn photo_grid(
    ctx: RequestContext,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    query: web::Query<GridQuery>,
) -> Result<HttpResponse, RequestError> {
    let search = normalise_search(query.search.as_deref());
    let page = parse_page(query.page.as_deref());

    let grid = PhotoService::grid(pool.get_ref(), search, page, config.photos_per_page)
        .await
        .in_context(&ctx)?;

    let title = ctx.t("photos", "grid.title");
    let data = json!(grid);
    Ok(ctx.render(Page::new(title, views::photos::grid(&ctx, &grid), data)))
}

/// Path segments of /photo/{uuid} and /photo/{uuid}/{slug}; the slug is cosmetic
#[derive(Debug, Deserialize)]
pub struct PhotoPath {
    pub uuid: String,
}

/// GET /photo/{uuid}
pub async fn show_photo(
    ctx: RequestContext,
    pool: web::Data<MySqlPool>,
    path: web::Path<PhotoPath>,
) -> Result<HttpResponse, RequestError> {
    let uuid = parse_uuid(&ctx, &path.uuid, Message::new("photos", "photo.invalid_uuid"))?;

    let detail = PhotoService::detail(pool.get_ref(), uuid)
        .await
        .in_context(&ctx)?;

    let title = detail.photo.title.clone();
    let data = json!(detail);
    Ok(ctx.render(Page::new(title, views::photos::detail(&ctx, &detail), data)))
}

/// POST /photo/{uuid}/fave
/// DOCUMENTATION: Visitors without a visitor cookie get one on their first fave
pub async fn add_fave(
    ctx: RequestContext,
    req: HttpRequest,
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, RequestError> {
    let photo_uuid = parse_uuid(&ctx, &path, Message::new("photos", "photo.invalid_uuid"))?;

    let existing = visitor_id(&req);
    let visitor = existing.unwrap_or_else(Uuid::new_v4);

    let result = PhotoService::fave(pool.get_ref(), photo_uuid, visitor)
        .await
        .in_context(&ctx)?;

    let message = fave_message(&ctx, result.added);
    let data = json!({
        "photo_uuid": result.photo_uuid,
        "added": result.added,
        "fave_count": result.fave_count,
        "message": message,
    });
    let page = Page::new(message.clone(), views::photos::fave_status(&ctx, &message, result.fave_count), data);
    let mut response = ctx.render(page);

    if existing.is_none() {
        let cookie = visitor_cookie(visitor);
        if let Err(e) = response.add_cookie(&cookie) {
            log::warn!("Could not set visitor cookie: {}", e);
        }
    }

    Ok(response)
}

fn fave_message(ctx: &RequestContext, added: bool) -> String {
    let key = if added { "fave.added" } else { "fave.already" };
    ctx.t("photos", key)
}

/// GET /photo/{uuid}/image
pub async fn photo_image(
    ctx: RequestContext,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, RequestError> {
    serve_image(ctx, &config, &path, ImageSize::Full).await
}

/// GET /photo/{uuid}/thumbnail
pub async fn photo_thumbnail(
    ctx: RequestContext,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, RequestError> {
    serve_image(ctx, &config, &path, ImageSize::Thumbnail).await
}

/// Read a JPEG from the photo directory; the uuid check keeps paths inside it
async fn serve_image(
    ctx: RequestContext,
    config: &Config,
    raw: &str,
    size: ImageSize,
) -> Result<HttpResponse, RequestError> {
    let uuid = parse_uuid(&ctx, raw, Message::new("photos", "photo.invalid_uuid"))?;
    let file = size.file_path(&config.photo_dir, &uuid);

    match tokio::fs::read(&file).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("image/jpeg")
            .insert_header(CacheControl(vec![
                CacheDirective::Public,
                CacheDirective::MaxAge(86400),
            ]))
            .body(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No {} file at {}", size.segment(), file.display());
            Err(RequestError::new(
                ctx,
                AppError::NotFound(Message::new("photos", "photo.image_not_found")),
            ))
        }
        Err(e) => Err(RequestError::new(
            ctx,
            AppError::Internal(format!("reading {}: {}", file.display(), e)),
        )),
    }
}

fn visitor_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(VISITOR_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

fn visitor_cookie(visitor: Uuid) -> Cookie<'static> {
    Cookie::build(VISITOR_COOKIE, visitor.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .finish()
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/photos")
            .route(web::get().to(photo_grid))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/photo/{uuid}")
            .route(web::get().to(show_photo))
            .default_service(web::to(method_not_allowed)),
    )
    // registered before the slug route so these segments are never read as a slug
    .service(
        web::resource("/photo/{uuid}/fave")
            .route(web::post().to(add_fave))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/photo/{uuid}/image")
            .route(web::get().to(photo_image))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/photo/{uuid}/thumbnail")
            .route(web::get().to(photo_thumbnail))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/photo/{uuid}/{slug}")
            .route(web::get().to(show_photo))
            .default_service(web::to(method_not_allowed)),
    );
}
