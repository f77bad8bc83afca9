// src/views/albums.rs

use super::photos::{card, pagination};
use crate::http::RequestContext;
use crate::models::PhotoAlbum;
use crate::services::AlbumView;
use maud::{html, Markup};

pub fn album_url(album: &PhotoAlbum) -> String {
    match album.url_slug().as_str() {
        "" => format!("/album/{}", album.uuid),
        slug => format!("/album/{}/{}", album.uuid, slug),
    }
}

pub fn list(ctx: &RequestContext, albums: &[PhotoAlbum]) -> Markup {
    html! {
        section.albums {
            h1 { (ctx.t("photos", "album.list_title")) }
            @if albums.is_empty() {
                p.empty { (ctx.t("photos", "album.empty")) }
            } @else {
                ul {
                    @for album in albums {
                        li data-uuid=(album.uuid.to_string()) {
                            a href=(album_url(album)) { (album.title) }
                            " (" (album.country.name) ")"
                        }
                    }
                }
            }
        }
    }
}

pub fn show(ctx: &RequestContext, view: &AlbumView) -> Markup {
    let base = album_url(&view.album);
    html! {
        section.album data-uuid=(view.album.uuid.to_string()) {
            h1 { (view.album.title) }
            @if let Some(description) = &view.album.description {
                p.description { (description) }
            }
            @if view.photos.is_empty() {
                p.empty { (ctx.t("photos", "grid.empty")) }
            } @else {
                div.tiles {
                    @for photo in &view.photos { (card(photo)) }
                }
            }
            (pagination(ctx, &view.pagination, &base))
        }
    }
}
