// src/views/photos.rs

use crate::http::RequestContext;
use crate::models::{ImageSize, Photo};
use crate::services::{Pagination, PhotoDetail, PhotoGrid};
use maud::{html, Markup};

pub fn photo_url(photo: &Photo) -> String {
    match photo.url_slug().as_str() {
        "" => format!("/photo/{}", photo.uuid),
        slug => format!("/photo/{}/{}", photo.uuid, slug),
    }
}

/// One grid tile
pub fn card(photo: &Photo) -> Markup {
    html! {
        figure.photo-card data-uuid=(photo.uuid.to_string()) data-orientation=(photo.dimensions.orientation().as_str()) {
            a href=(photo_url(photo)) {
                img src=(ImageSize::Thumbnail.url(&photo.uuid))
                    alt=(photo.title)
                    width=(photo.dimensions.width)
                    height=(photo.dimensions.height)
                    loading="lazy";
            }
            figcaption { (photo.title) }
        }
    }
}

pub fn pagination(ctx: &RequestContext, pagination: &Pagination, base: &str) -> Markup {
    // base already carries any query string
    let joiner = if base.contains('?') { '&' } else { '?' };
    let pages = pagination.total_pages.to_string();
    let current = pagination.page.to_string();
    html! {
        @if pagination.total_pages > 1 {
            nav.pagination {
                @if pagination.has_previous() {
                    a rel="prev" href={ (base) (joiner) "page=" (pagination.page - 1) } {
                        (ctx.t("common", "pagination.previous"))
                    }
                }
                span {
                    (ctx.translator.get(ctx.language, "common", "pagination.page", &[("page", current.as_str()), ("pages", pages.as_str())]))
                }
                @if pagination.has_next() {
                    a rel="next" href={ (base) (joiner) "page=" (pagination.page + 1) } {
                        (ctx.t("common", "pagination.next"))
                    }
                }
            }
        }
    }
}

pub fn grid(ctx: &RequestContext, grid: &PhotoGrid) -> Markup {
    let base = match &grid.search {
        Some(search) => format!("/photos?search={}", encode_query(search)),
        None => "/photos".to_string(),
    };
    html! {
        section.photo-grid {
            h1 { (ctx.t("photos", "grid.title")) }
            form.search action="/photos" method="get" {
                input type="search" name="search" value=[grid.search.as_deref()]
                    placeholder=(ctx.t("photos", "grid.search_placeholder"));
            }
            @if let Some(search) = &grid.search {
                p.search-summary {
                    (ctx.translator.get(ctx.language, "photos", "grid.search_results", &[("search", search.as_str())]))
                }
            }
            @if grid.photos.is_empty() {
                p.empty { (ctx.t("photos", "grid.empty")) }
            } @else {
                div.tiles {
                    @for photo in &grid.photos { (card(photo)) }
                }
            }
            (pagination(ctx, &grid.pagination, &base))
        }
    }
}

pub fn detail(ctx: &RequestContext, detail: &PhotoDetail) -> Markup {
    let photo = &detail.photo;
    let faves = photo.relevance.p_score.to_string();
    html! {
        article.photo data-uuid=(photo.uuid.to_string()) {
            img src=(ImageSize::Full.url(&photo.uuid))
                alt=(photo.title)
                width=(photo.dimensions.width)
                height=(photo.dimensions.height);
            h1 { (photo.title) }
            @if let Some(description) = &photo.description {
                p.description { (description) }
            }
            p.location {
                @match &photo.town {
                    Some(town) => {
                        (ctx.translator.get(ctx.language, "photos", "photo.location", &[("town", town.as_str()), ("country", photo.country.name.as_str())]))
                    }
                    None => { (photo.country.name) }
                }
            }
            @if let Some(taken) = photo.date_taken {
                p.taken {
                    (ctx.translator.get(ctx.language, "photos", "photo.taken", &[("date", taken.format("%Y-%m-%d").to_string().as_str())]))
                }
            }
            button.fave type="button" data-fave-url={ "/photo/" (photo.uuid.to_string()) "/fave" } {
                (ctx.translator.get(ctx.language, "photos", "photo.faves", &[("count", faves.as_str())]))
            }
            @if !detail.tags.is_empty() {
                section.tags {
                    h2 { (ctx.t("photos", "photo.tags")) }
                    ul {
                        @for tag in &detail.tags {
                            li { a href={ "/photos?search=" (encode_query(&tag.tag)) } { (tag.tag) } }
                        }
                    }
                }
            }
            @if !detail.comments.is_empty() {
                section.comments {
                    h2 { (ctx.t("photos", "photo.comments")) }
                    @for comment in &detail.comments {
                        blockquote {
                            p { (comment.comment.comment) }
                            footer {
                                (comment.comment.title) " · "
                                time datetime=(comment.comment.created.to_rfc3339()) {
                                    (comment.comment.created.format("%Y-%m-%d").to_string())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Confirmation after a fave; a repeat fave says so instead of claiming a new one
pub fn fave_status(ctx: &RequestContext, message: &str, count: i64) -> Markup {
    let count = count.to_string();
    html! {
        span.fave-status {
            (message) " "
            (ctx.translator.get(ctx.language, "photos", "photo.faves", &[("count", count.as_str())]))
        }
    }
}

/// Percent-encode a query value (RFC 3986 unreserved set kept)
pub fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Layout, ResponseFormat};
    use crate::i18n::{Language, Translator};
    use crate::models::photo::photo_row;
    use actix_web::web;

    #[test]
    fn test_card_links_detail_and_thumbnail() {
        let photo = Photo::from_row(&photo_row()).unwrap();
        let html = card(&photo).into_string();
        assert!(html.contains(r#"href="/photo/5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4/pont-neuf-at-dusk""#));
        assert!(html.contains(r#"src="/photo/5f1e2a3b-8c4d-4e6f-a7b8-c9d0e1f2a3b4/thumbnail""#));
    }

    #[test]
    fn test_fave_status_shows_given_message() {
        let ctx = RequestContext {
            format: ResponseFormat::Html,
            layout: Layout::Partial,
            language: Language::English,
            translator: web::Data::new(Translator::for_tests()),
        };
        let html = fave_status(&ctx, "Already in your faves.", 3).into_string();
        assert!(html.starts_with(r#"<span class="fave-status">Already in your faves. "#));
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("pont neuf"), "pont%20neuf");
        assert_eq!(encode_query("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query("é"), "%C3%A9");
    }
}
