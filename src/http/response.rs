// src/http/response.rs
// DOCUMENTATION: Page rendering
// PURPOSE: Turn a handler's Page into JSON, a partial fragment or a full HTML page

use super::{Layout, RequestContext, ResponseFormat};
use crate::views;
use actix_web::http::header::{self, ContentType, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use maud::Markup;
use serde_json::Value;

/// What a handler produces: one body per representation
pub struct Page {
    pub status: StatusCode,
    pub title: String,
    pub body: Markup,
    pub data: Value,
}

impl Page {
    pub fn new(title: impl Into<String>, body: Markup, data: Value) -> Self {
        Page {
            status: StatusCode::OK,
            title: title.into(),
            body,
            data,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl RequestContext {
    pub fn render(&self, page: Page) -> HttpResponse {
        let mut response = match (self.format, self.layout) {
            (ResponseFormat::Json, _) => HttpResponse::build(page.status).json(page.data),
            (ResponseFormat::Html, Layout::Partial) => HttpResponse::build(page.status)
                .content_type(ContentType::html())
                .body(page.body.into_string()),
            (ResponseFormat::Html, Layout::Full) => {
                let html = views::layout::page(self, &page.title, page.body);
                HttpResponse::build(page.status)
                    .content_type(ContentType::html())
                    .body(html.into_string())
            }
        };

        // same URL, three representations
        response
            .headers_mut()
            .insert(header::VARY, HeaderValue::from_static("Accept, X-Layout"));
        response
    }
}
