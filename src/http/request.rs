// src/http/request.rs
// DOCUMENTATION: Per-request negotiation
// PURPOSE: Decide JSON vs HTML, partial vs full layout, and the visitor's language

use crate::config::Config;
use crate::i18n::{Language, Message, Translator};
use actix_web::dev::Payload;
use actix_web::http::header::{ACCEPT, ACCEPT_LANGUAGE};
use actix_web::{error::ErrorInternalServerError, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Header the front end sends to ask for a partial HTML fragment
pub const LAYOUT_HEADER: &str = "X-Layout";

/// Cookie and query parameter carrying an explicit language choice
pub const LANGUAGE_PARAM: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Html,
}

impl ResponseFormat {
    /// JSON when the Accept header lists application/json
    pub fn from_accept(accept: Option<&str>) -> Self {
        let wants_json = accept
            .map(|value| {
                value.split(',').any(|media| {
                    media
                        .split(';')
                        .next()
                        .map(|m| m.trim().eq_ignore_ascii_case("application/json"))
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false);

        if wants_json {
            ResponseFormat::Json
        } else {
            ResponseFormat::Html
        }
    }
}

/// Only meaningful for HTML responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Content only; the page shell is already in the browser
    Partial,
    /// Content wrapped in the full site layout
    Full,
}

impl Layout {
    /// Partial only when the header matches the configured token.
    /// An empty configured token never matches.
    pub fn from_token(header: Option<&str>, expected: &str) -> Self {
        match header {
            Some(token) if !expected.is_empty() && constant_time_eq(token, expected) => {
                Layout::Partial
            }
            Some(_) => {
                log::debug!("Layout token rejected, rendering full page");
                Layout::Full
            }
            None => Layout::Full,
        }
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Everything a handler needs to shape its response
#[derive(Clone)]
pub struct RequestContext {
    pub format: ResponseFormat,
    pub layout: Layout,
    pub language: Language,
    pub translator: web::Data<Translator>,
}

impl RequestContext {
    pub fn from_http_request(req: &HttpRequest) -> Result<Self, actix_web::Error> {
        let config = req.app_data::<web::Data<Config>>().ok_or_else(|| {
            log::error!("Config missing from application data");
            ErrorInternalServerError("configuration unavailable")
        })?;
        let translator = req
            .app_data::<web::Data<Translator>>()
            .cloned()
            .ok_or_else(|| {
                log::error!("Translator missing from application data");
                ErrorInternalServerError("translations unavailable")
            })?;

        let format = ResponseFormat::from_accept(header(req, ACCEPT.as_str()));
        let layout = Layout::from_token(header(req, LAYOUT_HEADER), &config.layout_token);
        let language = resolve_language(req);

        Ok(RequestContext {
            format,
            layout,
            language,
            translator,
        })
    }

    pub fn wants_json(&self) -> bool {
        self.format == ResponseFormat::Json
    }

    /// Translate a key without placeholders
    pub fn t(&self, filename: &str, key: &str) -> String {
        self.translator.get(self.language, filename, key, &[])
    }

    pub fn translate(&self, message: &Message) -> String {
        self.translator.translate(self.language, message)
    }
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Query parameter, then cookie, then Accept-Language, then English
fn resolve_language(req: &HttpRequest) -> Language {
    let from_query = web::Query::<std::collections::HashMap<String, String>>::from_query(
        req.query_string(),
    )
    .ok()
    .and_then(|q| q.get(LANGUAGE_PARAM).and_then(|code| Language::from_code(code)));

    from_query
        .or_else(|| {
            req.cookie(LANGUAGE_PARAM)
                .and_then(|c| Language::from_code(c.value()))
        })
        .or_else(|| header(req, ACCEPT_LANGUAGE.as_str()).and_then(Language::from_accept_language))
        .unwrap_or_default()
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(RequestContext::from_http_request(req))
    }
}
