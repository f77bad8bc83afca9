// src/handlers/common.rs
// DOCUMENTATION: Home page and routing fallbacks
// PURPOSE: 404 for unknown paths, 405 for known paths with the wrong method

use crate::errors::{AppError, RequestError};
use crate::http::{Page, RequestContext};
use crate::i18n::Message;
use crate::views;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// GET /
pub async fn home(ctx: RequestContext) -> HttpResponse {
    let title = ctx.t("common", "home.title");
    let data = json!({
        "title": title,
        "intro": ctx.t("common", "home.intro"),
        "language": ctx.language,
    });
    ctx.render(Page::new(title.clone(), views::common::home(&ctx), data))
}

/// Default service: no route matched the path
pub async fn not_found(ctx: RequestContext) -> Result<HttpResponse, RequestError> {
    Err(RequestError::new(
        ctx,
        AppError::NotFound(Message::new("common", "errors.page_not_found")),
    ))
}

/// Resource default service: path matched, method did not
pub async fn method_not_allowed(ctx: RequestContext) -> Result<HttpResponse, RequestError> {
    Err(RequestError::new(ctx, AppError::MethodNotAllowed))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home))
            .default_service(web::to(method_not_allowed)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::Translator;
    use actix_web::http::header::ACCEPT;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Config::for_tests()))
                    .app_data(web::Data::new(Translator::for_tests()))
                    .configure(config)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_unknown_path_is_404() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/nowhere")
            .insert_header((ACCEPT, "application/json"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "This page does not exist.");
    }

    #[actix_web::test]
    async fn test_wrong_method_is_405() {
        let app = app!();
        let req = test::TestRequest::delete().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_home_full_page_without_token() {
        let app = app!();
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[actix_web::test]
    async fn test_home_partial_with_token() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("X-Layout", "layout-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.starts_with(r#"<section class="home">"#));
    }
}
