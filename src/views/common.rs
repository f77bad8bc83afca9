// src/views/common.rs

use crate::http::RequestContext;
use maud::{html, Markup};

pub fn home(ctx: &RequestContext) -> Markup {
    html! {
        section.home {
            h1 { (ctx.t("common", "home.title")) }
            p { (ctx.t("common", "home.intro")) }
            a.button href="/photos" { (ctx.t("common", "nav.photos")) }
        }
    }
}

pub fn error(title: &str, message: &str) -> Markup {
    html! {
        section.error {
            h1 { (title) }
            p { (message) }
        }
    }
}
