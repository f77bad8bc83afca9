// src/views/layout.rs

use crate::http::RequestContext;
use crate::i18n::Language;
use maud::{html, Markup, DOCTYPE};

/// Full page shell around a content fragment
pub fn page(ctx: &RequestContext, title: &str, content: Markup) -> Markup {
    let site = ctx.t("common", "site.name");
    html! {
        (DOCTYPE)
        html lang=(ctx.language.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (site) }
                link rel="stylesheet" href="/assets/site.css";
                script src="/assets/site.js" defer {}
            }
            body {
                header.site-header {
                    a.site-name href="/" { (site) }
                    nav {
                        a href="/" { (ctx.t("common", "nav.home")) }
                        a href="/photos" { (ctx.t("common", "nav.photos")) }
                        a href="/albums" { (ctx.t("common", "nav.albums")) }
                        a href="/contact" { (ctx.t("common", "nav.contact")) }
                    }
                    ul.languages {
                        @for language in Language::ALL {
                            li {
                                a href={ "?lang=" (language.code()) }
                                    aria-current=[(language == ctx.language).then_some("true")] {
                                    (language.code())
                                }
                            }
                        }
                    }
                }
                main id="content" { (content) }
            }
        }
    }
}
