// src/views/contact.rs

use crate::http::RequestContext;
use maud::{html, Markup};

pub fn form(ctx: &RequestContext) -> Markup {
    html! {
        section.contact {
            h1 { (ctx.t("contact", "form.title")) }
            form #contact-form action="/contact/send" method="post" {
                label { (ctx.t("contact", "form.name")) input type="text" name="name" required maxlength="100"; }
                label { (ctx.t("contact", "form.email")) input type="email" name="email" required; }
                label { (ctx.t("contact", "form.phone")) input type="tel" name="phone" maxlength="30"; }
                label { (ctx.t("contact", "form.subject")) input type="text" name="subject" required maxlength="150"; }
                label { (ctx.t("contact", "form.message")) textarea name="message" required maxlength="5000" {} }
                button type="submit" { (ctx.t("contact", "form.send")) }
            }
        }
    }
}

pub fn sent(message: &str) -> Markup {
    html! {
        section.contact-sent {
            p.notice { (message) }
        }
    }
}
