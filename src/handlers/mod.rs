// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod albums;
pub mod common;
pub mod contact;
pub mod health;
pub mod photos;

pub use albums::config as albums_config;
pub use common::config as common_config;
pub use contact::config as contact_config;
pub use health::config as health_config;
pub use photos::config as photos_config;

use crate::errors::{AppError, RequestError};
use crate::http::RequestContext;
use crate::i18n::Message;
use uuid::Uuid;

/// Parse a uuid path segment, 400 with a translated message otherwise
pub(crate) fn parse_uuid(
    ctx: &RequestContext,
    raw: &str,
    message: Message,
) -> Result<Uuid, RequestError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        RequestError::new(ctx.clone(), AppError::InvalidInput(message.with("uuid", raw)))
    })
}
