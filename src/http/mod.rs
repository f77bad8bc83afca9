// src/http/mod.rs
// DOCUMENTATION: Request/response pipeline module organization
// PURPOSE: Re-export content negotiation and page rendering

pub mod request;
pub mod response;

pub use request::{Layout, RequestContext, ResponseFormat};
pub use response::Page;
