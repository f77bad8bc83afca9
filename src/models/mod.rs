// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod album;
pub mod comment;
pub mod contact;
pub mod country;
pub mod fave;
pub mod photo;
pub mod row;
pub mod tag;
pub mod user;

pub use album::*;
pub use comment::*;
pub use contact::*;
pub use country::*;
pub use fave::*;
pub use photo::*;
pub use row::*;
pub use tag::*;
