// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export repository components

pub mod album_repository;
pub mod contact_repository;
pub mod photo_repository;

pub use album_repository::*;
pub use contact_repository::*;
pub use photo_repository::*;
