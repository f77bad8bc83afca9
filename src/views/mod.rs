// src/views/mod.rs
// DOCUMENTATION: HTML templates (maud)
// PURPOSE: Page shell plus the content fragments each handler renders

pub mod albums;
pub mod common;
pub mod contact;
pub mod layout;
pub mod photos;
