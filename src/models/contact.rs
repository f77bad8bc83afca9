// src/models/contact.rs
// DOCUMENTATION: Contact form submission
// PURPOSE: Validate visitor messages before they are stored

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl ContactRequest {
    /// Trim every field; blank phone numbers become None
    pub fn normalised(self) -> Self {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// First invalid field in form order, used to pick the error message
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        let errors = self.validate().err()?;
        let fields = errors.field_errors();
        ["name", "email", "phone", "subject", "message"]
            .into_iter()
            .find(|field| fields.contains_key(field))
    }
}
