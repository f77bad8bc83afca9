// src/models/fave.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A favourite mark on a photo
/// user_uuid is a user's uuid or an anonymous visitor id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fave {
    pub photo_uuid: Uuid,
    pub user_uuid: Uuid,
    pub created: DateTime<Utc>,
}

impl Fave {
    pub fn new(photo_uuid: Uuid, user_uuid: Uuid) -> Self {
        Fave {
            photo_uuid,
            user_uuid,
            created: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fave_is_stamped_now() {
        let before = Utc::now();
        let fave = Fave::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(fave.created >= before);
        assert!(fave.created <= Utc::now());
        assert_ne!(fave.photo_uuid, fave.user_uuid);
    }
}
