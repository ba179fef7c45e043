//! Profile store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tiffin_core::{CustomerId, Profile};

/// Customer profiles keyed by customer id.
#[derive(Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<CustomerId, Profile>>,
}

impl ProfileStore {
    /// Fetch a customer's profile, if one exists.
    #[must_use]
    pub fn get(&self, user_id: CustomerId) -> Option<Profile> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .cloned()
    }

    /// Insert or replace a customer's profile.
    pub fn upsert(&self, profile: Profile) {
        self.profiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.user_id, profile);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tiffin_core::{Email, MobileNumber};

    #[test]
    fn test_get_missing_profile() {
        let store = ProfileStore::default();
        assert!(store.get(CustomerId::new()).is_none());
    }

    #[test]
    fn test_upsert_replaces() {
        let store = ProfileStore::default();
        let id = CustomerId::new();
        let mut profile = Profile::new(
            id,
            "Asha Rao".to_owned(),
            Email::parse("asha@example.com").unwrap(),
        );
        store.upsert(profile.clone());
        assert!(!store.get(id).unwrap().is_complete());

        profile.mobile_number = Some(MobileNumber::parse("9876543210").unwrap());
        profile.date_of_birth = chrono::NaiveDate::from_ymd_opt(1994, 3, 21);
        store.upsert(profile);
        assert!(store.get(id).unwrap().is_complete());
    }
}
