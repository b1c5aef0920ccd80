//! Persistence round trips for the profile singleton.

use crate::{
    core::errors::{PortalError, Result},
    domain::Profile,
    storage::{CollectionKind, JsonStore},
};

/// Operations over the singleton profile record. Existence of the backing
/// file is itself the observable state: no file means "not yet configured".
pub struct ProfileService {
    store: JsonStore,
}

impl ProfileService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns the stored profile, or `ProfileNotSet` when none has been
    /// persisted yet.
    pub fn get(&self) -> Result<Profile> {
        self.store
            .load(CollectionKind::Profile)?
            .ok_or(PortalError::ProfileNotSet)
    }

    /// Persists the profile only when none exists yet; callers holding an
    /// existing profile must use [`ProfileService::upsert`] instead.
    pub fn create(&self, profile: Profile) -> Result<Profile> {
        if self.store.load::<Profile>(CollectionKind::Profile)?.is_some() {
            return Err(PortalError::ProfileExists);
        }
        self.store.save(CollectionKind::Profile, &profile)?;
        Ok(profile)
    }

    /// Unconditionally writes the profile, creating or overwriting.
    pub fn upsert(&self, profile: Profile) -> Result<()> {
        self.store.save(CollectionKind::Profile, &profile)
    }

    /// Removes the backing file; `ProfileNotSet` when there was none.
    pub fn delete(&self) -> Result<()> {
        if self.store.remove(CollectionKind::Profile)? {
            Ok(())
        } else {
            Err(PortalError::ProfileNotSet)
        }
    }
}
