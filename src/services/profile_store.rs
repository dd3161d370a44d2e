// src/services/profile_store.rs
use crate::models::pricing_profile::PricingProfile;

/// Process-local profile storage, kept in insertion order.
///
/// Not synchronised on its own; `PricingService` owns it behind a mutex.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<PricingProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<PricingProfile> {
        self.profiles.clone()
    }

    pub fn get(&self, id: &str) -> Option<&PricingProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn insert(&mut self, profile: PricingProfile) {
        self.profiles.push(profile);
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PricingProfile> {
        self.profiles.iter_mut().find(|p| p.id == id)
    }

    /// Returns whether a profile was actually removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.profiles.iter().position(|p| p.id == id) {
            Some(index) => {
                self.profiles.remove(index);
                true
            }
            None => false,
        }
    }
}
