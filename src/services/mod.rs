// src/services/mod.rs
pub mod calculation;
pub mod catalog;
pub mod pricing;
pub mod profile_store;
