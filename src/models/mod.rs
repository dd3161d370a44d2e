// src/models/mod.rs
pub mod pricing_profile;
pub mod product;
