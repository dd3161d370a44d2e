// src/handlers/mod.rs
pub mod pricing;
pub mod product;
