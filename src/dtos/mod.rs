// src/dtos/mod.rs
pub mod pricing;
pub mod product;
pub mod response;
