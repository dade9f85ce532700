// src/types/mod.rs
pub mod models;
pub mod response;
