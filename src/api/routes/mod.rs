//! API route handlers

pub mod analytics;
pub mod entries;
pub mod export;
pub mod health;
