//! # Domain Models
//!
//! Pure sitemap data types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or host access, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod content;
pub mod entry;
pub mod query;
