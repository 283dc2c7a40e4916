//! # Domain Models
//!
//! Pure types shared by the uni build crates, with minimal dependencies
//! (`serde`, `serde_json`, `strum`). Keep it lean: no I/O, no resolution
//! logic, just data and simple helpers.

pub mod features;
pub mod invoke;
pub mod manifest;
pub mod options;
pub mod pages;
