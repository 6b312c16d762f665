//! Survivor backend API: HTTP calls and response models.

pub mod http;
pub mod types;
