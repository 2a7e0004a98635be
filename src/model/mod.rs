//! Core data model

mod document;

pub use document::{decode_text, Document};
