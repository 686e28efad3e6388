//! Core types, post identity, and error types for the social-masonry engine.
//!
//! This crate provides the foundational types used by the layout crate:
//! - Post and platform types for embeddable social-media items
//! - Column specifications (fixed counts and responsive breakpoints)
//! - The identity rule mapping a post to a stable identifier
//! - Error types

pub mod errors;
pub mod identity;
pub mod types;

pub use errors::*;
pub use identity::{detect_platform, extract_post_key, generate_identifier, hash_url};
pub use types::*;
