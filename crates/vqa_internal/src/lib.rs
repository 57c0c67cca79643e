//! Internal crate for `vqa-rs`.
//!
//! This module is separated into its own crate to keep the core decoder
//! types independent of the root binary crate, and should not be used
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use vqa_internal::prelude::*;
//!
//! let options = DecoderOptions::default();
//! ```

/// `use vqa_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export vqa_types for convenience
pub use vqa_types;
