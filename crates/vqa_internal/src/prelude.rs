//! Prelude module for `vqa_internal`.
//!
//! This module provides a convenient way to import commonly used types
//! and traits.
//!
//! # Examples
//!
//! ```rust
//! use vqa_internal::prelude::*;
//!
//! let options = DecoderOptions::default();
//! ```

// Re-export everything from vqa_types::prelude
#[doc(inline)]
pub use vqa_types::prelude::*;

// Re-export the entire vqa_types module for advanced usage
#[doc(inline)]
pub use vqa_types;
