//! `vqa-rs` is a decoder for the VQA interleaved audio/video container used by a
//! mid-1990s game title.
//!
//! This crate is a thin re-export of [`vqa_internal`]; the actual decoder lives in
//! `vqa_types` and is reachable here via the prelude.

pub use vqa_internal::*;
