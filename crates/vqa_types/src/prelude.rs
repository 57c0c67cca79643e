//! Convenience re-exports for `vqa_types`.
//!
//! ```no_run
//! use vqa_types::prelude::*;
//!
//! # fn run() -> Result<(), VqaError> {
//! let file = std::fs::File::open("movie.vqa")?;
//! let reader = std::io::BufReader::new(file);
//! let mut decoder = Decoder::open(reader)?;
//!
//! loop {
//!     let batch = decoder.next_frame();
//!     if batch.status == Status::EndOfStream {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[doc(inline)]
pub use crate::adpcm::StereoAdpcmDecoder;
#[doc(inline)]
pub use crate::codebook::{Codebook, Pixel};
#[doc(inline)]
pub use crate::decoder::{Decoder, FrameBatch, Status};
#[doc(inline)]
pub use crate::error::VqaError;
#[doc(inline)]
pub use crate::header::FileHeader;
#[doc(inline)]
pub use crate::options::DecoderOptions;
#[doc(inline)]
pub use crate::painter::Frame;
