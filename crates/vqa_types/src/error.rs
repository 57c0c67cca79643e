//! Error types for the VQA container decoder.

/// Errors that can occur while opening or streaming a VQA container.
///
/// Only genuinely fatal conditions are represented here: an unrecognised
/// outer chunk or file-header magic at open time, and I/O failure at any
/// point. Malformed payloads (truncated LCW streams, oversized sub-chunk
/// sizes, out-of-range codebook indices) are absorbed in place by the
/// decoder and are not errors — see [`crate::decoder`].
#[derive(Debug, thiserror::Error)]
pub enum VqaError {
	/// Any read failure on the backing stream.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// The outer chunk identifier was not `FORM`.
	#[error("unsupported container: expected outer chunk `FORM`, found {found:?}")]
	UnsupportedContainer {
		/// The four identifier bytes actually read.
		found: [u8; 4],
	},

	/// The file header's embedded magic was not `WVQAVQHD`.
	#[error("unsupported file header: expected magic `WVQAVQHD`, found {found:?}")]
	UnsupportedHeader {
		/// The eight magic bytes actually read.
		found: [u8; 8],
	},
}
