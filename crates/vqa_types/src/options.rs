//! Decoder configuration.

/// Bounds on pathological input the decoder otherwise has no reason to
/// distrust.
///
/// Grounded on `file::anm::ParseConfig`'s loop-safety pattern: a corrupt
/// stream of zero-size, uninteresting chunks would otherwise spin the
/// inner "read next chunk" loop forever without ever hitting an I/O
/// error or emitting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
	/// Maximum number of chunks (of any kind) read while searching for
	/// the next frame-emitting chunk before the decoder gives up and
	/// surfaces end-of-stream.
	pub max_chunks_per_frame: usize,
}

impl Default for DecoderOptions {
	fn default() -> Self {
		Self { max_chunks_per_frame: 100_000 }
	}
}

impl DecoderOptions {
	/// Creates a custom configuration with the given chunk bailout.
	pub fn new(max_chunks_per_frame: usize) -> Self {
		Self { max_chunks_per_frame }
	}
}
