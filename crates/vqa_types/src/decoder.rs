//! The demultiplexer and streaming frame/audio loop.

use std::io::{Cursor, Read};

use crate::adpcm::StereoAdpcmDecoder;
use crate::chunk::{ChunkCursor, ChunkHeader};
use crate::codebook::Codebook;
use crate::error::VqaError;
use crate::header::{self, FileHeader};
use crate::lcw;
use crate::options::DecoderOptions;
use crate::painter::{self, Frame};

/// Outcome of a [`Decoder::next_frame`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// A frame (or the stream's trailing audio) was produced normally.
	Ok,
	/// The backing stream ended or failed; no further frames are available.
	EndOfStream,
}

/// One frame emission: an optional frame snapshot plus all audio
/// decoded since the previous emission.
#[derive(Debug, Clone)]
pub struct FrameBatch {
	/// The newly painted frame, if this call reached a frame-updating
	/// video chunk before the stream ended.
	pub frame: Option<Frame>,
	/// Interleaved stereo sample pairs decoded from every `SND2` chunk
	/// seen since the previous emission (or stream start).
	pub samples: Vec<(i16, i16)>,
	/// Whether the stream has more frames to offer.
	pub status: Status,
}

/// A forward-streaming VQA decoder.
///
/// Owns the chunk cursor, the persistent codebook and frame raster, and
/// the two ADPCM channel states. Not `Clone`: there is exactly one
/// decoder per input stream, and its mutable state is never shared.
pub struct Decoder<R> {
	cursor: ChunkCursor<R>,
	header: FileHeader,
	codebook: Codebook,
	frame: Frame,
	audio: StereoAdpcmDecoder,
	lookahead: Option<ChunkHeader>,
	options: DecoderOptions,
}

impl<R: Read> Decoder<R> {
	/// Opens a decoder with the default [`DecoderOptions`].
	pub fn open(reader: R) -> Result<Self, VqaError> {
		Self::open_with_options(reader, DecoderOptions::default())
	}

	/// Opens a decoder, consuming the outer `FORM` chunk and the file
	/// header, initialising decoder state, and pre-reading one chunk
	/// header as lookahead.
	pub fn open_with_options(reader: R, options: DecoderOptions) -> Result<Self, VqaError> {
		let mut cursor = ChunkCursor::new(reader);

		let form_header = cursor.read_header()?;
		if form_header.id != header::FORM_ID {
			return Err(VqaError::UnsupportedContainer { found: form_header.id });
		}

		let header_bytes = cursor.read_payload(FileHeader::SIZE as u32)?;
		let file_header = FileHeader::from_reader(&mut &header_bytes[..])?;

		let frame = Frame::new(file_header.width() as usize, file_header.height() as usize);
		let audio = StereoAdpcmDecoder::new(file_header.channels());
		let lookahead = cursor.read_header().ok();

		Ok(Self {
			cursor,
			header: file_header,
			codebook: Codebook::default(),
			frame,
			audio,
			lookahead,
			options,
		})
	}

	/// The parsed file header.
	pub fn header(&self) -> &FileHeader {
		&self.header
	}

	/// Streams forward until a video chunk updates the frame, or the
	/// stream ends, whichever comes first.
	///
	/// Audio decoded from any `SND2` chunks encountered along the way is
	/// accumulated and returned alongside the frame (or alongside an
	/// empty frame slot at end-of-stream).
	pub fn next_frame(&mut self) -> FrameBatch {
		let mut samples = Vec::new();
		let mut chunks_seen = 0usize;

		loop {
			let Some(current) = self.lookahead else {
				return FrameBatch { frame: None, samples, status: Status::EndOfStream };
			};

			chunks_seen += 1;
			if chunks_seen > self.options.max_chunks_per_frame {
				log::warn!(
					"exceeded max_chunks_per_frame ({}) without a frame update, surfacing end-of-stream",
					self.options.max_chunks_per_frame
				);
				self.lookahead = None;
				return FrameBatch { frame: None, samples, status: Status::EndOfStream };
			}

			match current.id {
				id if id == *b"SND2" => {
					let Ok(payload) = self.cursor.read_payload(current.size) else {
						self.lookahead = None;
						return FrameBatch { frame: None, samples, status: Status::EndOfStream };
					};
					samples.extend(self.audio.decode_snd2_payload(&payload));
					self.lookahead = self.cursor.read_header().ok();
					if self.lookahead.is_none() {
						return FrameBatch { frame: None, samples, status: Status::EndOfStream };
					}
				}
				id if id == *b"VQFR" || id == *b"VQFL" => {
					let Ok(payload) = self.cursor.read_payload(current.size) else {
						self.lookahead = None;
						return FrameBatch { frame: None, samples, status: Status::EndOfStream };
					};
					let updated = self.process_video_payload(&payload);
					self.lookahead = self.cursor.read_header().ok();

					if updated {
						return FrameBatch { frame: Some(self.frame.clone()), samples, status: Status::Ok };
					}
					if self.lookahead.is_none() {
						return FrameBatch { frame: None, samples, status: Status::EndOfStream };
					}
				}
				_ => {
					let Ok(_skipped) = self.cursor.read_payload(current.size) else {
						self.lookahead = None;
						return FrameBatch { frame: None, samples, status: Status::EndOfStream };
					};
					self.lookahead = self.cursor.read_header().ok();
					if self.lookahead.is_none() {
						return FrameBatch { frame: None, samples, status: Status::EndOfStream };
					}
				}
			}
		}
	}

	/// Walks the sub-chunks nested inside one video chunk's payload,
	/// routing each to the codebook store or the frame painter by
	/// identifier, and returns whether any paint sub-chunk occurred.
	fn process_video_payload(&mut self, payload: &[u8]) -> bool {
		let mut sub_cursor = ChunkCursor::new(Cursor::new(payload));
		let mut updated = false;

		loop {
			let Ok(sub_header) = sub_cursor.read_header() else {
				break;
			};
			let mut sub_payload = sub_cursor.read_payload_lossy(sub_header.size);
			if sub_header.is_compressed() {
				sub_payload = lcw::decode_auto(&sub_payload);
			}

			if sub_header.id_prefix3() == b"CBF" || sub_header.id_prefix3() == b"CBP" {
				self.codebook.replace_from_payload(&sub_payload);
			} else if matches!(sub_header.id, id if id == *b"VPTR" || id == *b"VPRZ" || id == *b"VPT0") {
				painter::paint_command_stream(
					&mut self.frame,
					&self.codebook,
					self.header.block_width() as usize,
					self.header.block_height() as usize,
					&sub_payload,
				);
				updated = true;
			} else {
				log::debug!("ignoring unrecognised video sub-chunk {:?}", sub_header.id);
			}
		}

		updated
	}
}
