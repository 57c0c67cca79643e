//! Core decoder for the VQA interleaved audio/video container.
//!
//! The three tightly coupled subsystems this crate implements are
//! [`lcw`] (the "Format80" LZ-style decompressor), [`painter`] together
//! with [`codebook`] (the vector-quantized frame reconstructor), and
//! [`chunk`] together with [`decoder`] (the big-endian chunk
//! demultiplexer and streaming frame loop). [`adpcm`] decodes the
//! accompanying audio.
//!
//! Start at [`decoder::Decoder`]: open a stream, then call
//! [`decoder::Decoder::next_frame`] until it reports
//! [`decoder::Status::EndOfStream`].

pub mod adpcm;
pub mod chunk;
pub mod codebook;
pub mod decoder;
pub mod error;
pub mod header;
pub mod lcw;
pub mod options;
pub mod painter;

pub mod prelude;
