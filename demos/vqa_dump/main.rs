//! VQA container dump utility.
//!
//! Opens a `.vqa` file, streams every frame to a PNG and accumulates all
//! decoded audio into a single WAV, mirroring the original decoder's
//! `DumpVideo`/`DumpAudio` behaviour in one pass. This is the only place
//! in the workspace that depends on `image`, `hound`, or `clap`: the core
//! `vqa_types` crate stays free of encoding and CLI concerns.
//!
//! ```bash
//! cargo run --example vqa_dump -- movie.vqa --out-dir frames/
//! ```

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use vqa_internal::prelude::*;

#[derive(Parser)]
#[command(name = "vqa_dump")]
#[command(author = "vqa-rs project")]
#[command(version)]
#[command(about = "Dump a VQA container's frames to PNG and its audio to a single WAV")]
struct Cli {
	/// Input `.vqa` file path
	#[arg(value_name = "INPUT_VQA")]
	input: PathBuf,

	/// Directory to write `NNNNN.png` frames and `audio.wav` into
	#[arg(short, long, default_value = "vqa_dump_out")]
	out_dir: PathBuf,

	/// Show per-frame progress
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	fs::create_dir_all(&cli.out_dir)?;

	let file = File::open(&cli.input)?;
	let mut decoder = Decoder::open(BufReader::new(file))?;

	log::info!("{}", decoder.header());

	let header = decoder.header();
	let spec = hound::WavSpec {
		channels: u16::from(header.channels().max(1)),
		sample_rate: u32::from(header.sample_rate()),
		bits_per_sample: u16::from(header.bits_per_sample().max(16)),
		sample_format: hound::SampleFormat::Int,
	};
	let mut wav_writer = hound::WavWriter::create(cli.out_dir.join("audio.wav"), spec)?;

	let mut frame_index = 0usize;
	loop {
		let batch = decoder.next_frame();

		for (left, right) in &batch.samples {
			wav_writer.write_sample(*left)?;
			if spec.channels > 1 {
				wav_writer.write_sample(*right)?;
			}
		}

		if let Some(frame) = batch.frame {
			write_frame_png(&cli.out_dir, frame_index, &frame)?;
			if cli.verbose {
				println!("wrote frame {frame_index:05}");
			}
			frame_index += 1;
		}

		if batch.status == Status::EndOfStream {
			break;
		}
	}

	wav_writer.finalize()?;
	log::info!("decoded {frame_index} frame(s) to {}", cli.out_dir.display());

	Ok(())
}

fn write_frame_png(out_dir: &std::path::Path, index: usize, frame: &Frame) -> anyhow::Result<()> {
	let mut rgba = Vec::with_capacity(frame.width() * frame.height() * 4);
	for pixel in frame.pixels() {
		rgba.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
	}

	let image: image::RgbaImage =
		image::ImageBuffer::from_raw(frame.width() as u32, frame.height() as u32, rgba)
			.ok_or_else(|| anyhow::anyhow!("frame buffer did not match its declared dimensions"))?;

	let path = out_dir.join(format!("{index:05}.png"));
	image.save(path)?;
	Ok(())
}
