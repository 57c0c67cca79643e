//! Benchmark suite for VQA container decoding.
//!
//! This benchmark measures the performance of the chunk demultiplexer,
//! the LCW decompressor and the frame painter in isolation, to help
//! identify hot paths in the decoder.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vqa_benches::{generate_codebook_payload, generate_command_stream, generate_lcw_compressed_data, generate_test_vqa_data, sizes};
use vqa_types::codebook::Codebook;
use vqa_types::decoder::Decoder;
use vqa_types::header::FileHeader;
use vqa_types::lcw;
use vqa_types::painter::{self, Frame};

/// Benchmark the full streaming decoder across a range of frame sizes.
fn bench_full_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("vqa_full_decode");

	for (name, (width, height)) in
		[("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)]
	{
		let data = generate_test_vqa_data(width, height, 4, 4, 3);
		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(BenchmarkId::new("decode_one_movie", name), &data, |b, data| {
			b.iter(|| {
				let mut decoder = Decoder::open(Cursor::new(black_box(data.as_slice()))).unwrap();
				loop {
					let batch = decoder.next_frame();
					if batch.status == vqa_types::decoder::Status::EndOfStream {
						break;
					}
				}
				black_box(())
			});
		});
	}

	group.finish();
}

/// Benchmark file header parsing in isolation.
fn bench_header_parsing(c: &mut Criterion) {
	let data = generate_test_vqa_data(sizes::SMALL.0, sizes::SMALL.1, 4, 4, 1);
	// The 54-byte header starts right after the 8-byte outer FORM chunk
	// header (4-byte id + 4-byte big-endian size).
	let header_bytes = &data[8..8 + FileHeader::SIZE];

	c.bench_function("vqa_header_parse", |b| {
		b.iter(|| {
			let result = FileHeader::from_reader(&mut black_box(header_bytes));
			black_box(result)
		});
	});
}

/// Benchmark LCW decompression at a range of payload sizes.
fn bench_lcw_decompress(c: &mut Criterion) {
	let mut group = c.benchmark_group("vqa_lcw_decompress");

	for len in [1_024usize, 16_384, 131_072] {
		let compressed = generate_lcw_compressed_data(len);
		group.throughput(Throughput::Bytes(compressed.len() as u64));
		group.bench_with_input(BenchmarkId::new("decode_auto", len), &compressed, |b, compressed| {
			b.iter(|| black_box(lcw::decode_auto(black_box(compressed))));
		});
	}

	group.finish();
}

/// Benchmark codebook payload decoding (pixel expansion).
fn bench_codebook_load(c: &mut Criterion) {
	let mut group = c.benchmark_group("vqa_codebook_load");

	for blocks in [64usize, 1_024, 4_096] {
		let payload = generate_codebook_payload(blocks, 4, 4);
		group.throughput(Throughput::Elements((blocks * 4 * 4) as u64));
		group.bench_with_input(BenchmarkId::new("replace_from_payload", blocks), &payload, |b, payload| {
			b.iter(|| {
				let mut codebook = Codebook::default();
				codebook.replace_from_payload(black_box(payload));
				black_box(&codebook);
			});
		});
	}

	group.finish();
}

/// Benchmark the frame painter's command-stream dispatch across a range
/// of frame sizes, reusing a persistent codebook and raster the way the
/// real decoder does across successive frames.
fn bench_paint_command_stream(c: &mut Criterion) {
	let mut group = c.benchmark_group("vqa_paint_command_stream");

	for (name, (width, height)) in [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let block_cols = width as usize / 4;
		let block_rows = height as usize / 4;
		let codebook_blocks = block_cols * block_rows;

		let payload = generate_codebook_payload(codebook_blocks, 4, 4);
		let mut codebook = Codebook::default();
		codebook.replace_from_payload(&payload);

		let commands = generate_command_stream(block_cols, block_rows, codebook_blocks);
		let mut frame = Frame::new(width as usize, height as usize);

		group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
		group.bench_with_input(BenchmarkId::new("paint", name), &commands, |b, commands| {
			b.iter(|| {
				painter::paint_command_stream(&mut frame, &codebook, 4, 4, black_box(commands));
				black_box(&frame);
			});
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_full_decode,
	bench_header_parsing,
	bench_lcw_decompress,
	bench_codebook_load,
	bench_paint_command_stream,
);

criterion_main!(benches);
