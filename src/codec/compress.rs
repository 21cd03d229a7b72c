// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Brotli adapters.
//!
//! Both directions are push-style writers so that each pipeline stage owns
//! the next one: the compressor writes into the [`Chunker`](super::chunker::Chunker),
//! and decoded groups are written into the decompressor, which writes into
//! the caller's output.

use std::io::Write;

use super::error::{CodecError, Result};
use super::settings::CompressionSettings;

/// Streaming compressor feeding `sink`.
///
/// Dropping or calling `into_inner` finishes the Brotli stream.
pub(crate) fn compressor<W: Write>(
    sink: W,
    settings: &CompressionSettings,
) -> brotli::CompressorWriter<W> {
    brotli::CompressorWriter::new(sink, settings.buffer_size, settings.quality, settings.lg_window)
}

/// Streaming decompressor writing plain bytes to `sink`.
pub(crate) fn decompressor<W: Write>(
    sink: W,
    settings: &CompressionSettings,
) -> brotli::DecompressorWriter<W> {
    brotli::DecompressorWriter::new(sink, settings.buffer_size)
}

/// Flush the decompressor and hand back its sink.
///
/// # Errors
/// [`CodecError::TruncatedStream`] if the Brotli stream has not reached its
/// end marker.
pub(crate) fn finish_decompressor<W: Write>(mut d: brotli::DecompressorWriter<W>) -> Result<W> {
    d.flush().map_err(CodecError::from_decompressor)?;
    d.into_inner().map_err(|_| CodecError::TruncatedStream)
}
