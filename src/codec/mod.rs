// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Camouflage encoding and decoding pipelines.
//!
//! Encoding compresses the input with Brotli, slices the compressed stream
//! into chunks that exactly fill the template, and writes one art block per
//! chunk. The last block carries the terminator followed by random filler.
//!
//! Decoding reads text line by line, keeps payload characters from lines
//! with the art border, stops at the first terminator and decompresses the
//! recovered stream.

pub mod error;
pub mod settings;
mod compress;
pub mod chunker;
pub mod filler;
pub mod extract;
pub mod groups;
mod pipeline;
pub mod wrap;

pub use error::{CodecError, Result};
pub use pipeline::{
    decode, decode_str, encode, encode_bytes, DecodeState, DecodeSummary, Decoder, EncodeSummary,
    Encoder,
};
pub use settings::CompressionSettings;
pub use wrap::encode_python;
