// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Error types for the camouflage pipeline.
//!
//! [`CodecError`] covers every failure from reading the input through
//! Brotli decompression. Encoding fails only on I/O; every other variant
//! belongs to decoding or to settings validation.

use std::io;

use thiserror::Error;

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The input ended without a terminator.
    #[error("no end-of-data terminator found in input")]
    MissingTerminator,
    /// A recovered character group is not valid base64.
    #[error("malformed payload group: {0}")]
    MalformedGroup(#[from] base64::DecodeError),
    /// Brotli rejected the recovered bytes.
    #[error("decompression failed: {0}")]
    Decompression(String),
    /// The recovered Brotli stream stops before its end marker.
    #[error("compressed stream is truncated")]
    TruncatedStream,
    /// A compression setting is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
}

impl CodecError {
    /// Classify an error raised by the Brotli decompressor's writer.
    ///
    /// Corrupt input surfaces as `InvalidData`; anything else came from the
    /// wrapped output stream.
    pub(crate) fn from_decompressor(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
                Self::Decompression(e.to_string())
            }
            _ => Self::Io(e),
        }
    }

    /// Returns `true` for failures caused by the content of the input,
    /// as opposed to I/O or configuration.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingTerminator
                | Self::MalformedGroup(_)
                | Self::Decompression(_)
                | Self::TruncatedStream
        )
    }
}

/// Result alias used throughout the codec.
pub type Result<T> = std::result::Result<T, CodecError>;
