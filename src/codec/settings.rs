// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Compression settings shared by the encoder and decoder.

use super::error::{CodecError, Result};

/// Brotli compression quality (0-11). 11 = max compression.
pub const DEFAULT_QUALITY: u32 = 11;

/// Brotli LG_WINDOW_SIZE. 22 is the Brotli default (4 MB window).
pub const DEFAULT_LG_WINDOW: u32 = 22;

/// Internal buffer size for the Brotli reader/writer adapters.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Raw bytes read from the input per encode step.
pub const READ_SIZE: usize = 8192;

/// Tunables for the Brotli stage.
///
/// The decoder only uses `buffer_size`; Brotli streams are self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSettings {
    /// Compression quality, 0 (fastest) to 11 (smallest).
    pub quality: u32,
    /// Log2 of the sliding window, 10 to 24.
    pub lg_window: u32,
    /// Size of the internal Brotli buffer in bytes.
    pub buffer_size: usize,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            lg_window: DEFAULT_LG_WINDOW,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CompressionSettings {
    /// Default settings with a different quality.
    pub fn with_quality(quality: u32) -> Self {
        Self { quality, ..Self::default() }
    }

    /// Check every field against the ranges Brotli accepts.
    ///
    /// # Errors
    /// [`CodecError::InvalidSettings`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.quality > 11 {
            return Err(CodecError::InvalidSettings("quality must be 0-11"));
        }
        if !(10..=24).contains(&self.lg_window) {
            return Err(CodecError::InvalidSettings("window log must be 10-24"));
        }
        if self.buffer_size == 0 {
            return Err(CodecError::InvalidSettings("buffer size must be non-zero"));
        }
        Ok(())
    }
}
