// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Group decoding.
//!
//! Payload characters are decoded in aligned groups of four as soon as they
//! are available, and the resulting bytes go straight into the Brotli
//! decompressor. At drain time the 1-3 character remainder is padded to a
//! full group, decoded, and the decompressor is closed.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;

use super::compress::{decompressor, finish_decompressor};
use super::error::{CodecError, Result};
use super::settings::CompressionSettings;
use crate::art::{pad_count, TERMINATOR};

/// Decodes base64 groups into a Brotli decompressor writing to `W`.
pub struct GroupDecoder<W: Write> {
    pending: Vec<u8>,
    raw: Vec<u8>,
    sink: brotli::DecompressorWriter<W>,
    compressed: u64,
}

impl<W: Write> GroupDecoder<W> {
    pub fn new(out: W, settings: &CompressionSettings) -> Self {
        Self {
            pending: Vec::new(),
            raw: Vec::new(),
            sink: decompressor(out, settings),
            compressed: 0,
        }
    }

    /// Characters buffered short of a whole group.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Append payload characters and decode every whole group.
    pub fn push(&mut self, chars: &[u8]) -> Result<()> {
        self.pending.extend_from_slice(chars);
        let eaten = self.pending.len() / 4 * 4;
        if eaten == 0 {
            return Ok(());
        }
        self.decode_prefix(eaten)?;
        self.pending.drain(..eaten);
        Ok(())
    }

    fn decode_prefix(&mut self, len: usize) -> Result<()> {
        self.raw.clear();
        STANDARD.decode_vec(&self.pending[..len], &mut self.raw)?;
        self.feed()?;
        self.compressed += self.raw.len() as u64;
        debug!("decoded {} chars into {} compressed bytes", len, self.raw.len());
        Ok(())
    }

    /// Hand the decoded bytes to Brotli. A decompressor that stops accepting
    /// input midway has hit corrupt data.
    fn feed(&mut self) -> Result<()> {
        let mut rest = &self.raw[..];
        while !rest.is_empty() {
            match self.sink.write(rest) {
                Ok(0) => {
                    return Err(CodecError::Decompression(
                        "decompressor rejected the payload".into(),
                    ))
                }
                Ok(n) => rest = &rest[n..],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(CodecError::from_decompressor(e)),
            }
        }
        Ok(())
    }

    /// Decode the padded remainder, close the decompressor and return the
    /// output stream with the number of compressed bytes it consumed.
    ///
    /// # Errors
    /// - [`CodecError::MalformedGroup`] if the remainder cannot be a base64 tail
    ///   (a single leftover character, or non-zero trailing bits).
    /// - [`CodecError::Decompression`] / [`CodecError::TruncatedStream`] if
    ///   Brotli rejects the recovered stream.
    pub fn finish(mut self) -> Result<(W, u64)> {
        if !self.pending.is_empty() {
            let pad = pad_count(self.pending.len());
            self.pending.extend(std::iter::repeat(TERMINATOR).take(pad));
            let len = self.pending.len();
            self.decode_prefix(len)?;
            self.pending.clear();
        }
        let out = finish_decompressor(self.sink)?;
        Ok((out, self.compressed))
    }
}
