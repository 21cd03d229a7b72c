// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Chunking of the compressed stream.
//!
//! The [`Chunker`] is the sink of the Brotli compressor. Compressed bytes are
//! appended to a FIFO buffer; every time it holds [`CHUNK_SIZE`] bytes a full
//! block is written out. [`Chunker::finish`] writes the single terminal block
//! carrying whatever is left (possibly nothing).

use std::io::{self, Write};

use log::debug;
use rand::Rng;

use super::filler::BlockFiller;
use crate::art::CHUNK_SIZE;

/// Buffers compressed bytes and emits art blocks to `out`.
pub struct Chunker<W, G> {
    out: W,
    filler: BlockFiller<G>,
    buf: Vec<u8>,
    blocks: usize,
    /// First output failure. Brotli swallows errors raised while it finishes
    /// its stream, so they are kept here and reported by `finish`.
    failed: Option<io::Error>,
}

impl<W: Write, G: Rng> Chunker<W, G> {
    pub fn new(out: W, filler: BlockFiller<G>) -> Self {
        Self {
            out,
            filler,
            buf: Vec::with_capacity(2 * CHUNK_SIZE),
            blocks: 0,
            failed: None,
        }
    }

    /// Blocks written so far.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Compressed bytes waiting for a full chunk.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    fn emit_full_chunks(&mut self) -> io::Result<()> {
        while self.buf.len() >= CHUNK_SIZE {
            let block = self.filler.full_block(&self.buf[..CHUNK_SIZE]);
            self.out.write_all(block.as_bytes())?;
            self.buf.drain(..CHUNK_SIZE);
            self.blocks += 1;
            debug!("block {}: full chunk", self.blocks);
        }
        Ok(())
    }

    /// Write the terminal block and return the output stream with the total
    /// block count.
    ///
    /// # Errors
    /// Any output error, including one raised earlier while the compressor
    /// was finishing.
    pub fn finish(mut self) -> io::Result<(W, usize)> {
        if let Some(e) = self.failed.take() {
            return Err(e);
        }
        self.emit_full_chunks()?;
        let block = self.filler.terminal_block(&self.buf);
        self.out.write_all(block.as_bytes())?;
        self.blocks += 1;
        debug!("block {}: terminal chunk of {} bytes", self.blocks, self.buf.len());
        self.buf.clear();
        self.out.flush()?;
        Ok((self.out, self.blocks))
    }
}

impl<W: Write, G: Rng> Write for Chunker<W, G> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if let Some(e) = &self.failed {
            return Err(io::Error::new(e.kind(), e.to_string()));
        }
        self.buf.extend_from_slice(data);
        if let Err(e) = self.emit_full_chunks() {
            self.failed = Some(io::Error::new(e.kind(), e.to_string()));
            return Err(e);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
