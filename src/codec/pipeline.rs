// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Streaming encode/decode pipelines.
//!
//! Encode: raw bytes -> Brotli -> [`Chunker`] -> [`BlockFiller`] -> art blocks.
//!
//! Decode: text lines -> [`LineExtractor`] -> [`GroupDecoder`] -> Brotli -> raw bytes.
//!
//! Both directions keep their buffers bounded: a chunk leaves the encoder as
//! soon as it is complete, and decoded groups leave the decoder as soon as
//! four characters are available.

use std::io::{self, BufRead, Read, Write};

use log::{debug, info};
use rand::Rng;

use super::chunker::Chunker;
use super::compress::compressor;
use super::error::{CodecError, Result};
use super::extract::{LineExtractor, LineScan};
use super::filler::BlockFiller;
use super::groups::GroupDecoder;
use super::settings::{CompressionSettings, READ_SIZE};

/// Totals reported by [`Encoder::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Raw input bytes consumed.
    pub bytes_in: u64,
    /// Art blocks written, terminal block included.
    pub blocks: usize,
}

/// Totals reported by [`Decoder::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Lines read up to and including the terminator line.
    pub lines: usize,
    /// Payload characters recovered before the terminator.
    pub payload_chars: usize,
    /// Compressed bytes handed to Brotli.
    pub compressed_bytes: u64,
}

/// Streaming encoder. Write raw bytes into it, then call [`finish`](Self::finish).
pub struct Encoder<W: Write, G: Rng> {
    compressor: brotli::CompressorWriter<Chunker<W, G>>,
    bytes_in: u64,
}

impl<W: Write, G: Rng> Encoder<W, G> {
    /// Create an encoder writing art to `out`, drawing camouflage from `rng`.
    ///
    /// # Errors
    /// [`CodecError::InvalidSettings`] if `settings` is out of range.
    pub fn new(out: W, rng: G, settings: &CompressionSettings) -> Result<Self> {
        settings.validate()?;
        let chunker = Chunker::new(out, BlockFiller::new(rng));
        Ok(Self { compressor: compressor(chunker, settings), bytes_in: 0 })
    }

    /// Finish the Brotli stream, write the terminal block and return the
    /// output stream.
    pub fn finish(self) -> Result<(W, EncodeSummary)> {
        let chunker = self.compressor.into_inner();
        let (out, blocks) = chunker.finish()?;
        let summary = EncodeSummary { bytes_in: self.bytes_in, blocks };
        info!("encoded {} bytes into {} blocks", summary.bytes_in, summary.blocks);
        Ok((out, summary))
    }
}

impl<W: Write, G: Rng> Write for Encoder<W, G> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let n = self.compressor.write(data)?;
        self.bytes_in += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.compressor.flush()
    }
}

/// Decoder states. [`Decoder::finish`] consumes the decoder, which ends the
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// Reading lines and collecting payload characters.
    Scanning,
    /// The terminator was found; no further lines are read.
    Draining,
}

/// Streaming decoder. Push lines with [`push_line`](Self::push_line) until it
/// reports [`DecodeState::Draining`], then call [`finish`](Self::finish).
pub struct Decoder<W: Write> {
    extractor: LineExtractor,
    groups: GroupDecoder<W>,
    chars: Vec<u8>,
    state: DecodeState,
}

impl<W: Write> Decoder<W> {
    /// Create a decoder writing recovered bytes to `out`.
    pub fn new(out: W, settings: &CompressionSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            extractor: LineExtractor::new(),
            groups: GroupDecoder::new(out, settings),
            chars: Vec::new(),
            state: DecodeState::Scanning,
        })
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Feed one line of text (line terminator optional).
    ///
    /// Lines pushed after the terminator are ignored.
    pub fn push_line(&mut self, line: &[u8]) -> Result<DecodeState> {
        if self.state != DecodeState::Scanning {
            return Ok(self.state);
        }
        self.chars.clear();
        let scan = self.extractor.scan(line, &mut self.chars);
        self.groups.push(&self.chars)?;
        if scan == LineScan::Terminated {
            debug!("terminator found on line {}", self.extractor.lines());
            self.state = DecodeState::Draining;
        }
        Ok(self.state)
    }

    /// Drain the remaining characters, close the decompressor and return the
    /// output stream.
    ///
    /// # Errors
    /// - [`CodecError::MissingTerminator`] if no terminator was pushed.
    /// - Any group or decompression failure from the drain.
    pub fn finish(self) -> Result<(W, DecodeSummary)> {
        if self.state == DecodeState::Scanning {
            return Err(CodecError::MissingTerminator);
        }
        let lines = self.extractor.lines();
        let payload_chars = self.extractor.kept();
        let (out, compressed_bytes) = self.groups.finish()?;
        let summary = DecodeSummary { lines, payload_chars, compressed_bytes };
        info!(
            "decoded {} payload chars ({} compressed bytes) from {} lines",
            summary.payload_chars, summary.compressed_bytes, summary.lines
        );
        Ok((out, summary))
    }
}

/// Encode everything from `input` into art on `output`.
///
/// Reads in bounded steps; never holds more than a couple of chunks in memory.
pub fn encode<R: Read, W: Write, G: Rng>(
    mut input: R,
    output: W,
    rng: G,
    settings: &CompressionSettings,
) -> Result<(W, EncodeSummary)> {
    let mut encoder = Encoder::new(output, rng, settings)?;
    let mut buf = vec![0u8; READ_SIZE];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        encoder.write_all(&buf[..n])?;
    }
    encoder.finish()
}

/// Decode art read line by line from `input`, writing the original bytes to
/// `output`. Stops reading at the first terminator.
pub fn decode<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    settings: &CompressionSettings,
) -> Result<(W, DecodeSummary)> {
    let mut decoder = Decoder::new(output, settings)?;
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if decoder.push_line(&line)? == DecodeState::Draining {
            break;
        }
    }
    decoder.finish()
}

/// Encode `data` into art in memory.
pub fn encode_bytes<G: Rng>(data: &[u8], rng: G) -> Result<String> {
    let (out, _) = encode(data, Vec::new(), rng, &CompressionSettings::default())?;
    // Art blocks are pure ASCII.
    String::from_utf8(out).map_err(|e| CodecError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Decode art from an in-memory string.
pub fn decode_str(text: &str) -> Result<Vec<u8>> {
    let (out, _) = decode(text.as_bytes(), Vec::new(), &CompressionSettings::default())?;
    Ok(out)
}
