// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Self-extracting Python wrapper.
//!
//! The art becomes the module docstring of a Python 3 script whose body
//! repeats the decoder in one line: filter the docstring to the payload
//! alphabet, cut at the first terminator, pad, base64-decode,
//! Brotli-decompress and `exec` the result. The host needs the `brotli`
//! Python package.

use std::io::{Read, Write};

use rand::Rng;

use super::error::Result;
use super::pipeline::{encode, EncodeSummary};
use super::settings::CompressionSettings;

/// Written before the art.
pub const PREAMBLE: &str = "#!/usr/bin/env python3\n\"\"\"\n";

/// Written after the art.
pub const POSTAMBLE: &str = concat!(
    "\"\"\"\n",
    "import re,base64,brotli;t=re.sub('[^a-zA-Z0-9+/=]','',__doc__).split('=')[0]\n",
    "t+='='*(3-((len(t)-1)%4));exec(brotli.decompress(base64.b64decode(t)))\n",
);

/// Encode `input` as a runnable Python script carrying the art.
pub fn encode_python<R: Read, W: Write, G: Rng>(
    input: R,
    mut output: W,
    rng: G,
    settings: &CompressionSettings,
) -> Result<(W, EncodeSummary)> {
    output.write_all(PREAMBLE.as_bytes())?;
    let (mut output, summary) = encode(input, output, rng, settings)?;
    output.write_all(POSTAMBLE.as_bytes())?;
    output.flush()?;
    Ok((output, summary))
}
