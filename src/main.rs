// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! `pony`: hide stdin inside ASCII art, or recover it.
//!
//! ```text
//! pony --encode < secret.bin > pony.txt
//! pony --decode < pony.txt > secret.bin
//! pony --encode --python < script.py > pony.py
//! ```

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, Parser};
use env_logger::Env;
use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use pony_core::codec::settings::DEFAULT_QUALITY;
use pony_core::{decode, encode, encode_python, CodecError, CompressionSettings};

/// Hide data inside ASCII art, or recover it.
#[derive(Parser, Debug)]
#[command(name = "pony", version, about)]
#[command(group(ArgGroup::new("action").required(true).args(["encode", "decode"])))]
struct Cli {
    /// Print usage and exit.
    #[arg(short = 'u', long = "usage", action = ArgAction::Help)]
    usage: Option<bool>,

    /// Read raw bytes from stdin and write art to stdout.
    #[arg(short, long)]
    encode: bool,

    /// Read art from stdin and write the original bytes to stdout.
    #[arg(short, long)]
    decode: bool,

    /// Wrap the art in a self-extracting Python script (encode only).
    #[arg(short, long)]
    python: bool,

    /// Brotli quality, 0 (fastest) to 11 (smallest).
    #[arg(short, long, default_value_t = DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u32).range(0..=11))]
    quality: u32,

    /// Seed for the camouflage generator. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn run(cli: &Cli) -> Result<(), CodecError> {
    let settings = CompressionSettings::with_quality(cli.quality);
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    if cli.encode {
        let rng = match cli.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        let (mut out, _) = if cli.python {
            encode_python(stdin, stdout, rng, &settings)?
        } else {
            encode(stdin, stdout, rng, &settings)?
        };
        out.flush()?;
    } else {
        if cli.python {
            warn!("--python has no effect when decoding");
        }
        let (mut out, _) = decode(stdin, stdout, &settings)?;
        out.flush()?;
    }
    Ok(())
}

/// Exit status for a failed parse: 0 when help or version was requested.
fn parse_exit_status(e: &clap::Error) -> u8 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help goes to stdout, every other diagnostic (with usage) to stderr.
            if let Err(io) = e.print() {
                eprintln!("Error: {io}");
                return ExitCode::FAILURE;
            }
            return ExitCode::from(parse_exit_status(&e));
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
