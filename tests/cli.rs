// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! End-to-end tests of the `pony` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pony_core::art::PONY;

fn pony(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pony"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The child may exit before reading (argument errors); ignore a broken pipe.
    let _ = child.stdin.take().unwrap().write_all(stdin);
    child.wait_with_output().unwrap()
}

#[test]
fn encode_then_decode() {
    let data = b"The quick brown fox jumps over the lazy dog.\n".repeat(50);
    let art = pony(&["--encode", "--seed", "1"], &data);
    assert!(art.status.success());
    assert_eq!(art.stdout.len() % PONY.len(), 0);

    let back = pony(&["--decode"], &art.stdout);
    assert!(back.status.success());
    assert_eq!(back.stdout, data);
}

#[test]
fn short_flags() {
    let art = pony(&["-e"], b"\x00\x01\x02");
    assert!(art.status.success());
    let back = pony(&["-d"], &art.stdout);
    assert_eq!(back.stdout, b"\x00\x01\x02");
}

#[test]
fn seed_makes_output_reproducible() {
    let a = pony(&["-e", "--seed", "42"], b"same");
    let b = pony(&["-e", "--seed", "42"], b"same");
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn help_exits_zero() {
    for flag in ["--help", "-h", "--usage", "-u"] {
        let out = pony(&[flag], b"");
        assert_eq!(out.status.code(), Some(0), "{flag}");
        let text = String::from_utf8_lossy(&out.stdout);
        assert!(text.contains("Usage"), "{flag}: {text}");
    }
}

#[test]
fn both_actions_is_an_argument_error() {
    let out = pony(&["--encode", "--decode"], b"data");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "no transform may run");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Usage"), "{err}");
}

#[test]
fn argument_errors_exit_one() {
    for args in [&[][..], &["--bogus"][..], &["-e", "stray"][..], &["-e", "-q", "42"][..]] {
        let out = pony(args, b"");
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}

#[test]
fn decode_failure_exits_nonzero() {
    let out = pony(&["-d"], b"no pony here\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("terminator"));
}

#[test]
fn python_wrapper() {
    let out = pony(&["-e", "-p", "--seed", "3"], b"print('neigh')\n");
    assert!(out.status.success());
    let script = String::from_utf8(out.stdout).unwrap();
    assert!(script.starts_with("#!/usr/bin/env python3\n"));
    assert!(script.contains("brotli.decompress"));

    // The wrapped script is still valid decoder input.
    let back = pony(&["-d"], script.as_bytes());
    assert_eq!(back.stdout, b"print('neigh')\n");
}
