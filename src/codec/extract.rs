// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! Line extraction.
//!
//! Recovers the payload character stream from text that contains encoded
//! blocks, possibly surrounded by unrelated lines.
//!
//! - A line without the `**` border marker is skipped whole.
//! - Otherwise every character outside the payload alphabet is dropped.
//! - The first terminator anywhere ends extraction; the rest of that line and
//!   every later line are ignored.

use crate::art::{has_border, is_payload, TERMINATOR};

/// Outcome of scanning one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScan {
    /// No border marker; the line was ignored.
    Skipped,
    /// Payload characters (possibly none) were appended.
    Kept,
    /// The terminator was reached on this line.
    Terminated,
}

/// Filters art lines into a contiguous payload stream.
#[derive(Debug, Default)]
pub struct LineExtractor {
    lines: usize,
    kept: usize,
    terminated: bool,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `line`, appending its payload characters to `out`.
    ///
    /// Once the terminator has been seen every further call returns
    /// [`LineScan::Terminated`] and appends nothing.
    pub fn scan(&mut self, line: &[u8], out: &mut Vec<u8>) -> LineScan {
        if self.terminated {
            return LineScan::Terminated;
        }
        self.lines += 1;
        if !has_border(line) {
            return LineScan::Skipped;
        }

        for &b in line.iter().filter(|&&b| is_payload(b)) {
            if b == TERMINATOR {
                self.terminated = true;
                return LineScan::Terminated;
            }
            out.push(b);
            self.kept += 1;
        }
        LineScan::Kept
    }

    /// `true` once the terminator has been found.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Lines scanned so far, skipped lines included.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Payload characters emitted so far.
    pub fn kept(&self) -> usize {
        self.kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(lines: &[&str]) -> (Vec<u8>, LineExtractor) {
        let mut ex = LineExtractor::new();
        let mut out = Vec::new();
        for line in lines {
            ex.scan(line.as_bytes(), &mut out);
        }
        (out, ex)
    }

    #[test]
    fn border_less_lines_are_skipped() {
        let mut ex = LineExtractor::new();
        let mut out = Vec::new();
        assert_eq!(ex.scan(b"hello world abc", &mut out), LineScan::Skipped);
        assert!(out.is_empty());
        assert_eq!(ex.lines(), 1);
    }

    #[test]
    fn noise_characters_are_dropped() {
        let (out, _) = scan_all(&["  *Ab**c d!9+/ \r\n"]);
        assert_eq!(out, b"Abcd9+/");
    }

    #[test]
    fn decoration_only_line_contributes_nothing() {
        let mut ex = LineExtractor::new();
        let mut out = Vec::new();
        assert_eq!(ex.scan(b"   *****   ***\n", &mut out), LineScan::Kept);
        assert!(out.is_empty());
    }

    #[test]
    fn terminator_truncates_mid_line() {
        let mut ex = LineExtractor::new();
        let mut out = Vec::new();
        assert_eq!(ex.scan(b"*AB**CD=EF**GH", &mut out), LineScan::Terminated);
        assert_eq!(out, b"ABCD");
        assert!(ex.is_terminated());
    }

    #[test]
    fn nothing_after_terminator() {
        let (out, ex) = scan_all(&["**AAAA", "**BB=CC", "**DDDD", "**EE=FF"]);
        assert_eq!(out, b"AAAABB");
        assert_eq!(ex.kept(), 6);
        // Lines after the terminator are not even counted.
        assert_eq!(ex.lines(), 2);
    }

    #[test]
    fn terminator_on_borderless_line_is_ignored() {
        let (out, ex) = scan_all(&["a = b", "**QUJD"]);
        assert_eq!(out, b"QUJD");
        assert!(!ex.is_terminated());
    }

    #[test]
    fn non_utf8_noise_is_harmless() {
        let mut ex = LineExtractor::new();
        let mut out = Vec::new();
        ex.scan(&[0xFF, b'*', b'*', 0xC3, b'Q', 0x80, b'g'], &mut out);
        assert_eq!(out, b"Qg");
    }
}
