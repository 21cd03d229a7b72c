// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pony-core

//! The carrier: a fixed ASCII-art template and its payload alphabet
//! (zero external dependencies).
//!
//! An encoded block is the template with every placeholder replaced by one
//! payload character. Nothing else in the art changes, so a filled block
//! has exactly the shape of the template.

pub mod alphabet;
pub mod template;

pub use alphabet::{has_border, is_payload, pad_count, ALPHABET, BORDER, TERMINATOR};
pub use template::{Template, CHUNK_SIZE, PLACEHOLDER, PONY, SLOTS};
