//! # Computing Hex-Encoded Digests
//!
//! This module provides the digest side of the demos: hashing a text with a
//! standard algorithm (MD5 by default) and rendering the result as lowercase
//! hexadecimal with no separators.
//!
//! ## Usage
//!
//! The main entry point is `md5_hex`, which hashes the UTF-8 bytes of a string.
//! `compute_hex_digest` accepts any supported `Algorithm` and raw bytes.
//!
//! ## Submodules
//!
//! - **hasher**: Contains the hashing and hex rendering functions.
//! - **types**: Defines the supported digest algorithms.

mod hasher;
mod types;

pub use hasher::{compute_hex_digest, md5_hex, render_digest_line};
pub use types::Algorithm;

/// Text hashed by the digest printer when no other text is given.
pub const DEFAULT_TEXT: &str = "hello, world";
