//! Go Demos Library
//!
//! This library backs two small, unrelated demo programs: one prints the MD5
//! digest of a fixed string, the other tests a fixed `libvirt-*-format`
//! pattern against a handful of candidate strings.
//!

pub mod digest;
pub mod pattern;
