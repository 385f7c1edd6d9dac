//! # Matching Candidate Strings Against a Fixed Pattern
//!
//! This module provides the pattern side of the demos. It compiles a regular
//! expression for libvirt format names (`libvirt-<name>[-<part>...]-format`)
//! and reports, per candidate string, whether the pattern occurs anywhere in
//! it. Matching is substring search, not a full-string match.
//!
//! ## Usage
//!
//! Build a `PatternMatcher` from `DEFAULT_PATTERN` (or any other pattern),
//! call `evaluate` with the candidates, and pass the outcomes to
//! `render_report` to get the printed lines.
//!
//! ## Submodules
//!
//! - **matcher**: Contains pattern compilation and evaluation.
//! - **types**: Defines the per-candidate outcome.

mod matcher;
mod types;

pub use matcher::{render_report, PatternMatcher};
pub use types::CandidateMatch;

/// `libvirt-`, one or more alphanumerics, any number of `-` followed by zero
/// or more alphanumerics, then `-format`.
pub const DEFAULT_PATTERN: &str = r"libvirt-[[:alnum:]]+(?:-[[:alnum:]]*)*-format";

/// Candidates evaluated by the pattern matcher, in output order.
pub const DEFAULT_CANDIDATES: [&str; 4] = [
    "libvirt-0-format",
    "libvirt--format",
    "libvirt-0-virtio-format",
    "libvirt-0-scsi-format",
];
