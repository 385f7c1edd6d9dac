use super::types::Algorithm;
use log::debug;
use md5::Md5;
use sha2::{Digest, Sha256};

/// Computes the digest of `bytes` with the given algorithm.
///
/// The result is the raw digest rendered as lowercase hexadecimal with no
/// separators, so an MD5 digest is always 32 characters long.
///
/// # Arguments
///
/// * `algorithm` - The digest algorithm to use.
/// * `bytes` - The raw bytes to hash.
///
/// # Returns
///
/// A lowercase hexadecimal string representation of the digest.
///
/// # Examples
///
/// ```rust
/// use go_demos::digest::{compute_hex_digest, Algorithm};
/// let digest = compute_hex_digest(Algorithm::Md5, b"abc");
/// assert_eq!(digest, "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn compute_hex_digest(algorithm: Algorithm, bytes: &[u8]) -> String {
    debug!(
        "Hashing {} byte(s) with {} into a {}-byte digest",
        bytes.len(),
        algorithm,
        algorithm.digest_len()
    );
    let digest = match algorithm {
        Algorithm::Md5 => hex_digest::<Md5>(bytes),
        Algorithm::Sha256 => hex_digest::<Sha256>(bytes),
    };
    debug_assert_eq!(digest.len(), algorithm.digest_len() * 2);
    digest
}

/// Computes the MD5 digest of the UTF-8 bytes of `text`.
///
/// # Examples
///
/// ```rust
/// use go_demos::digest::md5_hex;
/// assert_eq!(md5_hex("hello, world"), "e4d7f1b4ed2e42d15898f4b27b019da4");
/// ```
pub fn md5_hex(text: &str) -> String {
    compute_hex_digest(Algorithm::Md5, text.as_bytes())
}

/// Renders the line the digest printer writes: the hex digest of `text`
/// followed by a single newline.
pub fn render_digest_line(algorithm: Algorithm, text: &str) -> String {
    format!("{}\n", compute_hex_digest(algorithm, text.as_bytes()))
}

fn hex_digest<D: Digest>(bytes: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    hex::encode(result)
}
