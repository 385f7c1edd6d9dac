use clap::ValueEnum;
use std::fmt;

/// Digest algorithms the printer can use.
///
/// MD5 is the default and the one the demo is about. SHA-256 is kept as an
/// alternative for comparing output lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// 128-bit MD5 digest (RFC 1321).
    #[default]
    Md5,
    /// 256-bit SHA-256 digest.
    Sha256,
}

impl Algorithm {
    /// Lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
        }
    }

    /// Length of the raw digest in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha256 => 32,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
