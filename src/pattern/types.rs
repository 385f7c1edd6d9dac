use std::fmt;

/// Outcome of testing one candidate string against the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    /// The candidate string, as given.
    pub candidate: String,
    /// Whether the pattern occurs anywhere in the candidate.
    pub matched: bool,
}

impl fmt::Display for CandidateMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} matched: {}", self.candidate, self.matched)
    }
}
