use super::types::CandidateMatch;
use anyhow::{Context, Result as AnyhowResult};
use log::debug;
use regex::Regex;

/// A compiled pattern, tested against candidates by substring search.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Compiles `pattern`.
    ///
    /// # Arguments
    ///
    /// * `pattern` - A regular expression in `regex` crate syntax.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternMatcher)` - The compiled matcher.
    /// * `Err(anyhow::Error)` - An error naming the pattern if it does not compile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use go_demos::pattern::{PatternMatcher, DEFAULT_PATTERN};
    /// let matcher = PatternMatcher::new(DEFAULT_PATTERN).unwrap();
    /// assert!(matcher.is_match("libvirt-0-virtio-format"));
    /// assert!(!matcher.is_match("libvirt--format"));
    /// ```
    pub fn new(pattern: &str) -> AnyhowResult<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Failed to compile pattern: {}", pattern))?;
        debug!("Compiled pattern {}", pattern);
        Ok(Self { regex })
    }

    /// The pattern this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the pattern occurs anywhere in `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Tests each candidate independently, preserving the input order.
    pub fn evaluate<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<CandidateMatch> {
        candidates
            .iter()
            .map(|candidate| {
                let candidate = candidate.as_ref();
                let matched = self.is_match(candidate);
                debug!("{} -> {}", candidate, matched);
                CandidateMatch {
                    candidate: candidate.to_string(),
                    matched,
                }
            })
            .collect()
    }
}

/// Renders one `"<candidate> matched: <bool>"` line per outcome, each ending
/// with a newline.
pub fn render_report(matches: &[CandidateMatch]) -> String {
    matches
        .iter()
        .map(|outcome| format!("{}\n", outcome))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{DEFAULT_CANDIDATES, DEFAULT_PATTERN};

    fn default_matcher() -> PatternMatcher {
        PatternMatcher::new(DEFAULT_PATTERN).unwrap()
    }

    /// Tests the outcome for each of the default candidates.
    #[test]
    fn test_default_candidates() {
        let outcomes: Vec<bool> = default_matcher()
            .evaluate(&DEFAULT_CANDIDATES)
            .into_iter()
            .map(|m| m.matched)
            .collect();
        assert_eq!(outcomes, vec![true, false, true, true]);
    }

    /// Tests that the report lists candidates in input order.
    #[test]
    fn test_render_report_default() {
        let report = render_report(&default_matcher().evaluate(&DEFAULT_CANDIDATES));
        assert_eq!(
            report,
            "libvirt-0-format matched: true\n\
             libvirt--format matched: false\n\
             libvirt-0-virtio-format matched: true\n\
             libvirt-0-scsi-format matched: true\n"
        );
    }

    /// Tests that matching is substring search, not a full-string match.
    #[test]
    fn test_is_match_substring() {
        let matcher = default_matcher();
        assert!(matcher.is_match("-drive file=x,id=libvirt-1-format,if=none"));
        assert!(matcher.is_match("xxlibvirt-abc-formatted"));
    }

    /// Tests inputs that must not match.
    #[test]
    fn test_is_match_rejects() {
        let matcher = default_matcher();
        assert!(!matcher.is_match("libvirt-0-"));
        assert!(!matcher.is_match("libvirt-0format"));
        assert!(!matcher.is_match("LIBVIRT-0-format"));
        assert!(!matcher.is_match("libvirt-_-format"));
        assert!(!matcher.is_match(""));
    }

    /// Tests that hyphen groups may carry empty name parts.
    #[test]
    fn test_is_match_empty_parts_after_first_name() {
        let matcher = default_matcher();
        assert!(matcher.is_match("libvirt-0--format"));
        assert!(matcher.is_match("libvirt-a-b-c-d-format"));
    }

    /// Tests that a malformed pattern is reported, naming the pattern.
    #[test]
    fn test_new_invalid_pattern() {
        let err = PatternMatcher::new("libvirt-[").unwrap_err();
        assert!(err.to_string().contains("libvirt-["));
    }

    /// Tests that compiling twice gives matchers with identical results.
    #[test]
    fn test_construction_is_repeatable() {
        let first = default_matcher().evaluate(&DEFAULT_CANDIDATES);
        let second = default_matcher().evaluate(&DEFAULT_CANDIDATES);
        assert_eq!(first, second);
        assert_eq!(default_matcher().as_str(), DEFAULT_PATTERN);
    }

    /// Tests evaluation of an empty candidate list.
    #[test]
    fn test_evaluate_empty() {
        let matches = default_matcher().evaluate::<&str>(&[]);
        assert!(matches.is_empty());
        assert_eq!(render_report(&matches), "");
    }
}
