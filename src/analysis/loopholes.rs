//! Loophole detection
//!
//! A fixed list of regular expressions matching discretionary legal language.
//! Each pattern captures the sentence containing the match so flagged clauses
//! can be shown verbatim.

use regex::Regex;

const LOOPHOLE_PATTERNS: [&str; 10] = [
    r"\bmay\b",
    r"\bshould\b",
    r"\bif applicable\b",
    r"\bat the discretion\b",
    r"\bsubject to\b",
    r"\breasonable\b",
    r"\bas needed\b",
    r"\bpossible\b",
    r"\bto the extent\b",
    r"\bunless\b",
];

/// Scanner holding the compiled patterns. Built once at startup.
pub struct LoopholeScanner {
    patterns: Vec<Regex>,
}

impl LoopholeScanner {
    pub fn new() -> Self {
        let patterns = LOOPHOLE_PATTERNS
            .iter()
            .map(|pattern| {
                // Capture the containing sentence: everything between the
                // previous period and the next one.
                Regex::new(&format!(r"(?i)([^.]*{}[^.]*\.)", pattern))
                    .expect("loophole pattern must compile")
            })
            .collect();

        Self { patterns }
    }

    /// Collect every sentence that matches a loophole pattern, in pattern
    /// order. A sentence matching several patterns appears once per pattern.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut loopholes = Vec::new();
        for pattern in &self.patterns {
            for captures in pattern.captures_iter(text) {
                loopholes.push(captures[1].trim().to_string());
            }
        }
        loopholes
    }
}

impl Default for LoopholeScanner {
    fn default() -> Self {
        Self::new()
    }
}
