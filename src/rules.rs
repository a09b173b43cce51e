use aho_corasick::{AhoCorasick, MatchKind};
use fancy_regex::Regex;

use crate::error::Result;

/// Compile a case-insensitive pattern. fancy_regex is needed for the
/// lookahead in the iPad/Android-tablet rule.
pub(crate) fn compile_regex(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("(?i){}", pattern))?)
}

/// A compiled rule: one pattern plus the label it yields.
pub(crate) struct CompiledEntry<T> {
    pub regex: Regex,
    pub data: T,
}

/// Ordered rule list. Evaluation follows insertion order and stops at the
/// first pattern that matches, so overlapping tokens resolve by position.
pub(crate) struct RuleSet<T> {
    entries: Vec<CompiledEntry<T>>,
}

impl<T> RuleSet<T> {
    pub fn build<'p>(items: impl IntoIterator<Item = (&'p str, T)>) -> Result<Self> {
        let entries = items
            .into_iter()
            .map(|(pattern, data)| {
                Ok(CompiledEntry {
                    regex: compile_regex(pattern)?,
                    data,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Data of the first matching entry. A pattern that errors out
    /// (backtrack limit) counts as a non-match.
    pub fn match_first(&self, ua: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.regex.is_match(ua).unwrap_or(false))
            .map(|entry| &entry.data)
    }
}

/// Case-insensitive "contains any of" test over a fixed keyword list.
pub(crate) struct KeywordSet {
    matcher: AhoCorasick,
}

impl KeywordSet {
    pub fn build<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(keywords.into_iter().map(|k| k.as_ref().to_string()))?;
        Ok(Self { matcher })
    }

    pub fn contains_any(&self, haystack: &str) -> bool {
        self.matcher.is_match(haystack)
    }
}
