//! `Evidence` — the named scoring-term audit trail.
//!
//! Confidence scores are built additively from named sub-signals.  Every
//! contributing term must be recorded here under a stable key so the final
//! score is fully explainable after the fact.  This is a hard requirement
//! for debuggability, not an optimization: "why did agent 17 retreat at
//! T4210?" must be answerable from the log alone.
//!
//! Insertion order is preserved so log lines read in the same order the
//! scoring function ran.

use std::fmt;

/// An insertion-ordered list of `(term, contribution)` pairs.
///
/// Keys are `&'static str` by design: evidence keys are part of a tactic's
/// contract and must be stable across runs, so they live in the binary.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evidence(Vec<(&'static str, f32)>);

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a named contribution.  Duplicate keys are allowed (a term may
    /// legitimately fire twice); readers see both entries in order.
    #[inline]
    pub fn push(&mut self, term: &'static str, contribution: f32) {
        self.0.push((term, contribution));
    }

    /// First recorded value for `term`, if any.
    pub fn get(&self, term: &str) -> Option<f32> {
        self.0.iter().find(|(k, _)| *k == term).map(|(_, v)| *v)
    }

    /// `true` if `term` was recorded at least once.
    pub fn contains(&self, term: &str) -> bool {
        self.0.iter().any(|(k, _)| *k == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all recorded contributions.  For purely additive scorers this
    /// equals the pre-clamp confidence, which makes a useful test assertion.
    pub fn total(&self) -> f32 {
        self.0.iter().map(|(_, v)| v).sum()
    }
}

impl fmt::Display for Evidence {
    /// `key=+0.20 key2=-0.10 …` — the compact form used in decision logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in &self.0 {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{k}={v:+.2}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Evidence {
    type Item = (&'static str, f32);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (&'static str, f32)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
