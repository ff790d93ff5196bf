//! Path-scoped allow-list resolution.
//!
//! Matches file paths against configured glob overrides. When several
//! overrides match, the pattern with more literal (non-wildcard) path segments
//! wins; ties go to the earlier override. A path with no match uses the
//! project-wide allow-list.

use globset::{Glob, GlobMatcher};

use crate::config::Override;
use crate::diagnostics::AllowList;

/// Compiled overrides for efficient matching.
#[derive(Debug, Clone, Default)]
pub struct OverrideSet {
    compiled: Vec<CompiledOverride>,
}

/// A single override with pre-compiled glob matchers.
#[derive(Debug, Clone)]
struct CompiledOverride {
    matchers: Vec<(GlobMatcher, usize)>, // (matcher, specificity)
    allow_list: AllowList,
}

/// Count literal (non-wildcard) path segments in a glob pattern.
///
/// `src/legacy/*.ts` → 2, `src/**/*.ts` → 1, `**/*.ts` → 0
fn specificity(pattern: &str) -> usize {
    pattern
        .split('/')
        .filter(|seg| !seg.contains('*') && !seg.contains('?') && !seg.contains('['))
        .count()
}

impl OverrideSet {
    /// Compile configured overrides.
    ///
    /// Invalid glob patterns are skipped with a tracing warning.
    pub fn compile(overrides: &[Override]) -> Self {
        let compiled = overrides
            .iter()
            .filter_map(|ov| {
                let matchers: Vec<(GlobMatcher, usize)> = ov
                    .paths
                    .iter()
                    .filter_map(|pattern| match Glob::new(pattern) {
                        Ok(glob) => Some((glob.compile_matcher(), specificity(pattern))),
                        Err(e) => {
                            tracing::warn!(pattern, error = %e, "skipping invalid glob pattern");
                            None
                        }
                    })
                    .collect();
                if matchers.is_empty() {
                    None
                } else {
                    Some(CompiledOverride {
                        matchers,
                        allow_list: AllowList::new(ov.allowed_values.iter().cloned()),
                    })
                }
            })
            .collect();
        Self { compiled }
    }

    /// The allow-list of the most specific override matching `path`, if any.
    pub fn resolve(&self, path: &str) -> Option<&AllowList> {
        let mut best: Option<(usize, &AllowList)> = None;
        for ov in &self.compiled {
            let hit = ov
                .matchers
                .iter()
                .filter(|(matcher, _)| matcher.is_match(path))
                .map(|(_, spec)| *spec)
                .max();
            if let Some(spec) = hit
                && best.is_none_or(|(best_spec, _)| spec > best_spec)
            {
                best = Some((spec, &ov.allow_list));
            }
        }
        let resolved = best.map(|(_, allow_list)| allow_list);
        tracing::debug!(path, matched = resolved.is_some(), "resolved path override");
        resolved
    }

    /// The allow-list for `path`, falling back to `default`.
    pub fn allow_list_for<'a>(&'a self, path: &str, default: &'a AllowList) -> &'a AllowList {
        self.resolve(path).unwrap_or(default)
    }
}
