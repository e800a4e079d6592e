//! Search rendered profiles line by line.
//!
//! Matching is case-sensitive unless [`Matcher::substring`] or
//! [`Matcher::regex`] is asked to ignore case. Blank lines never match.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::{render, Part, Profile, Registry, Section, UnknownProfileError};

/// How a line is tested against the query.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Plain substring containment.
    Substring {
        /// The text to look for, lowercased when `ignore_case` is set.
        needle: String,
        /// Whether case is ignored.
        ignore_case: bool,
    },
    /// A regular expression.
    Pattern(Regex),
}

impl Matcher {
    /// Matches lines containing `query`.
    #[must_use]
    pub fn substring(query: &str, ignore_case: bool) -> Self {
        let needle = if ignore_case {
            query.to_lowercase()
        } else {
            query.to_string()
        };
        Self::Substring {
            needle,
            ignore_case,
        }
    }

    /// Matches lines against a regular expression.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn regex(pattern: &str, ignore_case: bool) -> Result<Self, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .build()
            .map(Self::Pattern)
    }

    /// Whether the line matches.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        match self {
            Self::Substring {
                needle,
                ignore_case: true,
            } => line.to_lowercase().contains(needle.as_str()),
            Self::Substring { needle, .. } => line.contains(needle.as_str()),
            Self::Pattern(regex) => regex.is_match(line),
        }
    }
}

/// Which profiles and which part of them to search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Profile keys to search. Empty means every profile.
    pub profiles: Vec<String>,
    /// The section to render before searching.
    pub section: Section,
}

impl Scope {
    /// The profiles in scope, in registry order.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownProfileError`] if a requested key is not registered.
    pub fn select<'a>(&self, registry: &'a Registry) -> Result<Vec<&'a Profile>, UnknownProfileError> {
        for key in &self.profiles {
            registry.get(key)?;
        }
        Ok(registry
            .iter()
            .filter(|profile| {
                self.profiles.is_empty() || self.profiles.iter().any(|key| key == profile.key())
            })
            .collect())
    }
}

/// A matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// The key of the profile the line came from.
    pub profile: String,
    /// The part of the profile the line came from.
    pub part: Part,
    /// The matching line, as rendered.
    pub line: String,
}

/// Returns every rendered line in scope that matches.
///
/// Hits are ordered by profile (registry order) and then by position in the
/// rendered text.
///
/// # Errors
///
/// Returns [`UnknownProfileError`] if the scope names an unknown profile.
pub fn search(
    registry: &Registry,
    matcher: &Matcher,
    scope: &Scope,
) -> Result<Vec<Hit>, UnknownProfileError> {
    let mut hits = Vec::new();
    for profile in scope.select(registry)? {
        let rendered = render(profile, scope.section);
        let before = hits.len();
        hits.extend(
            rendered
                .lines()
                .filter(|(_, line)| matcher.is_match(line))
                .map(|(part, line)| Hit {
                    profile: profile.key().to_string(),
                    part,
                    line: line.to_string(),
                }),
        );
        debug!(profile = profile.key(), hits = hits.len() - before, "searched profile");
    }
    Ok(hits)
}
