//! Qualitative risk matrices that accompany each threat model profile.
//!
//! Each matrix pairs an asset with its main threat and a likelihood/impact
//! rating. The matrices are keyed the same way as the profile registry.

use std::fmt;

use serde::Serialize;

use super::UnknownProfileError;

/// A qualitative rating for likelihood or impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

impl RiskLevel {
    /// The uppercase label used in human-readable output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// A single entry in a risk matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskCell {
    /// The asset at risk.
    pub asset: &'static str,
    /// The main threat to the asset.
    pub threat: &'static str,
    /// How likely the threat is to materialise.
    pub likelihood: RiskLevel,
    /// How bad it is if it does.
    pub impact: RiskLevel,
    /// Free-form commentary.
    pub notes: &'static str,
}

/// A named risk matrix with a short summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskProfile {
    /// The profile key, shared with the threat model registry.
    #[serde(rename = "profile")]
    pub key: &'static str,
    /// The display name.
    pub name: &'static str,
    /// One-paragraph summary of the main worries.
    pub summary: &'static str,
    /// The risk cells, in display order.
    pub matrix: Vec<RiskCell>,
}

impl RiskProfile {
    /// All built-in risk matrices, in registry order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![aztec(), zama(), soundness()]
    }

    /// Looks up the risk matrix for a profile key.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownProfileError`] if there is no matrix for the key.
    pub fn lookup(key: &str) -> Result<Self, UnknownProfileError> {
        let mut profiles = Self::builtin();
        match profiles.iter().position(|profile| profile.key == key) {
            Some(index) => Ok(profiles.swap_remove(index)),
            None => Err(UnknownProfileError::new(
                key,
                profiles.iter().map(|profile| profile.key).collect(),
            )),
        }
    }
}

const fn cell(
    asset: &'static str,
    threat: &'static str,
    likelihood: RiskLevel,
    impact: RiskLevel,
    notes: &'static str,
) -> RiskCell {
    RiskCell {
        asset,
        threat,
        likelihood,
        impact,
        notes,
    }
}

fn aztec() -> RiskProfile {
    use RiskLevel::{High, Low, Medium};

    RiskProfile {
        key: "aztec",
        name: "Aztec-style zk privacy rollup",
        summary: "Privacy-preserving L2 with encrypted balances and zk circuits. Main worries \
                  are proof system soundness, DA failures, and key compromise.",
        matrix: vec![
            cell(
                "Encrypted balances and notes",
                "Compromised proving key or circuit bug",
                Medium,
                High,
                "Can silently break confidentiality or enable inflation.",
            ),
            cell(
                "L2 state commitment",
                "Data availability failure / withheld batches",
                Medium,
                High,
                "Users may not be able to exit or prove ownership.",
            ),
            cell(
                "Bridge contracts",
                "L1 <> L2 bridge logic bug",
                Low,
                High,
                "Typical catastrophic failure: locked or stolen funds.",
            ),
            cell(
                "Sequencer / coordinator",
                "Censorship or MEV abuse",
                High,
                Medium,
                "Can degrade UX and fairness, even if safety is preserved.",
            ),
        ],
    }
}

fn zama() -> RiskProfile {
    use RiskLevel::{High, Low, Medium};

    RiskProfile {
        key: "zama",
        name: "Zama-style FHE + Web3 stack",
        summary: "Encrypted compute over sensitive data with FHE and Web3 anchoring. Main \
                  worries are key management, performance-induced shortcuts, and side channels.",
        matrix: vec![
            cell(
                "FHE private keys",
                "Key exfiltration from compute cluster",
                Medium,
                High,
                "Decryption of historical ciphertexts is usually game over.",
            ),
            cell(
                "Encrypted data streams",
                "Traffic analysis and metadata leakage",
                High,
                Medium,
                "Patterns may leak business-sensitive info even if content stays private.",
            ),
            cell(
                "On-chain anchors / hashes",
                "Mismatched commitments between FHE world and chain",
                Low,
                High,
                "Breaks auditability or can be abused to fake computations.",
            ),
            cell(
                "Compute nodes",
                "Side-channel attacks on FHE runtimes",
                Medium,
                Medium,
                "Timing and cache patterns may leak partial information.",
            ),
        ],
    }
}

fn soundness() -> RiskProfile {
    use RiskLevel::{High, Medium};

    RiskProfile {
        key: "soundness",
        name: "Soundness-first protocol lab",
        summary: "Specification-driven, research-heavy protocol work. Main worries are \
                  spec/implementation drift and unsafe experimental deployments.",
        matrix: vec![
            cell(
                "Reference specification",
                "Implementation deviates from spec",
                Medium,
                High,
                "Breaks assumptions used in proofs and reviews.",
            ),
            cell(
                "Test deployments / devnets",
                "Experimental features exposed to real value",
                Medium,
                Medium,
                "Prototype code accidentally becomes security-critical.",
            ),
            cell(
                "Proof artifacts",
                "Outdated proofs kept as authoritative",
                High,
                Medium,
                "Teams may over-trust proofs that no longer match the system.",
            ),
            cell(
                "Upgrade and governance path",
                "Rushed changes bypassing review process",
                Medium,
                High,
                "Undermines the whole soundness-first culture.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    #[test]
    fn every_registry_profile_has_a_matrix() {
        let registry = Registry::builtin().unwrap();
        let keys: Vec<_> = RiskProfile::builtin().iter().map(|p| p.key).collect();
        assert_eq!(keys, registry.list_keys());
    }

    #[test]
    fn lookup_unknown_key_fails() {
        let error = RiskProfile::lookup("nope").unwrap_err();
        assert_eq!(error.key(), "nope");
    }

    #[test]
    fn lookup_returns_requested_profile() {
        let profile = RiskProfile::lookup("soundness").unwrap();
        assert_eq!(profile.key, "soundness");
        assert_eq!(profile.matrix.len(), 4);
    }

    #[test]
    fn serialises_with_lowercase_levels() {
        let profile = RiskProfile::lookup("aztec").unwrap();
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["profile"], "aztec");
        assert_eq!(value["matrix"][0]["likelihood"], "medium");
        assert_eq!(value["matrix"][0]["impact"], "high");
        assert_eq!(value["matrix"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::High.label(), "HIGH");
        assert_eq!(RiskLevel::Low.to_string(), "low");
    }
}
