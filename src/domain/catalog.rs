//! The built-in threat model profiles.

use super::{Profile, RegistryError};

pub fn profiles() -> Result<Vec<Profile>, RegistryError> {
    Ok(vec![aztec()?, zama()?, soundness()?])
}

fn aztec() -> Result<Profile, RegistryError> {
    Ok(Profile::new(
        "aztec",
        "Aztec-style zk rollup",
        "A privacy-preserving Ethereum rollup using zero-knowledge proofs for confidential \
         balances and private smart contracts.",
    )?
    .with_assets([
        "Encrypted user balances and notes",
        "Viewing keys and decryption keys",
        "Proving and verification keys for zk circuits",
        "Layer 2 state roots and Merkle commitments",
        "Bridge contracts and rollup smart contracts on L1",
    ])
    .with_adversaries([
        "On-chain observers trying to deanonymize users",
        "Compromised sequencer attempting to censor or reorder transactions",
        "Malicious prover submitting invalid proofs",
        "Smart contract attackers exploiting rollup logic",
        "Insider threat leaking viewing keys or proving secrets",
    ])
    .with_attack_surfaces([
        "Bugs in zk circuits or constraint systems",
        "Incorrect implementation of cryptographic primitives",
        "Bridge contract vulnerabilities between L1 and L2",
        "Metadata leaks from transaction timing and fee patterns",
        "Trusted setup or key ceremony compromises, if applicable",
    ])
    .with_mitigations([
        "Independent audits of circuits, contracts, and cryptographic libraries",
        "Formal verification of core rollup and bridge logic where feasible",
        "Multi-party ceremonies or transparent setups for proving systems",
        "Fee and batching strategies to reduce metadata leakage",
        "Key management policies for proving keys and operational secrets",
    ]))
}

fn zama() -> Result<Profile, RegistryError> {
    Ok(Profile::new(
        "zama",
        "Zama-style FHE compute stack",
        "A system that performs computations directly on encrypted data using fully \
         homomorphic encryption, often alongside Web3 components.",
    )?
    .with_assets([
        "Long-term FHE secret keys and key shares",
        "Encrypted datasets stored in data lakes or logs",
        "Computation policies describing allowed FHE queries",
        "Metadata linking ciphertexts to users or organizations",
        "Partially decrypted results and post-processing pipelines",
    ])
    .with_adversaries([
        "Cloud operators with access to ciphertexts and compute nodes",
        "External attackers exfiltrating ciphertexts or key material",
        "Curious analysts attempting to infer data from encrypted outputs",
        "Application developers misconfiguring FHE parameters",
        "Colluding parties trying to reconstruct secret keys",
    ])
    .with_attack_surfaces([
        "Side channel leakage from FHE implementations",
        "Weak parameter choices leading to cryptanalytic attacks",
        "Decryption or key management endpoints",
        "Insecure storage of ciphertexts and backups",
        "Query pattern leakage and repeated computations on similar data",
    ])
    .with_mitigations([
        "Use hardened, well-reviewed FHE libraries with safe defaults",
        "Separate roles for key management and compute infrastructure",
        "Access control and logging for decryption operations",
        "Regular review of parameter choices against current research",
        "Rate limits and differential privacy techniques for result queries",
    ]))
}

fn soundness() -> Result<Profile, RegistryError> {
    Ok(Profile::new(
        "soundness",
        "Soundness-focused protocol lab",
        "A research and engineering environment where the main assets are protocol \
         specifications, proofs of soundness, and reference implementations.",
    )?
    .with_assets([
        "Formal specifications and protocol descriptions",
        "Soundness and security proofs, including mechanized proofs",
        "Reference implementations used as a basis for other systems",
        "Private design discussions and threat models",
        "Continuous integration and verification pipelines",
    ])
    .with_adversaries([
        "External attackers seeking to exploit specification oversights",
        "Well-resourced adversaries with access to alternative models",
        "Insiders bypassing review or verification processes",
        "Implementers cherry-picking parts of specs without proofs",
        "Attackers publishing misleading or incomplete analyses",
    ])
    .with_attack_surfaces([
        "Mismatch between formal models and real-world deployments",
        "Ambiguous specs that allow unsafe interpretations",
        "Gaps between reference code and production code",
        "Tooling issues in proof assistants or model checkers",
        "Insufficient review of assumptions and threat models over time",
    ])
    .with_mitigations([
        "Executable, unambiguous specifications aligned with implementations",
        "Independent review of proofs and modeling assumptions",
        "Conformance test suites derived from formal models",
        "Change management policies for specs and security claims",
        "Regular threat model updates tied to release cycles",
    ]))
}
