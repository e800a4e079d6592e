use crate::Registry;

/// Wraps a rendered profile in a Markdown document.
///
/// The document starts with a `Threat model` heading naming the key, at the
/// given level (clamped to 1-6). The body is fenced as a `text` code block unless
/// `code_block` is false.
#[must_use]
pub fn wrap(key: &str, body: &str, heading_level: u8, code_block: bool) -> String {
    let body = body.trim_end_matches('\n');
    let prefix = "#".repeat(usize::from(heading_level.clamp(1, 6)));
    if code_block {
        format!("{prefix} Threat model: `{key}`\n\n```text\n{body}\n```\n")
    } else {
        format!("{prefix} Threat model: `{key}`\n\n{body}\n")
    }
}

/// A Markdown table with one row per profile, in registry order.
#[must_use]
pub fn profile_table(registry: &Registry) -> String {
    let mut table = String::from("| Profile | Description |\n| ------- | ----------- |\n");
    table.extend(
        registry
            .iter()
            .map(|profile| format!("| `{}` | {} |\n", profile.key(), profile.name())),
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fences_body_by_default() {
        let document = wrap("aztec", "line one\nline two\n", 1, true);
        assert_eq!(
            document,
            "# Threat model: `aztec`\n\n```text\nline one\nline two\n```\n"
        );
    }

    #[test]
    fn wrap_without_code_block() {
        let document = wrap("zama", "body\n", 2, false);
        assert_eq!(document, "## Threat model: `zama`\n\nbody\n");
    }

    #[test]
    fn wrap_clamps_heading_level() {
        assert!(wrap("k", "b", 0, false).starts_with("# Threat"));
        assert!(wrap("k", "b", 12, false).starts_with("###### Threat"));
    }

    #[test]
    fn table_lists_profiles_in_registry_order() {
        let registry = Registry::builtin().unwrap();
        let table = profile_table(&registry);
        let rows: Vec<_> = table.lines().skip(2).collect();

        assert_eq!(table.lines().next(), Some("| Profile | Description |"));
        assert_eq!(
            rows,
            [
                "| `aztec` | Aztec-style zk rollup |",
                "| `zama` | Zama-style FHE compute stack |",
                "| `soundness` | Soundness-focused protocol lab |",
            ]
        );
    }
}
