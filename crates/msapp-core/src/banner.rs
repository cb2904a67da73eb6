//! # Editor Banner Filter
//!
//! Source files unpacked by the platform tooling open with a disclaimer
//! block: a full-width `# ****...` marker line, then `# ` comment lines
//! mentioning the product, then blank lines. The block is not part of the
//! logical content and is removed before YAML parsing.
//!
//! The filter is a single pass carrying one flag. Once the marker is seen,
//! product comment lines and blank lines are dropped. The first line that
//! is neither blank nor a comment ends skip mode and is kept. Comment lines
//! that do not mention the product are kept without ending skip mode.

/// Full-width marker line that opens the banner (after trimming).
pub const BANNER_MARKER: &str =
    "# ************************************************************************************************";

/// Product token that identifies banner comment lines.
pub const BANNER_PRODUCT_TOKEN: &str = "Power Apps";

/// Remove the editor banner block from `text`.
///
/// Lines are split on `\n` and rejoined with `\n`, so text without a
/// banner is returned unchanged.
pub fn strip_banner(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut skipping = false;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with(BANNER_MARKER) {
            skipping = true;
            continue;
        }
        if skipping {
            if trimmed.starts_with("# ") && line.contains(BANNER_PRODUCT_TOKEN) {
                continue;
            }
            if trimmed.is_empty() {
                continue;
            }
            if !trimmed.starts_with('#') {
                skipping = false;
            }
        }
        kept.push(line);
    }

    kept.join("\n")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn plain_lines() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z0-9_:# ]{0,40}", 0..12)
    }

    proptest! {
        /// Text that never contains the marker passes through untouched.
        #[test]
        fn no_marker_is_identity(lines in plain_lines()) {
            let text = lines.join("\n");
            prop_assert_eq!(strip_banner(&text), text);
        }

        /// Filtering is idempotent.
        #[test]
        fn filtering_twice_equals_once(prefix in plain_lines(), body in plain_lines()) {
            let text = format!(
                "{}\n{BANNER_MARKER}\n# Power Apps notice\n\n{}",
                prefix.join("\n"),
                body.join("\n")
            );
            let once = strip_banner(&text);
            prop_assert_eq!(strip_banner(&once), once.clone());
        }

        /// Everything before the marker survives verbatim.
        #[test]
        fn prefix_before_marker_is_kept(prefix in plain_lines()) {
            let head = prefix.join("\n");
            let text = format!("{head}\n{BANNER_MARKER}\n# Power Apps notice\nFill: Red");
            let out = strip_banner(&text);
            prop_assert!(out.starts_with(&head));
            prop_assert!(out.ends_with("Fill: Red"));
        }
    }
}
