//! Resume sanitization: subtract hidden run texts from extracted plain
//! text before it is scored.
//!
//! Removal is exact substring matching. When a hidden string also occurs
//! inside legitimately visible text the visible occurrence is removed too;
//! this imprecision is inherited behavior and callers should treat the
//! result as best-effort redaction, not a positional edit.

use regex::Regex;

/// Options for sanitizing extracted text.
#[derive(Debug, Clone, Default)]
pub struct SanitizeOptions {
    /// Collapse runs of spaces/tabs left behind by removal into a single
    /// space. Off by default so output matches plain subtraction exactly.
    pub collapse_whitespace: bool,
}

impl SanitizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable whitespace collapsing.
    pub fn with_collapsed_whitespace(mut self) -> Self {
        self.collapse_whitespace = true;
        self
    }
}

/// Remove every hidden string from `text`.
///
/// Each entry is trimmed first; empty entries are skipped. Entries are
/// processed in a single left-to-right pass over the list, and for each
/// entry every occurrence in the remaining text is removed.
pub fn strip_hidden(text: &str, hidden: &[String]) -> String {
    strip_hidden_with_options(text, hidden, &SanitizeOptions::default())
}

/// Remove every hidden string from `text`, with options.
pub fn strip_hidden_with_options(
    text: &str,
    hidden: &[String],
    options: &SanitizeOptions,
) -> String {
    let mut output = text.to_string();

    for entry in hidden {
        let needle = entry.trim();
        if needle.is_empty() {
            continue;
        }
        if output.contains(needle) {
            log::debug!("removing hidden text {:?}", needle);
            output = output.replace(needle, "");
        }
    }

    if options.collapse_whitespace {
        output = collapse_spaces(&output);
    }

    output
}

fn collapse_spaces(text: &str) -> String {
    let re = Regex::new(r"[ \t]{2,}").unwrap();
    re.replace_all(text, " ").into_owned()
}
