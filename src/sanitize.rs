//! Output sanitizer: strips leaked `<think>` reasoning markup.
//!
//! DeepSeek-R1 style models sometimes emit their chain of thought inside
//! `<think>...</think>` tags despite the prompt forbidding it. The final
//! answer must never show that markup.

use std::sync::OnceLock;

use regex::Regex;

fn think_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // (?s) so blocks spanning multiple lines match; non-greedy so separate
    // blocks are removed individually rather than everything between the
    // first opener and the last closer.
    RE.get_or_init(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid regex"))
}

/// Remove every `<think>...</think>` block and trim surrounding whitespace.
///
/// Idempotent: cleaning already-clean text is a no-op.
pub fn clean(raw: &str) -> String {
    think_block_re().replace_all(raw, "").trim().to_string()
}
