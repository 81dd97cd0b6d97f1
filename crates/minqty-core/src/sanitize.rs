//! # Text Sanitization
//!
//! Cleans single-line form input before it is written to the metadata store.
//!
//! ## Steps
//! ```text
//! raw input
//!   │
//!   ├── 1. drop <script>/<style> blocks with their contents
//!   ├── 2. strip remaining tags; a lone '<' becomes "&lt;"
//!   ├── 3. remove percent-encoded octets (%0A, %3C, ...)
//!   ├── 4. tabs, line breaks and runs of spaces → one space
//!   └── 5. trim
//! ```
//!
//! The output is stored verbatim. Whether it reads as a minimum is decided
//! later by the resolver.

use std::sync::LazyLock;

use regex::Regex;

/// Sanitizes a single-line text field.
///
/// ## Example
/// ```rust
/// use minqty_core::sanitize::sanitize_text_field;
///
/// assert_eq!(sanitize_text_field("  12\n"), "12");
/// assert_eq!(sanitize_text_field("<b>5</b>"), "5");
/// assert_eq!(sanitize_text_field("3 < 4"), "3 &lt; 4");
/// ```
pub fn sanitize_text_field(raw: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(raw, "");
    let text = TAG.replace_all(&text, "");
    let text = text.replace('<', "&lt;");
    let text = PERCENT_OCTET.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// `<script>`/`<style>` with their contents; an unclosed block runs to the end.
static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b.*?(?:</(?:script|style)[^>]*>|$)")
        .expect("script block pattern is valid")
});

/// Anything that opens like a tag; an unterminated one swallows the rest.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z/!?][^>]*(?:>|$)").expect("tag pattern is valid"));

static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9a-fA-F]{2}").expect("octet pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\p{Cc}]+").expect("whitespace pattern is valid"));

// =============================================================================
// Unit Tests
// =============================================================================
