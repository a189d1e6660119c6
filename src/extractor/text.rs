//! Whitespace normalization for extracted text
//!
//! Every text field on an extracted document passes through the same
//! routine, so the cleaning contract holds uniformly: no tabs, no carriage
//! returns, no runs of two or more spaces, no runs of blank lines.

/// Normalizes whitespace in extracted text
///
/// # Cleaning Steps
///
/// 1. Split into lines (CR and CRLF both terminate a line)
/// 2. Collapse each line's whitespace runs (spaces, tabs) to single spaces
///    and trim the line
/// 3. Collapse runs of blank lines down to one blank line
/// 4. Drop leading and trailing blank lines
///
/// The routine is idempotent: cleaning already-clean text returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use faqsmith::extractor::clean_text;
///
/// assert_eq!(clean_text("a\t\tb   c"), "a b c");
/// assert_eq!(clean_text("a\n\n\n\nb"), "a\n\nb");
/// ```
pub fn clean_text(input: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_pending = false;

    // CRLF first so a Windows line ending never turns into a blank line
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    for raw_line in normalized.lines() {
        let collapsed = collapse_spaces(raw_line);

        if collapsed.is_empty() {
            // Only mark a break once we have content; leading blanks drop
            blank_pending = !lines.is_empty();
        } else {
            if blank_pending {
                lines.push(String::new());
                blank_pending = false;
            }
            lines.push(collapsed);
        }
    }

    lines.join("\n")
}

/// Collapses all whitespace runs in a single line to single spaces
fn collapse_spaces(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
