//! Batch-separator splitting for SQL scripts.
//!
//! SQL tooling conventionally separates batches with a line containing only
//! the token `GO`. A single driver call can execute only one batch, so a
//! script must be split before execution. Splitting is purely positional:
//! separator lines are dropped, everything else is preserved verbatim so a
//! batch can be reported byte-for-byte in diagnostics.

/// Return whether `line` is a batch separator: trimmed content that
/// case-insensitively equals `GO` and nothing else.
///
/// `trim` also strips a trailing `\r`, so CRLF sources split the same way
/// as LF sources.
pub fn is_batch_separator(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("GO")
}

/// Split a raw script body into its ordered batches.
///
/// N separator lines yield exactly N+1 batches, including empty ones - no
/// trimming, no filtering. With zero separators the whole input comes back
/// as a single batch, even when it is empty or whitespace-only. Callers
/// that want to skip no-op batches filter them before execution.
///
/// This function never fails; every input string is valid.
///
/// # Examples
/// ```
/// use ms_core::splitter::split_into_statements;
/// assert_eq!(split_into_statements("SELECT 1"), vec!["SELECT 1"]);
/// assert_eq!(
///     split_into_statements("CREATE TABLE a(i INT)\nGO\nDROP TABLE a"),
///     vec!["CREATE TABLE a(i INT)", "DROP TABLE a"]
/// );
/// ```
pub fn split_into_statements(script: &str) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in script.split('\n') {
        if is_batch_separator(line) {
            batches.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    batches.push(current.join("\n"));
    batches
}

#[cfg(test)]
#[path = "splitter_test.rs"]
mod tests;
