//! Tests for batch-separator splitting.

use super::{is_batch_separator, split_into_statements};

#[test]
fn script_with_no_separator_is_a_single_batch() {
    let script = "CREATE TABLE migrations(\n    id UUID NOT NULL,\n    filename VARCHAR(255) NOT NULL,\n    applied_on TIMESTAMPTZ NOT NULL\n)";
    let batches = split_into_statements(script);
    assert_eq!(batches, vec![script.to_string()]);
}

#[test]
fn empty_input_is_a_single_empty_batch() {
    assert_eq!(split_into_statements(""), vec![String::new()]);
}

#[test]
fn whitespace_only_input_is_preserved_verbatim() {
    assert_eq!(split_into_statements("  \n\t\n"), vec!["  \n\t\n".to_string()]);
}

#[test]
fn two_separators_yield_three_batches() {
    let script = "/* create tables */\n\nCREATE TABLE foo(id INT)\nGO\n\nALTER TABLE bar ADD CONSTRAINT c CHECK (id > 0)\nGO";
    let batches = split_into_statements(script);
    assert_eq!(batches.len(), 3);
    assert!(batches[0].starts_with("/* create tables */"));
    // The blank line after the first separator is kept, untrimmed.
    assert_eq!(batches[1], "\nALTER TABLE bar ADD CONSTRAINT c CHECK (id > 0)");
    // Trailing separator with nothing after it leaves an empty batch.
    assert_eq!(batches[2], "");
}

#[test]
fn separator_lines_are_not_part_of_any_batch() {
    let batches = split_into_statements("a\nGO\nb");
    assert_eq!(batches, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn rejoining_batches_reproduces_non_separator_content() {
    let script = "line one\n\n  line two\nGO\nline three\n";
    let batches = split_into_statements(script);
    assert_eq!(batches.join("\n"), "line one\n\n  line two\nline three\n");
}

#[test]
fn separator_is_case_insensitive() {
    assert_eq!(split_into_statements("a\ngo\nb").len(), 2);
    assert_eq!(split_into_statements("a\nGo\nb").len(), 2);
    assert_eq!(split_into_statements("a\ngO\nb").len(), 2);
}

#[test]
fn separator_tolerates_surrounding_whitespace() {
    assert_eq!(split_into_statements("a\n  GO  \nb").len(), 2);
    assert_eq!(split_into_statements("a\n\tGO\nb").len(), 2);
}

#[test]
fn crlf_scripts_split_like_lf_scripts() {
    let batches = split_into_statements("SELECT 1\r\nGO\r\nSELECT 2\r\n");
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0], "SELECT 1\r");
    assert_eq!(batches[1], "SELECT 2\r\n");
}

#[test]
fn go_must_be_alone_on_the_line() {
    assert!(!is_batch_separator("GOTO cleanup"));
    assert!(!is_batch_separator("GO TO"));
    assert!(!is_batch_separator("SELECT 1 GO"));
    assert!(!is_batch_separator("-- GO"));
    assert!(is_batch_separator("GO"));
    assert!(is_batch_separator("  go\t"));
    assert!(is_batch_separator("GO\r"));
}

#[test]
fn leading_separator_yields_leading_empty_batch() {
    assert_eq!(
        split_into_statements("GO\nSELECT 1"),
        vec![String::new(), "SELECT 1".to_string()]
    );
}

#[test]
fn consecutive_separators_yield_empty_middle_batch() {
    assert_eq!(
        split_into_statements("a\nGO\nGO\nb"),
        vec!["a".to_string(), String::new(), "b".to_string()]
    );
}
