use super::*;

#[test]
fn trimmed_prompt_rejects_empty_input() {
    assert!(trimmed_prompt("").is_none());
}

#[test]
fn trimmed_prompt_rejects_whitespace_only() {
    assert!(trimmed_prompt("   \n\t").is_none());
}

#[test]
fn trimmed_prompt_strips_surrounding_whitespace() {
    assert_eq!(trimmed_prompt("  hello  ").as_deref(), Some("hello"));
}
