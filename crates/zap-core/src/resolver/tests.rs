use crate::dict::{SnippetEntry, SnippetIndex};

use super::{resolve, MAX_MATCHES};

fn entry(word: &str, name: &str, tags: &[&str], chars: &[char]) -> SnippetEntry {
    SnippetEntry {
        word: word.to_string(),
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        chars: chars.to_vec(),
    }
}

fn make_index() -> SnippetIndex {
    SnippetIndex::build(vec![
        entry("π", "pi", &["greek", "math", "letter"], &['p']),
        entry("Σ", "sigma", &["greek", "math", "sum"], &['s', 'e']),
        entry("λ", "lambda", &["greek", "letter", "function"], &['l']),
        entry("→", "arrow", &["arrow", "right"], &['>']),
    ])
    .unwrap()
}

#[test]
fn empty_input_yields_empty() {
    let index = make_index();
    assert!(resolve("", &index).is_empty());
    assert!(resolve("   ", &index).is_empty());
    assert!(resolve("\t \n", &index).is_empty());
}

#[test]
fn exact_literal_match() {
    let index = make_index();
    let r = resolve("π", &index);
    assert_eq!(r.primary, vec!["π"]);
    assert_eq!(r.shifted, vec!["Π"]);
}

#[test]
fn exact_name_match() {
    let index = make_index();
    let r = resolve("pi", &index);
    assert_eq!(r.primary, vec!["π"]);
}

#[test]
fn exact_match_ignores_surrounding_whitespace() {
    let index = make_index();
    let r = resolve("  pi ", &index);
    assert_eq!(r.primary, vec!["π"]);
}

#[test]
fn literal_beats_name() {
    // "pi" is a canonical word of one entry and the name of another.
    let index = SnippetIndex::build(vec![
        entry("pi", "circle constant", &[], &[]),
        entry("Ω", "pi", &[], &[]),
    ])
    .unwrap();
    let r = resolve("pi", &index);
    assert_eq!(r.primary, vec!["pi"]);
}

#[test]
fn name_beats_tag() {
    let index = SnippetIndex::build(vec![
        entry("π", "pi", &[], &[]),
        entry("Σ", "sigma", &["pi"], &[]),
    ])
    .unwrap();
    let r = resolve("pi", &index);
    assert_eq!(r.primary, vec!["π"]);
}

#[test]
fn tag_beats_char() {
    let index = SnippetIndex::build(vec![
        entry("α", "alpha", &["x"], &[]),
        entry("β", "beta", &[], &['x']),
    ])
    .unwrap();
    let r = resolve("x", &index);
    assert_eq!(r.primary, vec!["α"]);
}

#[test]
fn tag_scores_accumulate_and_rank_ascending() {
    let index = SnippetIndex::build(vec![
        entry("a", "first", &["x", "y"], &[]),
        entry("b", "second", &["x"], &[]),
    ])
    .unwrap();
    // "a" scores 2 (x and y), "b" scores 1. Ascending order puts "b" first.
    let r = resolve("x y", &index);
    assert_eq!(r.primary, vec!["b", "a"]);
    assert_eq!(r.shifted, vec!["B", "A"]);
}

#[test]
fn repeated_input_word_scores_once() {
    let index = SnippetIndex::build(vec![
        entry("a", "first", &["x", "y"], &[]),
        entry("b", "second", &["x"], &[]),
    ])
    .unwrap();
    // Repeating "x" must not lift "b"'s score to 2.
    let r = resolve("x x y", &index);
    assert_eq!(r.primary, vec!["b", "a"]);
}

#[test]
fn tag_tie_order_is_reproducible() {
    let index = SnippetIndex::build(vec![
        entry("zz", "zed", &["t"], &[]),
        entry("aa", "ay", &["t"], &[]),
    ])
    .unwrap();
    // Equal scores keep dictionary entry order, not name order.
    for _ in 0..20 {
        let r = resolve("t", &index);
        assert_eq!(r.primary, vec!["zz", "aa"]);
    }
}

#[test]
fn char_match_consumes_each_character_once() {
    let index = SnippetIndex::build(vec![
        entry("first", "one", &[], &['a']),
        entry("second", "two", &[], &['a', 'b']),
    ])
    .unwrap();
    // 'a' contributes once despite appearing four times; 'b' once.
    // "first" scores 1, "second" scores 2, ascending puts "first" first.
    let r = resolve("aa ab a", &index);
    assert_eq!(r.primary, vec!["first", "second"]);

    // A single entry keyed on a repeated character still yields one candidate.
    let r = resolve("aa aa", &index);
    assert_eq!(r.primary.len(), 2);
}

#[test]
fn consumed_character_cannot_outscore_a_fresh_one() {
    let index = SnippetIndex::build(vec![
        entry("first", "one", &[], &['a']),
        entry("second", "two", &[], &['b']),
    ])
    .unwrap();
    // 'a' recurs but contributes once, so both entries score 1 and the tie
    // keeps first-scored order. Counting every occurrence would score
    // "first" 2 and sort it after "second".
    let r = resolve("aa b", &index);
    assert_eq!(r.primary, vec!["first", "second"]);
}

#[test]
fn no_match_is_empty_not_error() {
    let index = make_index();
    let r = resolve("qqq", &index);
    assert!(r.is_empty());
    assert!(r.shifted.is_empty());
}

#[test]
fn result_capped_at_max_matches() {
    let entries: Vec<SnippetEntry> = (0..15)
        .map(|i| entry(&format!("w{i}"), &format!("name{i}"), &["t"], &[]))
        .collect();
    let index = SnippetIndex::build(entries).unwrap();
    let r = resolve("t", &index);
    assert_eq!(r.len(), MAX_MATCHES);
    assert_eq!(r.shifted.len(), MAX_MATCHES);
}

#[test]
fn leading_uppercase_input_uppercases_primary() {
    let index = make_index();
    let r = resolve("PI", &index);
    assert_eq!(r.primary, vec!["Π"]);
    assert_eq!(r.shifted, vec!["Π"]);
}

#[test]
fn all_lowercase_input_lowercases_primary() {
    let index = SnippetIndex::build(vec![entry("Pi", "ratio", &[], &[])]).unwrap();
    let r = resolve("ratio", &index);
    assert_eq!(r.primary, vec!["pi"]);
    assert_eq!(r.shifted, vec!["PI"]);
}

#[test]
fn mixed_case_input_preserves_stored_case() {
    let index = SnippetIndex::build(vec![entry("Pi", "ratio", &[], &[])]).unwrap();
    let r = resolve("raTio", &index);
    assert_eq!(r.primary, vec!["Pi"]);
    assert_eq!(r.shifted, vec!["PI"]);
}

#[test]
fn leading_whitespace_downgrades_leading_upper() {
    // Classification runs on the untrimmed input: "  PI" is Mixed, so the
    // stored case survives even though the trimmed text starts uppercase.
    let index = SnippetIndex::build(vec![entry("Pi", "pi", &[], &[])]).unwrap();
    let r = resolve("  PI", &index);
    assert_eq!(r.primary, vec!["Pi"]);
}

#[test]
fn case_adaptation_applies_to_every_ranked_candidate() {
    let index = SnippetIndex::build(vec![
        entry("Alpha", "a", &["t"], &[]),
        entry("Beta", "b", &["t"], &[]),
    ])
    .unwrap();
    let r = resolve("T", &index);
    assert_eq!(r.primary, vec!["ALPHA", "BETA"]);
    assert_eq!(r.shifted, vec!["ALPHA", "BETA"]);
}
