// Unit tests for keyword frequency analysis.
//
// Tests the stable counter's tie ordering and the dataset-level keyword and
// title word rankings.

use jobscope::dataset::{Dataset, Record};
use jobscope::keywords::counter::{most_common, FrequencyCounter};
use jobscope::keywords::frequency::{analyze, top_keywords, top_title_words, TOP_KEYWORDS};
use jobscope::output::truncate_chars;

fn dataset(rows: &[(&str, &str)]) -> Dataset {
    Dataset::from_records(
        rows.iter()
            .map(|(title, keywords)| Record::with_keywords(title, keywords))
            .collect(),
    )
}

// ============================================================
// most_common: ordering
// ============================================================

#[test]
fn most_common_descending_by_count() {
    let ranked = most_common(["a", "b", "b", "c", "c", "c"], 10);
    assert_eq!(ranked, vec![("c", 3), ("b", 2), ("a", 1)]);
}

#[test]
fn most_common_ties_in_first_seen_order() {
    let ranked = most_common(["y", "x", "z", "x", "y", "z"], 10);
    assert_eq!(ranked, vec![("y", 2), ("x", 2), ("z", 2)]);
}

#[test]
fn most_common_truncates() {
    let ranked = most_common(["a", "b", "c"], 2);
    assert_eq!(ranked.len(), 2);
    assert!(most_common(Vec::<&str>::new(), 5).is_empty());
}

#[test]
fn counter_tracks_totals() {
    let mut counter = FrequencyCounter::new();
    counter.add("상담".to_string());
    counter.add("상담".to_string());
    counter.add("안내".to_string());
    assert_eq!(counter.total(), 3);
    assert_eq!(counter.distinct(), 2);
}

// ============================================================
// Dataset-level rankings
// ============================================================

#[test]
fn b_ranks_above_a() {
    let data = dataset(&[("", "a, b"), ("", "a"), ("", "b, b")]);
    let top = top_keywords(&data, TOP_KEYWORDS);
    assert_eq!(top[0], ("b".to_string(), 3));
    assert_eq!(top[1], ("a".to_string(), 2));
}

#[test]
fn top_keywords_caps_at_twenty() {
    let keywords: Vec<String> = (0..30).map(|i| format!("kw{i}")).collect();
    let joined = keywords.join(", ");
    let data = dataset(&[("", joined.as_str())]);
    assert_eq!(top_keywords(&data, TOP_KEYWORDS).len(), 20);
}

#[test]
fn title_words_ignore_missing_titles() {
    let data = dataset(&[("주차 관리원", "주차"), ("", "순찰"), ("아파트 관리원", "경비")]);
    let top = top_title_words(&data, 10);
    assert_eq!(top[0], ("관리원".to_string(), 2));
    assert_eq!(top.iter().map(|(_, c)| c).sum::<usize>(), 4);
}

#[test]
fn analyze_is_pure() {
    let data = dataset(&[("경비원", "순찰, 보안")]);
    let first = analyze(&data, 20, 10);
    let second = analyze(&data, 20, 10);
    assert_eq!(first.top_keywords, second.top_keywords);
    assert_eq!(data.len(), 1);
}

// ============================================================
// truncate_chars: UTF-8 safety
// ============================================================

#[test]
fn truncate_respects_hangul_boundaries() {
    assert_eq!(truncate_chars("환경미화원", 2), "환경...");
    assert_eq!(truncate_chars("경비", 5), "경비");
}
