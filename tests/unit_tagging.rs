// Unit tests for rule-based tagging.
//
// Tests the built-in rule set against representative keyword fields,
// idempotence, missing fields, and tag counting across a dataset.

use jobscope::dataset::{Dataset, KeywordField, Record};
use jobscope::tagging::rules::{Rule, RuleSet};
use jobscope::tagging::tagger::{matching_tags, tag_dataset, tag_string};

fn text(s: &str) -> KeywordField {
    KeywordField::Text(s.to_string())
}

// ============================================================
// tag_string: built-in rules
// ============================================================

#[test]
fn counseling_keywords_match_three_rules_in_order() {
    let tags = tag_string(&RuleSet::default(), &text("상담, 안내, 사무"));
    assert_eq!(tags, "#저강도_신체활동, #실내근무, #사회활동성");
}

#[test]
fn patrol_keywords_match_high_intensity_outdoor_independent() {
    let tags = tag_string(&RuleSet::default(), &text("순찰, 주차 관리"));
    assert_eq!(tags, "#고강도_신체활동, #실외근무, #독립적업무");
}

#[test]
fn trigger_matches_inside_longer_keyword() {
    // "환경미화원" contains both "미화" and "환경미화"
    let tags = tag_string(&RuleSet::default(), &text("환경미화원"));
    assert_eq!(tags, "#고강도_신체활동, #실외근무");
}

#[test]
fn trigger_may_span_separator() {
    // Containment runs over the raw text, so "교통 안내" matches across tokens
    let rules = RuleSet::default();
    let matched = matching_tags(&rules, &text("교통, 교통 안내"));
    assert!(matched.contains(&"#실외근무"));
}

#[test]
fn missing_field_never_errors() {
    assert_eq!(tag_string(&RuleSet::default(), &KeywordField::Missing), "");
}

#[test]
fn tagging_is_idempotent() {
    let rules = RuleSet::default();
    let field = text("돌봄, 교육, 매장 정리");
    let first = tag_string(&rules, &field);
    let second = tag_string(&rules, &field);
    assert_eq!(first, second);
    assert_eq!(
        first,
        "#고강도_신체활동, #실내근무, #사회활동성, #독립적업무"
    );
}

// ============================================================
// Custom rules
// ============================================================

#[test]
fn custom_rules_keep_declaration_order() {
    let rules = RuleSet::new(vec![
        Rule::new("#second", &["b"]),
        Rule::new("#first", &["a"]),
    ])
    .unwrap();
    assert_eq!(tag_string(&rules, &text("a, b")), "#second, #first");
}

#[test]
fn dataset_tags_agree_with_tag_string() {
    let rules = RuleSet::default();
    let dataset = Dataset::from_records(vec![
        Record::with_keywords("환경미화원", "환경미화원, 거리 청소"),
        Record::with_keywords("안내원", "교통 안내, 관람"),
        Record::with_keywords("", "단순 포장"),
    ]);
    let report = tag_dataset(&dataset, &rules);
    for (record, tagged) in dataset.records().iter().zip(&report.records) {
        assert_eq!(tagged.tags, tag_string(&rules, &record.keywords));
    }
}

// ============================================================
// tag_dataset: counts
// ============================================================

#[test]
fn tag_dataset_counts_each_rule() {
    let dataset = Dataset::from_records(vec![
        Record::with_keywords("상담원", "상담, 안내"),
        Record::with_keywords("경비원", "순찰, 보안"),
        Record::with_keywords("개발자", "코딩"),
    ]);
    let report = tag_dataset(&dataset, &RuleSet::default());

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.untagged, 1);
    assert_eq!(report.records[2].tags, "");
    assert_eq!(report.tag_counts.len(), 6);
    assert_eq!(report.tag_counts[0], ("#저강도_신체활동".to_string(), 1));
    assert_eq!(report.tag_counts[5], ("#독립적업무".to_string(), 1));
}
