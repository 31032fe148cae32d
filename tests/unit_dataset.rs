// Unit tests for dataset loading.
//
// Exercises the file-level loader: missing files, CP949 and UTF-8 inputs,
// missing columns, and rows dropped for lacking keywords. Fixtures are
// written to the system temp directory.

use std::fs;
use std::path::PathBuf;

use encoding_rs::EUC_KR;
use jobscope::dataset::{load_dataset, load_or_empty, LoadError, LoadOptions, SourceEncoding};

fn fixture(name: &str, bytes: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join("jobscope-tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

const SAMPLE_CSV: &str = "Title_ko,keywords_bert\n\
아파트 경비원,\"순찰, 보안, 주차 관리\"\n\
행정 사무보조,\"사무, 상담, 안내\"\n\
급식 보조,\n";

// ============================================================
// Failure kinds
// ============================================================

#[test]
fn missing_file_is_not_found() {
    let path = std::env::temp_dir().join("jobscope-tests/does-not-exist.csv");
    let err = load_dataset(&path, LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn missing_file_degrades_to_empty_dataset() {
    let path = std::env::temp_dir().join("jobscope-tests/also-missing.csv");
    let (dataset, error) = load_or_empty(&path, LoadOptions::default());
    assert!(dataset.is_empty());
    assert!(matches!(error, Some(LoadError::NotFound(_))));
}

#[test]
fn undecodable_file_is_decode_error() {
    let path = fixture("garbage.csv", &[0xFF, 0xFE, 0xFF, 0x00, 0xFF]);
    let err = load_dataset(&path, LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
}

#[test]
fn missing_keyword_column_yields_no_records() {
    let path = fixture("no-keywords.csv", b"Title_ko,region\nguard,seoul\n");
    let (dataset, error) = load_or_empty(&path, LoadOptions::default());
    assert_eq!(dataset.len(), 0);
    assert!(matches!(error, Some(LoadError::MissingColumn { .. })));
}

#[test]
fn all_empty_keywords_yield_no_records() {
    let path = fixture("empty-keywords.csv", b"Title_ko,keywords_bert\nguard,\ncook,\n");
    let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.summary().rows_read, 2);
    assert_eq!(dataset.summary().rows_dropped, 2);
}

// ============================================================
// Encodings
// ============================================================

#[test]
fn cp949_file_loads_as_primary_encoding() {
    let (bytes, _, had_errors) = EUC_KR.encode(SAMPLE_CSV);
    assert!(!had_errors);
    let path = fixture("cp949.csv", &bytes);

    let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
    assert_eq!(dataset.summary().encoding, SourceEncoding::Cp949.label());
    assert_eq!(dataset.len(), 2);
    assert_eq!(
        dataset.records()[0].keyword_list,
        vec!["순찰", "보안", "주차 관리"]
    );
    assert_eq!(dataset.records()[1].title.as_deref(), Some("행정 사무보조"));
}

#[test]
fn utf8_with_bom_loads_as_utf8() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SAMPLE_CSV.as_bytes());
    let path = fixture("utf8-bom.csv", &bytes);

    let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
    assert_eq!(dataset.summary().encoding, "utf-8");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[1].keyword_list, vec!["사무", "상담", "안내"]);
}

#[test]
fn utf8_without_bom_falls_back() {
    // The euro sign's UTF-8 bytes are not a valid CP949 sequence
    let csv = "Title_ko,keywords_bert\nshop,\"€ pricing, sales\"\n";
    let path = fixture("utf8-fallback.csv", csv.as_bytes());

    let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
    assert_eq!(dataset.summary().encoding, "utf-8");
    assert_eq!(dataset.records()[0].keyword_list, vec!["€ pricing", "sales"]);
}

#[test]
fn utf8_hangul_without_bom_falls_back() {
    // UTF-8 Hangul is three bytes per syllable and not valid CP949
    let csv = "Title_ko,keywords_bert\n경비원,\"순찰, 보안, 주차 관리\"\n";
    let path = fixture("utf8-hangul.csv", csv.as_bytes());

    let dataset = load_dataset(&path, LoadOptions::default()).unwrap();
    assert_eq!(dataset.summary().encoding, "utf-8");
    assert_eq!(dataset.records()[0].title.as_deref(), Some("경비원"));
    assert_eq!(
        dataset.records()[0].keyword_list,
        vec!["순찰", "보안", "주차 관리"]
    );
}

// ============================================================
// Column options
// ============================================================

#[test]
fn custom_column_names() {
    let path = fixture("custom-columns.csv", b"job,tags\ndriver,\"delivery, driving\"\n");
    let options = LoadOptions {
        keyword_column: "tags",
        title_column: "job",
    };
    let dataset = load_dataset(&path, options).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].title.as_deref(), Some("driver"));
    assert_eq!(dataset.records()[0].keyword_list.len(), 2);
}
