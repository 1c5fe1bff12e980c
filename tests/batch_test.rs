//! 一括分類テスト
//!
//! 入力JSON → 分類 → 出力JSON の一連の流れを検証

use fusion_classify::batch::{self, default_output_path};
use fusion_common::{BrandTier, CustomBrand, CustomBrandStore, ProductClassifier};
use tempfile::tempdir;

const PRODUCTS_JSON: &str = r#"[
    {"productNo": 1001, "productName": "CARHARTT 칼하트 디트로이트 자켓 MAN-L"},
    {"productNo": "1002", "productName": "NOBRAND 체크 셔츠 WOMAN-M",
     "vision": {"brand": "BEAMS", "clothingType": "상의", "clothingSubType": "셔츠",
                "gender": "WOMAN", "confidence": 70, "colors": ["네이비"]}},
    {"productNo": 1003, "productName": "나이키 후드티",
     "vision": {"brand": "NIKE", "confidence": 90}, "visionStatus": "processing"}
]"#;

fn read_output(path: &std::path::Path) -> Vec<serde_json::Value> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_batch_writes_records_in_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("products.json");
    std::fs::write(&input, PRODUCTS_JSON).unwrap();

    let classifier = ProductClassifier::default();
    let summary = batch::run_batch(&input, None, &classifier, true, false).unwrap();

    assert_eq!(summary.output, default_output_path(&input));
    assert!(summary.output.exists());

    let records = read_output(&summary.output);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["productNo"], "1001");
    assert_eq!(records[1]["productNo"], "1002");
    assert_eq!(records[2]["productNo"], "1003");

    // テキストのみ
    assert_eq!(records[0]["brand"], "CARHARTT");
    assert_eq!(records[0]["brandTier"], "WORKWEAR");
    assert_eq!(records[0]["visionStatus"], "none");
    assert_eq!(records[0]["mergedConfidence"], 100);

    // 画像で OTHER のブランドを補完
    assert_eq!(records[1]["brand"], "BEAMS");
    assert_eq!(records[1]["brandTier"], "JAPAN");
    assert_eq!(records[1]["visionStatus"], "completed");
    assert_eq!(records[1]["visionColors"][0], "네이비");

    // 処理中の画像結果は使わない
    assert_eq!(records[2]["visionStatus"], "processing");
    assert_eq!(records[2]["brand"], "");
    assert!(records[2].get("visionBrand").is_none());
}

#[test]
fn test_batch_explicit_output_and_stats() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("products.json");
    let output = dir.path().join("out").join("result.json");
    std::fs::create_dir_all(output.parent().unwrap()).unwrap();
    std::fs::write(&input, PRODUCTS_JSON).unwrap();

    let classifier = ProductClassifier::default();
    let summary = batch::run_batch(&input, Some(&output), &classifier, false, false).unwrap();

    assert_eq!(summary.output, output);
    assert_eq!(summary.stats.total, 3);
    assert_eq!(summary.stats.by_tier.get("WORKWEAR"), Some(&1));
    assert_eq!(summary.stats.by_tier.get("JAPAN"), Some(&1));
    assert_eq!(summary.stats.by_tier.get("OTHER"), Some(&1));
}

#[test]
fn test_batch_with_custom_brand() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("products.json");
    std::fs::write(&input, PRODUCTS_JSON).unwrap();

    let store = CustomBrandStore::new(vec![
        CustomBrand::new("CARHARTT", BrandTier::British),
        CustomBrand::new("NOBRAND", BrandTier::British),
    ])
    .unwrap();
    let classifier = ProductClassifier::new(store);
    let summary = batch::run_batch(&input, None, &classifier, true, false).unwrap();

    let records = read_output(&summary.output);
    assert_eq!(records[0]["brand"], "CARHARTT");
    assert_eq!(records[0]["brandTier"], "BRITISH");

    // 照合キーは画像のブランド（BEAMS）なので NOBRAND は適用されない
    assert_eq!(records[1]["brand"], "BEAMS");
    assert_eq!(records[1]["brandTier"], "JAPAN");
}
