//! 分類パイプラインの結合テスト

use fusion_common::merger::weighted_base;
use fusion_common::{
    classify_product, lookup_brand, merge_classifications, merge_classifications_at,
    parse_product_name, BrandTier, CustomBrand, Gender, ProductClassification,
    VisionClassificationResult,
};

fn vision(brand: &str, confidence: u8) -> VisionClassificationResult {
    VisionClassificationResult {
        brand: brand.to_string(),
        clothing_type: "아우터".to_string(),
        clothing_sub_type: "자켓".to_string(),
        gender: "MAN".to_string(),
        confidence,
        ..Default::default()
    }
}

#[test]
fn test_parse_examples() {
    let parsed = parse_product_name("CARHARTT 워크 자켓 WOMAN-M");
    assert_eq!(parsed.brand, "CARHARTT");
    assert_eq!(parsed.gender, Gender::Woman);
    assert_eq!(parsed.size, "M");

    let parsed = parse_product_name("나이키 후드티");
    assert_eq!(parsed.brand_korean, "나이키");
    assert_eq!(parsed.description, "후드티");
}

#[test]
fn test_registry_examples() {
    for name in ["polo ralph lauren", "RALPH LAUREN"] {
        let result = lookup_brand(name);
        assert_eq!(result.tier, BrandTier::Heritage);
        assert_eq!(result.canonical, "Polo Ralph Lauren");
    }

    let result = lookup_brand("NoSuchBrand123");
    assert_eq!(result.tier, BrandTier::Other);
    assert_eq!(result.canonical, "NoSuchBrand123");
}

#[test]
fn test_vision_fills_missing_brand() {
    let text = ProductClassification {
        confidence: 30,
        ..Default::default()
    };
    let v = VisionClassificationResult {
        brand: "CARHARTT".to_string(),
        confidence: 80,
        ..Default::default()
    };
    let merged = merge_classifications(&text, Some(&v), None);

    assert_eq!(merged.classification.brand, "CARHARTT");
    assert_eq!(merged.classification.brand_tier, BrandTier::Workwear);
    assert_eq!(weighted_base(30, 80), 60);
    assert!(merged.merged_confidence >= 60);
}

#[test]
fn test_text_and_vision_pipeline() {
    let text = classify_product("CARHARTT 칼하트 디트로이트 자켓 MAN-L");
    let merged = merge_classifications(&text, Some(&vision("carhartt", 40)), None);

    // 基準 (40*100 + 60*40)/100 = 64、ブランド一致+15・タイプ一致+10・性別一致+5
    assert_eq!(merged.merged_confidence, 94);
    assert_eq!(merged.classification.confidence, merged.merged_confidence);
    assert_eq!(merged.classification.brand, "CARHARTT");
    assert_eq!(merged.classification.size, "L");
    assert_eq!(
        merged.classification.suggested_naver_category.as_deref(),
        Some("패션의류 > 남성의류 > 자켓")
    );
}

#[test]
fn test_agreement_never_below_base() {
    for t in (0..=100).step_by(10) {
        for v in (0..=100).step_by(10) {
            let text = ProductClassification {
                brand: "CARHARTT".to_string(),
                brand_tier: BrandTier::Workwear,
                confidence: t,
                ..Default::default()
            };
            let merged = merge_classifications(&text, Some(&vision("CARHARTT", v)), None);
            let base = weighted_base(i32::from(t), i32::from(v));
            assert!(i32::from(merged.merged_confidence) >= base);
            assert!(merged.merged_confidence <= 100);
        }
    }
}

#[test]
fn test_custom_brand_always_decides() {
    let custom = CustomBrand::new("MY LABEL", BrandTier::Military);
    let text = classify_product("CARHARTT 칼하트 디트로이트 자켓 MAN-L");

    let without_vision = merge_classifications(&text, None, Some(&custom));
    let with_vision = merge_classifications(&text, Some(&vision("BEAMS", 90)), Some(&custom));

    for merged in [without_vision, with_vision] {
        assert_eq!(merged.classification.brand, "MY LABEL");
        assert_eq!(merged.classification.brand_tier, BrandTier::Military);
    }
}

#[test]
fn test_idempotent_with_fixed_time() {
    let now = chrono::Utc::now();
    let text = classify_product("NOBRAND 체크 셔츠 WOMAN-M");
    let v = vision("BEAMS", 55);

    let a = merge_classifications_at(&text, Some(&v), None, now);
    let b = merge_classifications_at(&text, Some(&v), None, now);
    assert_eq!(a, b);
}
