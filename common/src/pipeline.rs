//! 分類パイプライン
//!
//! テキスト分類 → カスタムブランド照合 → マージ の順に実行する。

use crate::custom_brand::CustomBrandStore;
use crate::merger::merge_with_status;
use crate::text_classifier::classify_product;
use crate::types::{MergedClassification, VisionClassificationResult, VisionStatus};
use tracing::debug;

/// 商品分類器
///
/// 状態はカスタムブランド表のみ。各商品の分類は互いに独立している。
#[derive(Debug, Clone, Default)]
pub struct ProductClassifier {
    custom_brands: CustomBrandStore,
}

impl ProductClassifier {
    pub fn new(custom_brands: CustomBrandStore) -> Self {
        Self { custom_brands }
    }

    pub fn custom_brands(&self) -> &CustomBrandStore {
        &self.custom_brands
    }

    /// 商品名と（あれば）画像解析結果から最終分類を作る
    pub fn classify(
        &self,
        product_name: &str,
        vision: Option<&VisionClassificationResult>,
        status: VisionStatus,
    ) -> MergedClassification {
        let text = classify_product(product_name);
        let usable_vision = vision.filter(|_| status == VisionStatus::Completed);
        let custom = self.custom_brands.resolve(&text, usable_vision);

        debug!(
            product_name,
            text_confidence = text.confidence,
            vision_status = %status,
            custom_brand = custom.map(|c| c.brand_name.as_str()),
            "分類開始"
        );

        let merged = merge_with_status(&text, vision, status, custom);

        debug!(
            brand = %merged.classification.brand,
            tier = %merged.classification.brand_tier,
            merged_confidence = merged.merged_confidence,
            "分類完了"
        );
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom_brand::CustomBrand;
    use crate::types::{BrandTier, Gender};

    fn vision(brand: &str, clothing_type: &str, sub_type: &str, confidence: u8) -> VisionClassificationResult {
        VisionClassificationResult {
            brand: brand.to_string(),
            clothing_type: clothing_type.to_string(),
            clothing_sub_type: sub_type.to_string(),
            gender: "MAN".to_string(),
            confidence,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_only() {
        let classifier = ProductClassifier::default();
        let result = classifier.classify("CARHARTT 칼하트 디트로이트 자켓 MAN-L", None, VisionStatus::None);

        assert_eq!(result.classification.brand, "CARHARTT");
        assert_eq!(result.classification.brand_tier, BrandTier::Workwear);
        assert_eq!(result.vision_status, VisionStatus::None);
        assert_eq!(result.merged_confidence, 100);
    }

    #[test]
    fn test_with_completed_vision() {
        let classifier = ProductClassifier::default();
        let v = vision("CARHARTT", "아우터", "자켓", 80);
        let result = classifier.classify("CARHARTT 칼하트 디트로이트 자켓 MAN-L", Some(&v), VisionStatus::Completed);

        assert_eq!(result.vision_status, VisionStatus::Completed);
        assert_eq!(result.classification.gender, Gender::Man);
        // 基準 (40*100 + 60*80)/100 = 88 → ブランド一致で 100 に張り付く
        assert_eq!(result.merged_confidence, 100);
        assert_eq!(result.vision_brand.as_deref(), Some("CARHARTT"));
    }

    #[test]
    fn test_pending_vision_is_ignored() {
        let classifier = ProductClassifier::default();
        let v = vision("GUCCI", "상의", "셔츠", 90);
        let result = classifier.classify("CARHARTT 칼하트 디트로이트 자켓 MAN-L", Some(&v), VisionStatus::Pending);

        assert_eq!(result.vision_status, VisionStatus::Pending);
        assert_eq!(result.classification.brand, "CARHARTT");
        assert_eq!(result.vision_brand, None);
    }

    #[test]
    fn test_custom_brand_wins() {
        let store = CustomBrandStore::new(vec![CustomBrand::new("CARHARTT", BrandTier::Japan)]).unwrap();
        let classifier = ProductClassifier::new(store);
        let result = classifier.classify("CARHARTT 칼하트 디트로이트 자켓 MAN-L", None, VisionStatus::None);

        assert_eq!(result.classification.brand, "CARHARTT");
        assert_eq!(result.classification.brand_tier, BrandTier::Japan);
        assert_eq!(result.merged_confidence, 100);
    }

    #[test]
    fn test_custom_brand_resolved_from_vision() {
        let store = CustomBrandStore::new(vec![CustomBrand::new("MY LABEL", BrandTier::Heritage)]).unwrap();
        let classifier = ProductClassifier::new(store);
        let v = vision("my label", "상의", "셔츠", 70);
        let result = classifier.classify("NOBRAND 체크 셔츠 WOMAN-M", Some(&v), VisionStatus::Completed);

        assert_eq!(result.classification.brand, "MY LABEL");
        assert_eq!(result.classification.brand_tier, BrandTier::Heritage);
    }
}
