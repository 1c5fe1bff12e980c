//! テキスト分類
//!
//! 商品名だけから ProductClassification を組み立てる。
//! パース → ブランドティア照会 → 衣類タイプ判定 → ネイバーカテゴリ推薦 → 信頼度算出

use crate::brand::lookup_brand_fuzzy;
use crate::clothing::{match_clothing_type, ClothingMatch};
use crate::name_parser::parse_product_name;
use crate::naver_category::suggest_naver_category;
use crate::types::{BrandTier, ParsedName, ProductClassification, UNCLASSIFIED};

/// ブランドあり
const BRAND_PRESENT_SCORE: u8 = 15;
/// ブランドがレジストリのティアに該当
const BRAND_TIER_SCORE: u8 = 15;
const GENDER_SCORE: u8 = 15;
const SIZE_SCORE: u8 = 10;
const CLOTHING_TYPE_SCORE: u8 = 15;
const CLOTHING_SUB_TYPE_SCORE: u8 = 15;
const CATEGORY_SCORE: u8 = 15;

/// 商品名を分類する
pub fn classify_product(product_name: &str) -> ProductClassification {
    let parsed = parse_product_name(product_name);
    let tier = lookup_brand_fuzzy(&parsed.brand).tier;
    let clothing = match_clothing_type(&parsed.description);
    let naver_category = suggest_naver_category(clothing.sub_type, parsed.gender);
    let confidence = calculate_confidence(&parsed, tier, &clothing, naver_category.is_some());

    ProductClassification {
        brand: parsed.brand,
        brand_tier: tier,
        gender: parsed.gender,
        size: parsed.size,
        clothing_type: clothing.clothing_type.to_string(),
        clothing_sub_type: clothing.sub_type.to_string(),
        confidence,
        suggested_naver_category: naver_category,
        classified_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// 信頼度（0-100）
///
/// ブランド30 + 性別15 + サイズ10 + 衣類タイプ30 + カテゴリ15
pub fn calculate_confidence(
    parsed: &ParsedName,
    tier: BrandTier,
    clothing: &ClothingMatch,
    has_category: bool,
) -> u8 {
    let mut score = 0;

    if !parsed.brand.is_empty() && parsed.brand != "UNKNOWN" {
        score += BRAND_PRESENT_SCORE;
        if tier != BrandTier::Other {
            score += BRAND_TIER_SCORE;
        }
    }

    if parsed.gender.is_known() {
        score += GENDER_SCORE;
    }

    if !parsed.size.is_empty() {
        score += SIZE_SCORE;
    }

    if clothing.clothing_type != UNCLASSIFIED {
        score += CLOTHING_TYPE_SCORE;
        if clothing.sub_type != UNCLASSIFIED {
            score += CLOTHING_SUB_TYPE_SCORE;
        }
    }

    if has_category {
        score += CATEGORY_SCORE;
    }

    score.min(100)
}
