//! 分類マージ: テキスト + 画像 + 手動ブランド
//!
//! - 画像なし: テキスト結果をそのまま採用（手動ブランドがあれば上書き・+10）
//! - 画像あり: テキスト40% + 画像60% を基準に、ブランド・衣類タイプ・性別の
//!   一致状況で順に加点する
//! - 手動ブランドは常に最優先
//!
//! 加点は毎回 0-100 に丸めた累積値に対して順番に行うため、順序を変えると結果が変わる。

use crate::brand::lookup_brand;
use crate::custom_brand::CustomBrand;
use crate::types::{
    Gender, MergedClassification, ProductClassification, VisionClassificationResult,
    VisionStatus, BrandTier, FREE_SIZE, UNCLASSIFIED,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// テキストの重み（%）
pub const TEXT_WEIGHT: i32 = 40;
/// 画像の重み（%）
pub const VISION_WEIGHT: i32 = 60;

/// 手動ブランド採用時の加点
pub const CUSTOM_BRAND_BOOST: i32 = 10;
/// テキストと画像のブランド一致
pub const BRAND_AGREEMENT_BOOST: i32 = 15;
/// 衣類タイプ一致
pub const CLOTHING_TYPE_BOOST: i32 = 10;
/// 性別の補完または一致
pub const GENDER_BOOST: i32 = 5;

/// テキスト側で「未分類」とみなす衣類タイプ
const UNKNOWN_CLOTHING_TYPE: &str = "UNKNOWN";

/// 0-100 に収まる累積信頼度
#[derive(Debug, Clone, Copy)]
struct Score(i32);

impl Score {
    fn new(value: i32) -> Self {
        Score(value.clamp(0, 100))
    }

    fn boost(self, amount: i32) -> Self {
        Score::new(self.0 + amount)
    }

    fn value(self) -> u8 {
        // clamp済みなので u8 に収まる
        self.0 as u8
    }
}

/// テキスト・画像・手動ブランドをマージする（分類時刻は現在時刻）
///
/// 失敗しない。欠けている情報は空文字・UNKNOWN・`None` で表現される。
pub fn merge_classifications(
    text: &ProductClassification,
    vision: Option<&VisionClassificationResult>,
    custom_brand: Option<&CustomBrand>,
) -> MergedClassification {
    merge_classifications_at(text, vision, custom_brand, Utc::now())
}

/// 分類時刻を指定してマージする
///
/// 同じ入力・同じ時刻なら常に同じ結果を返す。
pub fn merge_classifications_at(
    text: &ProductClassification,
    vision: Option<&VisionClassificationResult>,
    custom_brand: Option<&CustomBrand>,
    now: DateTime<Utc>,
) -> MergedClassification {
    match vision {
        None => merge_text_only(text, custom_brand),
        Some(vision) => merge_with_vision(text, vision, custom_brand, now),
    }
}

/// 画像解析の状態を考慮してマージする
///
/// 画像結果は状態が `completed` のときだけ使う。それ以外（pending/processing/failed）は
/// 画像なしとして扱い、状態だけを結果に残す。
pub fn merge_with_status(
    text: &ProductClassification,
    vision: Option<&VisionClassificationResult>,
    status: VisionStatus,
    custom_brand: Option<&CustomBrand>,
) -> MergedClassification {
    match (status, vision) {
        (VisionStatus::Completed, Some(vision)) => {
            merge_classifications(text, Some(vision), custom_brand)
        }
        (VisionStatus::Completed, None) => merge_classifications(text, None, custom_brand),
        (status, _) => {
            let mut merged = merge_classifications(text, None, custom_brand);
            merged.vision_status = status;
            merged
        }
    }
}

/// Case A: 画像なし
fn merge_text_only(
    text: &ProductClassification,
    custom_brand: Option<&CustomBrand>,
) -> MergedClassification {
    let mut merged = MergedClassification {
        classification: text.clone(),
        vision_status: VisionStatus::None,
        merged_confidence: text.confidence.min(100),
        ..Default::default()
    };

    if let Some(custom) = custom_brand {
        merged.classification.brand = custom.brand_name.clone();
        merged.classification.brand_tier = custom.tier;
        merged.merged_confidence = Score::new(i32::from(text.confidence))
            .boost(CUSTOM_BRAND_BOOST)
            .value();
    }

    debug!(
        brand = %merged.classification.brand,
        custom_brand = custom_brand.is_some(),
        merged_confidence = merged.merged_confidence,
        "テキストのみでマージ"
    );

    merged
}

/// Case B: 画像あり
fn merge_with_vision(
    text: &ProductClassification,
    vision: &VisionClassificationResult,
    custom_brand: Option<&CustomBrand>,
    now: DateTime<Utc>,
) -> MergedClassification {
    let text_conf = i32::from(text.confidence);
    let vision_conf = i32::from(vision.confidence);

    // 1. 加重平均（四捨五入）
    let mut score = Score::new(weighted_base(text_conf, vision_conf));

    // 2. ブランド
    let (brand, brand_tier, brand_boost) = resolve_brand(text, vision, custom_brand);
    score = score.boost(brand_boost);

    // 3. 衣類タイプ
    let mut clothing_type = text.clothing_type.clone();
    let mut clothing_sub_type = text.clothing_sub_type.clone();
    if vision.clothing_type == text.clothing_type {
        score = score.boost(CLOTHING_TYPE_BOOST);
    } else if is_unclassified(&text.clothing_type) || vision_conf > text_conf {
        // テキストで分類できなかった、または画像の方が確信度が高い
        clothing_type = vision.clothing_type.clone();
        clothing_sub_type = vision.clothing_sub_type.clone();
    }

    // 4. 性別（商品名に明記されることが多いのでテキスト優先）
    let vision_gender = Gender::parse(&vision.gender);
    let mut gender = text.gender;
    if gender == Gender::Unknown && vision_gender.is_known() {
        gender = vision_gender;
        score = score.boost(GENDER_BOOST);
    } else if gender == vision_gender {
        score = score.boost(GENDER_BOOST);
    }

    // 5. サイズ
    let size = [text.size.as_str(), vision.size.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(FREE_SIZE)
        .to_string();

    let confidence = score.value();

    debug!(
        brand = %brand,
        tier = %brand_tier,
        text_confidence = text_conf,
        vision_confidence = vision_conf,
        merged_confidence = confidence,
        "テキストと画像をマージ"
    );

    MergedClassification {
        classification: ProductClassification {
            brand,
            brand_tier,
            gender,
            size,
            clothing_type,
            clothing_sub_type,
            confidence,
            suggested_naver_category: text.suggested_naver_category.clone(),
            classified_at: now.to_rfc3339(),
        },
        vision_brand: non_empty(&vision.brand),
        vision_clothing_type: non_empty(&vision.clothing_type),
        vision_grade: non_empty(&vision.grade),
        vision_colors: (!vision.colors.is_empty()).then(|| vision.colors.clone()),
        vision_pattern: non_empty(&vision.pattern),
        vision_fabric: non_empty(&vision.fabric),
        vision_confidence: Some(vision.confidence),
        vision_status: VisionStatus::Completed,
        merged_confidence: confidence,
    }
}

/// round(0.4 * text + 0.6 * vision)
///
/// 整数演算で計算する。4t + 6v は常に偶数なので .5 の端数は発生しない。
pub fn weighted_base(text_conf: i32, vision_conf: i32) -> i32 {
    (TEXT_WEIGHT * text_conf + VISION_WEIGHT * vision_conf + 50).div_euclid(100)
}

/// ブランド決定（手動 > 画像で補完 > テキスト）と加点
fn resolve_brand(
    text: &ProductClassification,
    vision: &VisionClassificationResult,
    custom_brand: Option<&CustomBrand>,
) -> (String, BrandTier, i32) {
    if let Some(custom) = custom_brand {
        return (custom.brand_name.clone(), custom.tier, CUSTOM_BRAND_BOOST);
    }

    let mut brand = text.brand.clone();
    let mut tier = text.brand_tier;
    let mut boost = 0;

    if !vision.brand.is_empty() {
        // ロゴ・タグから読んだブランドでテキストの不足を補う
        if text.brand.is_empty() || text.brand_tier == BrandTier::Other {
            brand = vision.brand.clone();
            tier = lookup_brand(&vision.brand).tier;
        }
        if text.brand.to_uppercase() == vision.brand.to_uppercase() {
            boost = BRAND_AGREEMENT_BOOST;
        }
    }

    (brand, tier, boost)
}

fn is_unclassified(clothing_type: &str) -> bool {
    clothing_type == UNCLASSIFIED || clothing_type == UNKNOWN_CLOTHING_TYPE
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
