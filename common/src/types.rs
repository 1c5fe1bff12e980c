//! 分類結果の型定義
//!
//! CLIとライブラリで共有される型:
//! - ParsedName: 商品名パーサーの出力
//! - ProductClassification: テキスト分類の出力
//! - VisionClassificationResult: 画像分類（外部）の出力
//! - MergedClassification: 最終出力（テキスト+画像をマージ）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 未分類を表す衣類タイプ
pub const UNCLASSIFIED: &str = "기타";

/// サイズ不明時のフォールバック
pub const FREE_SIZE: &str = "FREE";

/// 性別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum Gender {
    Man,
    Woman,
    Kids,
    Unisex,
    #[default]
    Unknown,
}

impl Gender {
    /// 文字列から変換（大文字小文字を区別しない、不明値はUNKNOWN）
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "MAN" => Gender::Man,
            "WOMAN" => Gender::Woman,
            "KIDS" => Gender::Kids,
            "UNISEX" => Gender::Unisex,
            _ => Gender::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "MAN",
            Gender::Woman => "WOMAN",
            Gender::Kids => "KIDS",
            Gender::Unisex => "UNISEX",
            Gender::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Gender::Unknown
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Gender::parse(&value)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ブランドティア
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum BrandTier {
    Military,
    Workwear,
    Japan,
    Heritage,
    British,
    #[default]
    Other,
}

impl BrandTier {
    pub const ALL: [BrandTier; 6] = [
        BrandTier::Military,
        BrandTier::Workwear,
        BrandTier::Japan,
        BrandTier::Heritage,
        BrandTier::British,
        BrandTier::Other,
    ];

    /// 文字列から変換（不明値はOTHER）
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "MILITARY" => BrandTier::Military,
            "WORKWEAR" => BrandTier::Workwear,
            "JAPAN" => BrandTier::Japan,
            "HERITAGE" => BrandTier::Heritage,
            "BRITISH" => BrandTier::British,
            _ => BrandTier::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrandTier::Military => "MILITARY",
            BrandTier::Workwear => "WORKWEAR",
            BrandTier::Japan => "JAPAN",
            BrandTier::Heritage => "HERITAGE",
            BrandTier::British => "BRITISH",
            BrandTier::Other => "OTHER",
        }
    }
}

impl From<String> for BrandTier {
    fn from(value: String) -> Self {
        BrandTier::parse(&value)
    }
}

impl fmt::Display for BrandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 画像解析の進行状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionStatus {
    #[default]
    None,
    Pending,
    Processing,
    Completed,
    Failed,
}

impl VisionStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" => Some(VisionStatus::None),
            "pending" => Some(VisionStatus::Pending),
            "processing" => Some(VisionStatus::Processing),
            "completed" => Some(VisionStatus::Completed),
            "failed" => Some(VisionStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisionStatus::None => "none",
            VisionStatus::Pending => "pending",
            VisionStatus::Processing => "processing",
            VisionStatus::Completed => "completed",
            VisionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for VisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 商品名パース結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedName {
    pub brand: String,
    pub brand_korean: String,
    pub description: String,
    pub gender: Gender,
    pub size: String,
}

/// テキスト分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductClassification {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub brand_tier: BrandTier,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub size: String,
    #[serde(default = "unclassified")]
    pub clothing_type: String,
    #[serde(default = "unclassified")]
    pub clothing_sub_type: String,
    /// 0-100
    #[serde(default)]
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_naver_category: Option<String>,
    #[serde(default)]
    pub classified_at: String,
}

impl Default for ProductClassification {
    fn default() -> Self {
        Self {
            brand: String::new(),
            brand_tier: BrandTier::Other,
            gender: Gender::Unknown,
            size: String::new(),
            clothing_type: unclassified(),
            clothing_sub_type: unclassified(),
            confidence: 0,
            suggested_naver_category: None,
            classified_at: String::new(),
        }
    }
}

/// 画像分類結果（外部AIの出力）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisionClassificationResult {
    pub brand: String,
    /// 상의, 하의, 아우터, 원피스, 기타
    pub clothing_type: String,
    pub clothing_sub_type: String,
    /// MAN, WOMAN, UNISEX, UNKNOWN
    pub gender: String,
    pub size: String,
    /// S급, A급, B급
    pub grade: String,
    pub grade_reason: String,
    pub colors: Vec<String>,
    pub pattern: String,
    pub fabric: String,
    pub has_badge: bool,
    /// 0-100
    pub confidence: u8,
}

impl Default for VisionClassificationResult {
    fn default() -> Self {
        Self {
            brand: String::new(),
            clothing_type: unclassified(),
            clothing_sub_type: String::new(),
            gender: Gender::Unknown.as_str().to_string(),
            size: String::new(),
            grade: String::new(),
            grade_reason: String::new(),
            colors: Vec::new(),
            pattern: String::new(),
            fabric: String::new(),
            has_badge: false,
            confidence: 0,
        }
    }
}

/// マージ済み分類結果（永続化される最終出力）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedClassification {
    #[serde(flatten)]
    pub classification: ProductClassification,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_clothing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_fabric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_confidence: Option<u8>,

    #[serde(default)]
    pub vision_status: VisionStatus,
    /// 0-100
    #[serde(default)]
    pub merged_confidence: u8,
}

fn unclassified() -> String {
    UNCLASSIFIED.to_string()
}
