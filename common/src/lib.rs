//! Fusion Classify Common Library
//!
//! 商品名（テキスト）と画像解析結果を統合して衣類を分類する純粋ロジック

pub mod types;
pub mod error;
pub mod name_parser;
pub mod brand;
mod brand_data;
pub mod clothing;
pub mod naver_category;
pub mod text_classifier;
pub mod merger;
pub mod custom_brand;
pub mod archive;
pub mod log;
pub mod pipeline;

pub use types::{
    BrandTier, Gender, MergedClassification, ParsedName, ProductClassification,
    VisionClassificationResult, VisionStatus,
};
pub use error::{Error, Result};
pub use name_parser::parse_product_name;
pub use brand::{lookup_brand, lookup_brand_fuzzy, BrandLookup, BrandRecord, BrandRegistry};
pub use clothing::{match_clothing_type, ClothingMatch};
pub use naver_category::suggest_naver_category;
pub use text_classifier::classify_product;
pub use merger::{merge_classifications, merge_classifications_at, merge_with_status};
pub use custom_brand::{CustomBrand, CustomBrandStore};
pub use archive::{classify_archive, ArchiveCategory, ArchiveClassification};
pub use log::{ClassificationLog, ClassificationStats};
pub use pipeline::ProductClassifier;
