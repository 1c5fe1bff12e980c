//! カスタムブランド（オペレーター登録）
//!
//! 組み込みレジストリとは独立して読み込まれ、常にレジストリより優先される。
//! レジストリへは統合しない。

use crate::error::{Error, Result};
use crate::types::{BrandTier, ProductClassification, VisionClassificationResult};
use serde::{Deserialize, Serialize};

/// カスタムブランド1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomBrand {
    pub brand_name: String,
    pub brand_name_ko: Option<String>,
    pub tier: BrandTier,
    /// 別表記
    pub aliases: Vec<String>,
}

impl CustomBrand {
    pub fn new(brand_name: impl Into<String>, tier: BrandTier) -> Self {
        Self {
            brand_name: brand_name.into(),
            tier,
            ..Default::default()
        }
    }

    /// ブランド名・韓国語名・別表記のいずれかに一致するか（大文字小文字を区別しない）
    pub fn matches(&self, name: &str) -> bool {
        let key = name.trim().to_uppercase();
        if key.is_empty() {
            return false;
        }
        std::iter::once(self.brand_name.as_str())
            .chain(self.brand_name_ko.as_deref())
            .chain(self.aliases.iter().map(String::as_str))
            .any(|candidate| candidate.trim().to_uppercase() == key)
    }
}

/// カスタムブランド表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomBrandStore {
    brands: Vec<CustomBrand>,
}

impl CustomBrandStore {
    pub fn new(brands: Vec<CustomBrand>) -> Result<Self> {
        let mut store = Self::default();
        for brand in brands {
            store.upsert(brand)?;
        }
        Ok(store)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列（配列）から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let brands: Vec<CustomBrand> = serde_json::from_str(json)?;
        Self::new(brands)
    }

    /// 名前で検索（先に登録されたものを優先）
    pub fn find(&self, name: &str) -> Option<&CustomBrand> {
        self.brands.iter().find(|b| b.matches(name))
    }

    /// テキスト・画像結果に対応するカスタムブランドを探す
    ///
    /// 照合キーは画像のブランドがあればそれを、なければテキストのブランドを使う。
    pub fn resolve(
        &self,
        text: &ProductClassification,
        vision: Option<&VisionClassificationResult>,
    ) -> Option<&CustomBrand> {
        let key = vision
            .map(|v| v.brand.as_str())
            .filter(|b| !b.is_empty())
            .unwrap_or(text.brand.as_str());
        self.find(key)
    }

    /// 追加または同名のものを置き換え
    pub fn upsert(&mut self, brand: CustomBrand) -> Result<()> {
        if brand.brand_name.trim().is_empty() {
            return Err(Error::InvalidCustomBrand {
                brand_name: brand.brand_name,
                reason: "brand_name が空です".into(),
            });
        }

        let key = brand.brand_name.trim().to_uppercase();
        match self
            .brands
            .iter_mut()
            .find(|b| b.brand_name.trim().to_uppercase() == key)
        {
            Some(existing) => *existing = brand,
            None => self.brands.push(brand),
        }
        Ok(())
    }

    /// 削除（削除したらtrue）
    pub fn remove(&mut self, brand_name: &str) -> bool {
        let key = brand_name.trim().to_uppercase();
        let before = self.brands.len();
        self.brands.retain(|b| b.brand_name.trim().to_uppercase() != key);
        self.brands.len() != before
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomBrand> {
        self.brands.iter()
    }
}
