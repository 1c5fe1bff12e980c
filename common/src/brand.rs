//! ブランドレジストリ
//!
//! 正規ブランド名・エイリアスからティアを引く不変テーブル。
//! 起動時に一度だけ構築され、以降は読み取り専用で共有される。
//! オペレーターが登録するカスタムブランドはここには混ぜない（`custom_brand` を参照）。

use crate::brand_data::BUILTIN_BRANDS;
use crate::types::BrandTier;
use serde::Serialize;
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref BUILTIN_REGISTRY: BrandRegistry = BrandRegistry::from_records(BUILTIN_BRANDS);
}

/// 組み込みブランド1件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandRecord {
    /// 正規キー（大文字）
    pub key: &'static str,
    /// 表示名
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub tier: BrandTier,
    pub origin: &'static str,
}

/// ブランド照会結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandLookup {
    pub tier: BrandTier,
    /// 一致時は表示名、不一致時は入力値（trim済み、大小文字そのまま）
    pub canonical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<&'static BrandRecord>,
}

impl BrandLookup {
    fn unmatched(raw: &str) -> Self {
        Self {
            tier: BrandTier::Other,
            canonical: raw.trim().to_string(),
            info: None,
        }
    }

    fn matched(record: &'static BrandRecord) -> Self {
        Self {
            tier: record.tier,
            canonical: record.canonical.to_string(),
            info: Some(record),
        }
    }

    pub fn is_known(&self) -> bool {
        self.info.is_some()
    }
}

/// ブランドレジストリ
#[derive(Debug)]
pub struct BrandRegistry {
    records: &'static [BrandRecord],
    /// 正規キー・表示名 → レコード
    canonical_index: HashMap<String, usize>,
    /// エイリアス → レコード
    alias_index: HashMap<String, usize>,
    /// 部分一致用のキー（長い順）
    fuzzy_keys: Vec<String>,
}

impl BrandRegistry {
    /// レコード列からインデックスを構築
    pub fn from_records(records: &'static [BrandRecord]) -> Self {
        let mut canonical_index = HashMap::new();
        let mut alias_index = HashMap::new();
        let mut fuzzy_keys = Vec::new();

        for (i, record) in records.iter().enumerate() {
            for name in [record.key, record.canonical] {
                let normalized = normalize(name);
                if canonical_index.insert(normalized.clone(), i).is_none() {
                    fuzzy_keys.push(normalized);
                }
            }
            for alias in record.aliases {
                let normalized = normalize(alias);
                // 重複エイリアスは後のレコードで上書き
                alias_index.insert(normalized.clone(), i);
                fuzzy_keys.push(normalized);
            }
        }

        // 長いキーから照合する（POLO RALPH LAUREN > POLO）
        fuzzy_keys.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        Self {
            records,
            canonical_index,
            alias_index,
            fuzzy_keys,
        }
    }

    /// 組み込みレジストリ
    pub fn builtin() -> &'static BrandRegistry {
        &BUILTIN_REGISTRY
    }

    /// 完全一致（大文字小文字を区別しない）で照会
    ///
    /// 正規名を先に、次にエイリアスを照合する。見つからなければ
    /// ティアOTHER・入力値そのままを返す。
    pub fn lookup(&self, raw: &str) -> BrandLookup {
        match self.find_exact(raw) {
            Some(record) => BrandLookup::matched(record),
            None => BrandLookup::unmatched(raw),
        }
    }

    /// 完全一致に失敗した場合、入力に含まれる最長のキーで照会
    ///
    /// キーは単語境界で一致している必要がある（"LEE" は "LEEDS" に一致しない）。
    pub fn lookup_fuzzy(&self, raw: &str) -> BrandLookup {
        if let Some(record) = self.find_exact(raw) {
            return BrandLookup::matched(record);
        }

        let normalized = normalize(raw);
        if normalized.is_empty() {
            return BrandLookup::unmatched(raw);
        }

        self.fuzzy_keys
            .iter()
            .find(|key| contains_on_boundary(&normalized, key))
            .and_then(|key| self.find_exact(key))
            .map(BrandLookup::matched)
            .unwrap_or_else(|| BrandLookup::unmatched(raw))
    }

    fn find_exact(&self, raw: &str) -> Option<&'static BrandRecord> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        let records = self.records;
        self.canonical_index
            .get(&normalized)
            .or_else(|| self.alias_index.get(&normalized))
            .map(|&i| &records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static BrandRecord> {
        self.records.iter()
    }

    /// ティアで絞り込み
    pub fn by_tier(&self, tier: BrandTier) -> Vec<&'static BrandRecord> {
        self.records.iter().filter(|r| r.tier == tier).collect()
    }
}

/// 組み込みレジストリで完全一致照会
pub fn lookup_brand(raw: &str) -> BrandLookup {
    BrandRegistry::builtin().lookup(raw)
}

/// 組み込みレジストリで部分一致を含めて照会
pub fn lookup_brand_fuzzy(raw: &str) -> BrandLookup {
    BrandRegistry::builtin().lookup_fuzzy(raw)
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

fn contains_on_boundary(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_canonical_case_insensitive() {
        let result = lookup_brand("polo ralph lauren");
        assert_eq!(result.tier, BrandTier::Heritage);
        assert_eq!(result.canonical, "Polo Ralph Lauren");
    }

    #[test]
    fn test_lookup_alias() {
        let result = lookup_brand("RALPH LAUREN");
        assert_eq!(result.tier, BrandTier::Heritage);
        assert_eq!(result.canonical, "Polo Ralph Lauren");

        let result = lookup_brand("칼하트");
        assert_eq!(result.tier, BrandTier::Workwear);
        assert_eq!(result.canonical, "Carhartt");
    }

    #[test]
    fn test_lookup_display_name() {
        let result = lookup_brand("Saint Laurent");
        assert_eq!(result.canonical, "Saint Laurent");
        assert_eq!(result.tier, BrandTier::Heritage);
    }

    #[test]
    fn test_lookup_unknown_keeps_input() {
        let result = lookup_brand("  NoSuchBrand123 ");
        assert_eq!(result.tier, BrandTier::Other);
        assert_eq!(result.canonical, "NoSuchBrand123");
        assert!(!result.is_known());
    }

    #[test]
    fn test_lookup_empty() {
        let result = lookup_brand("");
        assert_eq!(result.tier, BrandTier::Other);
        assert_eq!(result.canonical, "");
    }

    #[test]
    fn test_canonical_key_beats_alias() {
        // BEAUTY&YOUTH は United Arrows のエイリアスでもある
        let result = lookup_brand("beauty&youth");
        assert_eq!(result.canonical, "Beauty & Youth");
    }

    #[test]
    fn test_duplicate_alias_later_record_wins() {
        let result = lookup_brand("UA");
        assert_eq!(result.canonical, "Under Armour");
    }

    #[test]
    fn test_exact_lookup_does_not_match_substring() {
        let result = lookup_brand("POLO RALPH LAUREN BIG PONY");
        assert_eq!(result.tier, BrandTier::Other);
    }

    #[test]
    fn test_fuzzy_longest_key_wins() {
        let result = lookup_brand_fuzzy("POLO RALPH LAUREN BIG PONY");
        assert_eq!(result.canonical, "Polo Ralph Lauren");

        let result = lookup_brand_fuzzy("vintage carhartt wip");
        assert_eq!(result.canonical, "Carhartt");
    }

    #[test]
    fn test_fuzzy_requires_word_boundary() {
        let result = lookup_brand_fuzzy("LEEDS");
        assert_eq!(result.tier, BrandTier::Other);
        assert_eq!(result.canonical, "LEEDS");

        let result = lookup_brand_fuzzy("NoSuchBrand123");
        assert!(!result.is_known());
    }

    #[test]
    fn test_registry_by_tier() {
        let registry = BrandRegistry::builtin();
        assert!(registry.len() >= 150);
        let military = registry.by_tier(BrandTier::Military);
        assert!(military.iter().any(|r| r.canonical == "Alpha Industries"));
        assert!(military.iter().all(|r| r.tier == BrandTier::Military));
    }

    #[test]
    fn test_custom_records() {
        static RECORDS: &[BrandRecord] = &[BrandRecord {
            key: "TEST",
            canonical: "Test",
            aliases: &["테스트"],
            tier: BrandTier::Japan,
            origin: "Japan",
        }];
        let registry = BrandRegistry::from_records(RECORDS);
        assert_eq!(registry.lookup("테스트").tier, BrandTier::Japan);
        assert_eq!(registry.lookup("GUCCI").tier, BrandTier::Other);
    }

    #[test]
    fn test_lookup_serialize() {
        let json = serde_json::to_string(&lookup_brand("NoSuchBrand123")).unwrap();
        assert_eq!(json, r#"{"tier":"OTHER","canonical":"NoSuchBrand123"}"#);
    }
}
