//! 分類ログ
//!
//! 直近の分類結果をメモリ上に保持する。容量を超えたら古いものから捨てる。

use crate::types::MergedClassification;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

pub const DEFAULT_LOG_CAPACITY: usize = 5000;

/// 低信頼度とみなす閾値（未満）
pub const LOW_CONFIDENCE_THRESHOLD: u8 = 40;

/// ログ1件
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationLogEntry {
    pub product_no: String,
    pub product_name: String,
    pub result: MergedClassification,
    pub timestamp: String,
}

/// 集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationStats {
    pub total: usize,
    pub avg_confidence: u8,
    pub by_type: BTreeMap<String, usize>,
    pub by_tier: BTreeMap<String, usize>,
    pub by_gender: BTreeMap<String, usize>,
    pub low_confidence: usize,
}

#[derive(Debug, Clone)]
pub struct ClassificationLog {
    entries: VecDeque<ClassificationLogEntry>,
    capacity: usize,
}

impl Default for ClassificationLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl ClassificationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn record(
        &mut self,
        product_no: impl Into<String>,
        product_name: impl Into<String>,
        result: MergedClassification,
    ) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ClassificationLogEntry {
            product_no: product_no.into(),
            product_name: product_name.into(),
            result,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 古い順
    pub fn entries(&self) -> impl Iterator<Item = &ClassificationLogEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> ClassificationStats {
        let mut stats = ClassificationStats {
            total: self.entries.len(),
            ..Default::default()
        };
        if self.entries.is_empty() {
            return stats;
        }

        let mut sum: u64 = 0;
        for entry in &self.entries {
            let r = &entry.result;
            // 手動ブランドの加点を含まない分類結果の信頼度
            let confidence = r.classification.confidence;
            sum += u64::from(confidence);

            *stats
                .by_type
                .entry(r.classification.clothing_type.clone())
                .or_default() += 1;
            *stats
                .by_tier
                .entry(r.classification.brand_tier.to_string())
                .or_default() += 1;
            *stats
                .by_gender
                .entry(r.classification.gender.to_string())
                .or_default() += 1;

            if confidence < LOW_CONFIDENCE_THRESHOLD {
                stats.low_confidence += 1;
            }
        }

        let total = stats.total as u64;
        stats.avg_confidence = ((sum + total / 2) / total) as u8;
        stats
    }
}
