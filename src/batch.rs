//! 一括分類
//!
//! 入力JSON配列の各商品を独立に分類する。出力順は入力順と同じ。

use crate::error::{read_json_file, FusionError, Result};
use fusion_common::{
    ClassificationLog, ClassificationStats, MergedClassification, ProductClassifier,
    VisionClassificationResult, VisionStatus,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 入力1件
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(deserialize_with = "string_or_number")]
    pub product_no: String,
    pub product_name: String,
    #[serde(default)]
    pub vision: Option<VisionClassificationResult>,
    #[serde(default)]
    pub vision_status: Option<VisionStatus>,
}

impl BatchItem {
    /// 状態が省略されていれば、画像結果の有無から決める
    pub fn effective_status(&self) -> VisionStatus {
        match (self.vision_status, &self.vision) {
            (Some(status), _) => status,
            (None, Some(_)) => VisionStatus::Completed,
            (None, None) => VisionStatus::None,
        }
    }
}

/// 出力1件
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecord {
    pub product_no: String,
    pub product_name: String,
    #[serde(flatten)]
    pub result: MergedClassification,
}

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub output: PathBuf,
    pub stats: ClassificationStats,
}

/// 商品番号は文字列・数値のどちらでも受け付ける
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "productNo must be a string or number, got {}",
            other
        ))),
    }
}

/// 出力先のデフォルト: `<入力ファイル名>.classified.json`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "products".to_string());
    input.with_file_name(format!("{}.classified.json", stem))
}

/// 商品を分類する（並列時も入力順を保つ）
pub fn classify_items(
    classifier: &ProductClassifier,
    items: &[BatchItem],
    parallel: bool,
    progress: Option<&ProgressBar>,
) -> Vec<BatchRecord> {
    let classify_one = |item: &BatchItem| {
        let status = item.effective_status();
        let result = classifier.classify(&item.product_name, item.vision.as_ref(), status);
        debug!(product_no = %item.product_no, confidence = result.merged_confidence, "分類");
        if let Some(pb) = progress {
            pb.inc(1);
        }
        BatchRecord {
            product_no: item.product_no.clone(),
            product_name: item.product_name.clone(),
            result,
        }
    };

    if parallel {
        items.par_iter().map(classify_one).collect()
    } else {
        items.iter().map(classify_one).collect()
    }
}

/// 分類結果の集計
pub fn summarize(records: &[BatchRecord]) -> ClassificationStats {
    let mut log = ClassificationLog::with_capacity(records.len());
    for record in records {
        log.record(&record.product_no, &record.product_name, record.result.clone());
    }
    log.stats()
}

/// 入力ファイルを読み、分類結果を書き出す
pub fn run_batch(
    input: &Path,
    output: Option<&Path>,
    classifier: &ProductClassifier,
    parallel: bool,
    show_progress: bool,
) -> Result<BatchSummary> {
    let items: Vec<BatchItem> = read_json_file(input)?;
    if items.is_empty() {
        return Err(FusionError::InvalidInput(format!(
            "商品がありません: {}",
            input.display()
        )));
    }
    info!(count = items.len(), parallel, "一括分類開始");

    let progress = show_progress.then(|| {
        let pb = ProgressBar::new(items.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    });

    let records = classify_items(classifier, &items, parallel, progress.as_ref());
    if let Some(pb) = &progress {
        pb.finish_with_message("完了");
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(&output, json)?;
    info!(output = %output.display(), "一括分類完了");

    Ok(BatchSummary {
        output,
        stats: summarize(&records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_numeric_product_no() {
        let items: Vec<BatchItem> = serde_json::from_str(
            r#"[{"productNo": 12345, "productName": "CARHARTT 자켓"},
                {"productNo": "A-1", "productName": "셔츠", "visionStatus": "pending"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].product_no, "12345");
        assert_eq!(items[0].effective_status(), VisionStatus::None);
        assert_eq!(items[1].effective_status(), VisionStatus::Pending);
    }

    #[test]
    fn test_item_vision_implies_completed() {
        let item: BatchItem = serde_json::from_str(
            r#"{"productNo": "1", "productName": "x", "vision": {"brand": "CARHARTT", "confidence": 80}}"#,
        )
        .unwrap();
        assert_eq!(item.effective_status(), VisionStatus::Completed);
    }

    #[test]
    fn test_item_rejects_bool_product_no() {
        let result = serde_json::from_str::<BatchItem>(r#"{"productNo": true, "productName": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("/tmp/products.json"));
        assert_eq!(path, PathBuf::from("/tmp/products.classified.json"));
    }

    #[test]
    fn test_parallel_preserves_order() {
        let items: Vec<BatchItem> = (0..200)
            .map(|i| BatchItem {
                product_no: i.to_string(),
                product_name: format!("CARHARTT 칼하트 자켓 MAN-{}", i),
                vision: None,
                vision_status: None,
            })
            .collect();
        let classifier = ProductClassifier::default();

        let parallel = classify_items(&classifier, &items, true, None);
        let sequential = classify_items(&classifier, &items, false, None);

        let numbers: Vec<&str> = parallel.iter().map(|r| r.product_no.as_str()).collect();
        let expected: Vec<String> = (0..200).map(|i| i.to_string()).collect();
        assert_eq!(numbers, expected);
        for (p, s) in parallel.iter().zip(&sequential) {
            assert_eq!(p.result.merged_confidence, s.result.merged_confidence);
            assert_eq!(p.result.classification.size, s.result.classification.size);
        }
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = BatchRecord {
            product_no: "7".to_string(),
            product_name: "x".to_string(),
            result: MergedClassification::default(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["productNo"], "7");
        assert_eq!(json["brandTier"], "OTHER");
        assert_eq!(json["visionStatus"], "none");
        assert_eq!(json["mergedConfidence"], 0);
    }
}
