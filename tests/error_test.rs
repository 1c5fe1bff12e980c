//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use fusion_classify::batch;
use fusion_classify::config::Config;
use fusion_classify::error::FusionError;
use fusion_common::ProductClassifier;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力ファイルで一括分類した場合
#[test]
fn test_batch_nonexistent_input() {
    let classifier = ProductClassifier::default();
    let result = batch::run_batch(
        Path::new("/nonexistent/path/12345.json"),
        None,
        &classifier,
        false,
        false,
    );

    assert!(matches!(result, Err(FusionError::FileNotFound(_))));
}

/// 空配列を一括分類した場合
#[test]
fn test_batch_empty_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("empty.json");
    std::fs::write(&input, "[]").unwrap();

    let classifier = ProductClassifier::default();
    let result = batch::run_batch(&input, None, &classifier, false, false);
    assert!(matches!(result, Err(FusionError::InvalidInput(_))));
}

/// 壊れたJSONを一括分類した場合
#[test]
fn test_batch_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "[{\"productNo\": 1,").unwrap();

    let classifier = ProductClassifier::default();
    let result = batch::run_batch(&input, None, &classifier, false, false);
    assert!(matches!(result, Err(FusionError::Json(_))));
}

/// 存在しないカスタムブランドファイルを指定した場合
#[test]
fn test_missing_custom_brands_file() {
    let config = Config::default();
    let result = config.load_custom_brands(Some(Path::new("/nonexistent/brands.json")));
    assert!(matches!(result, Err(FusionError::FileNotFound(_))));
}

/// カスタムブランドに空の名前がある場合
#[test]
fn test_custom_brands_empty_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("brands.json");
    std::fs::write(&path, r#"[{"brand_name": "", "tier": "JAPAN"}]"#).unwrap();

    let result = Config::default().load_custom_brands(Some(&path));
    assert!(matches!(
        result,
        Err(FusionError::Common(fusion_common::Error::InvalidCustomBrand { .. }))
    ));
}

/// FusionErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FusionError::Config("テスト設定エラー".to_string()),
        FusionError::FileNotFound("products.json".to_string()),
        FusionError::InvalidInput("商品がありません".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FusionError = io_err.into();

    assert!(matches!(err, FusionError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = fusion_common::Error::InvalidCustomBrand {
        brand_name: String::new(),
        reason: "brand_name が空です".to_string(),
    };
    let err: FusionError = common_err.into();

    assert!(matches!(err, FusionError::Common(_)));
    assert_eq!(format!("{}", err), "カスタムブランドが不正 (\"\"): brand_name が空です");
}
