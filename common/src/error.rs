//! エラー型定義
//!
//! 分類処理そのものは失敗しない。カスタムブランド表の読み込みなど
//! 外部入力を扱う箇所のみがこのエラーを返す。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("カスタムブランドファイルの読み込みに失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("カスタムブランドJSONが不正: {0}")]
    Json(#[from] serde_json::Error),

    /// 登録内容として受け付けられないカスタムブランド
    #[error("カスタムブランドが不正 ({brand_name:?}): {reason}")]
    InvalidCustomBrand { brand_name: String, reason: String },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "brands.json");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("読み込みに失敗"));
        assert!(display.contains("brands.json"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSONが不正"));
    }

    #[test]
    fn test_error_display_invalid_custom_brand() {
        let error = Error::InvalidCustomBrand {
            brand_name: "  ".to_string(),
            reason: "brand_name が空です".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "カスタムブランドが不正 (\"  \"): brand_name が空です"
        );
    }
}
