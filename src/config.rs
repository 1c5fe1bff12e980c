use crate::error::{FusionError, Result};
use fusion_common::CustomBrandStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カスタムブランド表のパスを上書きする環境変数
pub const CUSTOM_BRANDS_ENV: &str = "FUSION_CUSTOM_BRANDS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub custom_brands_path: Option<PathBuf>,
    /// これ未満は要確認として表示
    pub low_confidence_threshold: u8,
    /// これ以上は自動確定として表示
    pub high_confidence_threshold: u8,
    /// バッチを並列実行する
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            custom_brands_path: None,
            low_confidence_threshold: 40,
            high_confidence_threshold: 70,
            parallel: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FusionError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fusion-classify").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.low_confidence_threshold > self.high_confidence_threshold {
            return Err(FusionError::Config(format!(
                "low_confidence_threshold ({}) が high_confidence_threshold ({}) を超えています",
                self.low_confidence_threshold, self.high_confidence_threshold
            )));
        }
        if self.high_confidence_threshold > 100 {
            return Err(FusionError::Config("閾値は0-100で指定してください".into()));
        }
        Ok(())
    }

    /// カスタムブランド表のパス（コマンド引数 > 環境変数 > 設定ファイル）
    pub fn custom_brands_path(&self, arg: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = arg {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CUSTOM_BRANDS_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        self.custom_brands_path.clone()
    }

    /// カスタムブランド表を読み込む（未設定なら空）
    pub fn load_custom_brands(&self, arg: Option<&Path>) -> Result<CustomBrandStore> {
        match self.custom_brands_path(arg) {
            Some(path) => {
                if !path.exists() {
                    return Err(FusionError::FileNotFound(path.display().to_string()));
                }
                let store = CustomBrandStore::from_file(&path)?;
                tracing::info!(path = %path.display(), count = store.len(), "カスタムブランド読み込み");
                Ok(store)
            }
            None => Ok(CustomBrandStore::default()),
        }
    }

    pub fn set_custom_brands_path(&mut self, path: PathBuf) -> Result<()> {
        self.custom_brands_path = Some(path);
        self.save()
    }

    /// 信頼度の表示ラベル
    pub fn confidence_label(&self, confidence: u8) -> &'static str {
        if confidence >= self.high_confidence_threshold {
            "確定"
        } else if confidence < self.low_confidence_threshold {
            "要確認"
        } else {
            "保留"
        }
    }
}
