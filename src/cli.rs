use clap::{Parser, Subcommand};
use fusion_common::{BrandTier, VisionStatus};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fusion-classify")]
#[command(about = "中古衣類の商品名・画像解析結果を統合して分類するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品名をブランド・説明・性別・サイズに分解
    Parse {
        /// 商品名
        #[arg(required = true)]
        title: String,
    },

    /// ブランドのティアを照会
    Brand {
        /// ブランド名
        #[arg(required = true)]
        name: String,

        /// 部分一致で照会（商品名の断片など）
        #[arg(long)]
        fuzzy: bool,
    },

    /// 登録ブランド一覧
    Brands {
        /// ティアで絞り込み (MILITARY/WORKWEAR/JAPAN/HERITAGE/BRITISH/OTHER)
        #[arg(short, long, value_parser = parse_tier)]
        tier: Option<BrandTier>,
    },

    /// 1商品を分類
    Classify {
        /// 商品名
        #[arg(required = true)]
        title: String,

        /// 画像解析結果JSONファイル
        #[arg(long)]
        vision: Option<PathBuf>,

        /// 画像解析の状態 (none/pending/processing/completed/failed)
        /// 省略時は --vision があれば completed
        #[arg(long, value_parser = parse_vision_status)]
        vision_status: Option<VisionStatus>,

        /// カスタムブランドJSONファイル
        #[arg(long)]
        custom_brands: Option<PathBuf>,
    },

    /// JSON配列の商品を一括分類
    Batch {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力ファイル名.classified.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// カスタムブランドJSONファイル
        #[arg(long)]
        custom_brands: Option<PathBuf>,

        /// 並列実行しない
        #[arg(long)]
        sequential: bool,
    },

    /// アーカイブカテゴリを判定
    Archive {
        /// 商品名
        #[arg(required = true)]
        title: String,

        /// 画像ラベル（複数指定可）
        #[arg(short, long = "label")]
        labels: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// カスタムブランドJSONファイルのパスを設定
        #[arg(long)]
        set_custom_brands: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// ティア名（大文字小文字を区別しない）。未知の値はエラー
pub fn parse_tier(s: &str) -> Result<BrandTier, String> {
    BrandTier::ALL
        .into_iter()
        .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| {
            format!(
                "Unknown tier: {}. Use MILITARY, WORKWEAR, JAPAN, HERITAGE, BRITISH, or OTHER",
                s
            )
        })
}

pub fn parse_vision_status(s: &str) -> Result<VisionStatus, String> {
    VisionStatus::parse(s).ok_or_else(|| {
        format!(
            "Unknown vision status: {}. Use none, pending, processing, completed, or failed",
            s
        )
    })
}
