//! Fusion Classify CLI
//!
//! 共通ライブラリの分類ロジックをコマンドラインから使うための層

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
