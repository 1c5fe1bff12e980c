use clap::Parser;
use fusion_classify::{batch, cli, config, error, logging};
use cli::{Cli, Commands};
use config::Config;
use error::{read_json_file, Result};
use fusion_common::{
    classify_archive, lookup_brand, lookup_brand_fuzzy, parse_product_name, BrandRegistry,
    ProductClassifier, VisionClassificationResult, VisionStatus,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Parse { title } => {
            print_json(&parse_product_name(&title))?;
        }

        Commands::Brand { name, fuzzy } => {
            let result = if fuzzy {
                lookup_brand_fuzzy(&name)
            } else {
                lookup_brand(&name)
            };
            print_json(&result)?;
        }

        Commands::Brands { tier } => {
            let registry = BrandRegistry::builtin();
            let records: Vec<_> = match tier {
                Some(tier) => registry.by_tier(tier),
                None => registry.iter().collect(),
            };
            for record in &records {
                println!(
                    "{:<24} {:<10} {:<12} {}",
                    record.canonical,
                    record.tier.as_str(),
                    record.origin,
                    record.aliases.join(", ")
                );
            }
            println!("\n{}件", records.len());
        }

        Commands::Classify { title, vision, vision_status, custom_brands } => {
            let custom_brands = config.load_custom_brands(custom_brands.as_deref())?;
            let vision: Option<VisionClassificationResult> = match vision {
                Some(path) => Some(read_json_file(&path)?),
                None => None,
            };
            let status = vision_status.unwrap_or(if vision.is_some() {
                VisionStatus::Completed
            } else {
                VisionStatus::None
            });

            let classifier = ProductClassifier::new(custom_brands);
            let result = classifier.classify(&title, vision.as_ref(), status);
            print_json(&result)?;
            eprintln!(
                "信頼度: {} ({})",
                result.merged_confidence,
                config.confidence_label(result.merged_confidence)
            );
        }

        Commands::Batch { input, output, custom_brands, sequential } => {
            println!("👕 fusion-classify - 一括分類\n");

            let custom_brands = config.load_custom_brands(custom_brands.as_deref())?;
            if !custom_brands.is_empty() {
                println!("- カスタムブランド: {}件", custom_brands.len());
            }
            let classifier = ProductClassifier::new(custom_brands);
            let parallel = config.parallel && !sequential;

            let summary = batch::run_batch(&input, output.as_deref(), &classifier, parallel, true)?;
            let stats = &summary.stats;

            println!("\n✔ 結果を保存: {}", summary.output.display());
            println!("\n集計:");
            println!("  件数: {}", stats.total);
            println!("  平均信頼度: {}", stats.avg_confidence);
            println!("  低信頼度(<40): {}", stats.low_confidence);
            println!("  衣類タイプ: {}", format_counts(&stats.by_type));
            println!("  ティア: {}", format_counts(&stats.by_tier));
            println!("  性別: {}", format_counts(&stats.by_gender));
            println!("\n✅ 完了");
        }

        Commands::Archive { title, labels } => {
            print_json(&classify_archive(&title, &labels))?;
        }

        Commands::Config { set_custom_brands, show } => {
            let mut config = config;

            if let Some(path) = set_custom_brands {
                config.set_custom_brands_path(path)?;
                println!("✔ カスタムブランドファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!(
                    "  カスタムブランド: {}",
                    config
                        .custom_brands_path(None)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
                println!("  低信頼度の閾値: {}", config.low_confidence_threshold);
                println!("  高信頼度の閾値: {}", config.high_confidence_threshold);
                println!("  並列実行: {}", if config.parallel { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_counts(counts: &std::collections::BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
