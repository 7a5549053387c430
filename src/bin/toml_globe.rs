use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use fossil_globe::core::sampler::daily_seed;
use fossil_globe::domain::ports::{ConfigProvider, Pipeline};
use fossil_globe::utils::error::ErrorSeverity;
use fossil_globe::utils::{logger, validation::Validate};
use fossil_globe::{CoordinateResolver, GlobeEngine, GlobePipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-globe")]
#[command(about = "Build the globe dataset from a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "globe-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the selection day (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Dry run - show what would be selected without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based globe build");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(date) = &args.date {
        config.selection.date = Some(date.clone());
        tracing::info!("🔧 Selection date overridden to: {}", date);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let storage = LocalStorage::new("");
    let pipeline = GlobePipeline::new(storage, config);

    display_config_summary(pipeline.config(), pipeline.selection_date(), &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        perform_dry_run(&pipeline).await?;
        return Ok(());
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = GlobeEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Globe dataset built successfully!");
            println!("✅ Globe dataset built successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Globe build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, date: NaiveDate, args: &Args) {
    let policy = config.selection_policy();

    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }
    println!("  Species file: {}", config.species_file());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!(
        "  Selection: up to {} species, {} with 3D model",
        policy.cap, policy.max_with_model
    );
    println!("  Day: {} ({} clock)", date, config.clock());

    if let Some(base_url) = config.image_base_url() {
        println!("  Image base URL: {}", base_url);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(pipeline: &GlobePipeline<LocalStorage, TomlConfig>) -> anyhow::Result<()> {
    let config = pipeline.config();
    let date = pipeline.selection_date();

    println!("🔍 Dry Run Analysis:");
    println!();

    let records = pipeline
        .extract()
        .await
        .with_context(|| format!("reading species from {}", config.species_file()))?;

    let resolver = CoordinateResolver::curated();
    let unresolved: Vec<&str> = records
        .iter()
        .filter(|record| resolver.resolve(record).is_none())
        .map(|record| record.id.as_str())
        .collect();

    println!("📡 Species Analysis:");
    println!("  Records: {}", records.len());
    println!("  With 3D model: {}", records.iter().filter(|r| r.is_model_tagged()).count());
    println!("  Without discovery site: {}", unresolved.len());
    for id in &unresolved {
        println!("    - {}", id);
    }

    let dataset = pipeline.transform(records).await?;

    println!();
    println!("🎯 Selection for {} (seed {}):", date, daily_seed(date));
    for point in &dataset.selection.entries {
        let marker = if point.record.is_model_tagged() { "🦴" } else { "  " };
        println!(
            "  {} {:<24} {:>8.2} {:>8.2}",
            marker,
            point.record.id,
            point.coordinate.lat(),
            point.coordinate.lng()
        );
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
