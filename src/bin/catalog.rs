use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use fossil_globe::core::catalog::{normalize_image_paths, DEFAULT_SEARCH_LIMIT};
use fossil_globe::domain::ports::Storage;
use fossil_globe::utils::logger;
use fossil_globe::{Catalog, CoordinateResolver, LocalStorage};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse and repair the extinct species catalog")]
struct Args {
    /// Species content file
    #[arg(long, default_value = "src/data/species.json")]
    species_file: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List periods, oldest first
    Periods,
    /// List the species of one period
    List { period: String },
    /// Show one species and where it was found
    Show { id: String },
    /// Search names, scientific names and periods
    Search {
        term: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Strip leading slashes from image paths and rewrite the file
    FixPaths,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let storage = LocalStorage::new("");
    let data = storage
        .read_file(&args.species_file)
        .await
        .with_context(|| format!("reading {}", args.species_file))?;
    let catalog = Catalog::from_json(&data)
        .with_context(|| format!("parsing {}", args.species_file))?;

    match args.command {
        Command::Periods => {
            for period in catalog.periods() {
                let count = catalog.by_period(period).count();
                println!("{:<14} {:>3} species", period, count);
            }
        }
        Command::List { period } => {
            let mut found = false;
            for species in catalog.by_period(&period) {
                found = true;
                println!("{:<24} {}", species.id, species.name);
            }
            if !found {
                bail!("no species recorded for period '{}'", period);
            }
        }
        Command::Show { id } => {
            let Some(species) = catalog.find(&id) else {
                bail!("species '{}' not found", id);
            };
            println!("{} ({})", species.name, species.scientific_name);
            println!("  Period:   {}", species.period);
            if let Some(location) = species.location_text() {
                println!("  Found at: {}", location);
            }
            match CoordinateResolver::curated().resolve(species) {
                Some(coordinate) => {
                    println!("  Globe:    {:.2}, {:.2}", coordinate.lat(), coordinate.lng())
                }
                None => println!("  Globe:    not shown (no known discovery site)"),
            }
            println!(
                "  3D model: {}",
                if species.is_model_tagged() { "yes" } else { "no" }
            );
            for image in &species.images {
                println!("  Image:    {}", image);
            }
        }
        Command::Search { term, limit } => {
            let hits = catalog.search(&term, limit);
            if hits.is_empty() {
                println!("No species match '{}'", term);
            }
            for species in hits {
                println!("{:<24} {} [{}]", species.id, species.name, species.period);
            }
        }
        Command::FixPaths => {
            let mut species: serde_json::Value = serde_json::from_slice(&data)
                .with_context(|| format!("parsing {}", args.species_file))?;
            let changed = normalize_image_paths(&mut species);
            let json = serde_json::to_vec_pretty(&species)?;
            storage.write_file(&args.species_file, &json).await?;
            tracing::info!("Rewrote {}", args.species_file);
            println!("Fixed {} image paths - removed leading slashes", changed);
        }
    }

    Ok(())
}
