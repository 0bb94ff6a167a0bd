use anyhow::Context;
use clap::{Parser, Subcommand};
use geobucket::{Bucketer, Config, bucket_for, bucket_geojson_file};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bucket for two corner geohashes (one code for a point)
    Path {
        code_a: String,
        code_b: Option<String>,
    },
    /// Bucket every feature in a GeoJSON file and print the counts
    Report {
        file: PathBuf,

        /// Geohash precision used for both corners
        #[arg(short, long)]
        depth: Option<usize>,

        /// JSON or TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        max_features: Option<usize>,

        /// Bucket features on all cores
        #[arg(long)]
        parallel: bool,

        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the geohash and bucket of a longitude/latitude pair
    Encode {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        #[arg(short, long, default_value_t = 5)]
        depth: usize,
    },
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let is_toml = path.extension().is_some_and(|ext| ext == "toml");

    if is_toml {
        return parse_toml(&text);
    }
    Config::from_json(&text).context("parsing JSON config")
}

#[cfg(feature = "toml")]
fn parse_toml(text: &str) -> anyhow::Result<Config> {
    Config::from_toml(text).context("parsing TOML config")
}

#[cfg(not(feature = "toml"))]
fn parse_toml(_text: &str) -> anyhow::Result<Config> {
    anyhow::bail!("TOML configuration requires the `toml` feature")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("geobucket=info"))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Path { code_a, code_b } => {
            let code_b = code_b.as_deref().unwrap_or(&code_a);
            let bucket = bucket_for(&code_a, code_b);
            debug!("{:?}", bucket);
            println!("{}", bucket);
        }
        Command::Report {
            file,
            depth,
            config,
            max_features,
            parallel,
            json,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => Config::default(),
            };
            if let Some(depth) = depth {
                config = config.with_precision(depth);
            }
            if let Some(max_features) = max_features {
                config = config.with_max_features(max_features);
            }
            if parallel {
                config = config.with_parallel(true);
            }
            info!("Depth: {}", config.precision);

            let stats = bucket_geojson_file(&file, &config)
                .with_context(|| format!("bucketing {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats.to_report())?);
            } else {
                print!("{}", stats.report());
            }
        }
        Command::Encode { lon, lat, depth } => {
            let bucketer = Bucketer::new(depth)?;
            let hash = bucketer.encode(&geo::coord! { x: lon, y: lat })?;
            println!("{}", hash);
            println!("{}", bucket_for(&hash, &hash));
        }
    }

    Ok(())
}
