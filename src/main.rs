use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use vermouth::config::Config;
use vermouth::{Serializer, Version};

#[derive(Parser)]
#[command(name = "vermouth")]
#[command(version, about = "Parse, compare and serialize semantic versions")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of a version
    Parse {
        version: String,
        /// Print all fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print -1, 0 or 1 depending on the precedence of A relative to B
    Compare { a: String, b: String },
    /// Print versions in ascending precedence
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print or write the properties form of a version
    Properties {
        version: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the properties as a JSON object
        #[arg(long, conflicts_with = "output")]
        json: bool,
    },
    /// Read a version from a properties file
    Load {
        /// Defaults to the configured properties file
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let _guard = vermouth::logging::init(&config.log).context("Failed to initialize logging")?;

    match cli.command {
        Command::Parse { version, json } => {
            let version = Version::parse(&version);
            if json {
                let value = json!({
                    "version": version,
                    "major": version.major(),
                    "minor": version.minor(),
                    "patch": version.patch(),
                    "qualifier": version.qualifier(),
                    "metadata": version.metadata(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{version}");
            }
        }
        Command::Compare { a, b } => {
            let ordering = Version::parse(&a).compare(b.as_str());
            let result = match ordering {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{result}");
        }
        Command::Sort { versions } => {
            let mut versions: Vec<Version> = versions.iter().map(|v| Version::parse(v)).collect();
            versions.sort_by(Version::cmp_precedence);
            for version in versions {
                println!("{version}");
            }
        }
        Command::Properties {
            version,
            output,
            json,
        } => {
            let version = Version::parse(&version);
            let serializer = Serializer::new();
            if let Some(path) = output {
                serializer.serialize_to_file(&version, &path)?;
            } else if json {
                let properties = serializer.properties(&version);
                println!("{}", serde_json::to_string_pretty(&properties)?);
            } else {
                print!("{}", serializer.serialize(&version));
            }
        }
        Command::Load { file } => {
            let path = file.unwrap_or(config.properties_file);
            let version = vermouth::Parser::new()
                .parse_file(&path)
                .with_context(|| format!("Failed to load version from {}", path.display()))?;
            println!("{version}");
        }
    }

    Ok(())
}
