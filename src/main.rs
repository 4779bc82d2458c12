//! wordnet-sap CLI: shortest ancestral paths and outcasts over a noun taxonomy.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;

use wordnet_sap::config::WordNetConfig;
use wordnet_sap::graph::Vertex;
use wordnet_sap::graph::io::{parse_digraph, parse_pairs};
use wordnet_sap::outcast::Outcast;
use wordnet_sap::sap::{AncestralPath, Sap, SapQuery, format_result};
use wordnet_sap::taxonomy::{Synset, WordNet};

#[derive(Parser)]
#[command(
    name = "wordnet-sap",
    version,
    about = "Shortest ancestral paths and outcasts over a hypernym taxonomy"
)]
struct Cli {
    /// TOML config file naming the taxonomy files.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Synset file (overrides the config).
    #[arg(long, global = true)]
    synsets: Option<PathBuf>,

    /// Hypernym file (overrides the config).
    #[arg(long, global = true)]
    hypernyms: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file with default settings.
    Init {
        /// Where to write the config.
        #[arg(default_value = "wordnet.toml")]
        path: PathBuf,
    },

    /// List every noun in the taxonomy.
    Nouns,

    /// Distance and common ancestor of two nouns.
    Distance {
        noun_a: String,
        noun_b: String,
    },

    /// Find the outcast in each file of whitespace-separated nouns.
    Outcast {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also print every noun's summed distance.
        #[arg(long)]
        scores: bool,
    },

    /// Answer vertex-pair queries from stdin against a digraph file.
    Sap {
        /// Digraph file: `V E v1 w1 v2 w2 ...`.
        graph: PathBuf,
    },

    /// Show taxonomy statistics.
    Info,
}

#[derive(Serialize)]
struct DistanceReport<'a> {
    noun_a: &'a str,
    noun_b: &'a str,
    distance: usize,
    ancestor: &'a Synset,
}

#[derive(Serialize)]
struct OutcastReport {
    file: String,
    outcast: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<(String, usize)>>,
}

#[derive(Serialize)]
struct PairReport {
    v: Vertex,
    w: Vertex,
    length: Option<usize>,
    ancestor: Option<Vertex>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WordNetConfig::load(path)?,
        None => WordNetConfig::default(),
    };
    if let Some(path) = cli.synsets.clone() {
        config.synsets = path;
    }
    if let Some(path) = cli.hypernyms.clone() {
        config.hypernyms = path;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Init { path } => {
            config.save(&path)?;
            println!("Wrote config to {}", path.display());
        }

        Commands::Nouns => {
            let wordnet = WordNet::from_config(&config)?;
            if cli.json {
                let nouns: Vec<&str> = wordnet.nouns().collect();
                print_json(&nouns)?;
            } else {
                for noun in wordnet.nouns() {
                    println!("{noun}");
                }
            }
        }

        Commands::Distance { noun_a, noun_b } => {
            let wordnet = WordNet::from_config(&config)?;
            let path = wordnet.path(&noun_a, &noun_b)?;
            let ancestor = wordnet
                .synset(path.ancestor)
                .ok_or_else(|| miette::miette!("ancestor {} has no synset", path.ancestor))?;
            if cli.json {
                print_json(&DistanceReport {
                    noun_a: &noun_a,
                    noun_b: &noun_b,
                    distance: path.distance,
                    ancestor,
                })?;
            } else {
                println!("length = {}", path.distance);
                println!("ancestor = {}", ancestor.label());
            }
        }

        Commands::Outcast { files, scores } => {
            let wordnet = WordNet::from_config(&config)?;
            let outcast = Outcast::new(&wordnet);
            let mut reports = Vec::with_capacity(files.len());

            for file in &files {
                let content = std::fs::read_to_string(file).into_diagnostic()?;
                let nouns: Vec<&str> = content.split_whitespace().collect();
                let (best, totals) = outcast.rank(&nouns)?;
                let winner = nouns[best].to_string();
                let totals = scores.then(|| {
                    nouns
                        .iter()
                        .map(|n| n.to_string())
                        .zip(totals)
                        .collect::<Vec<_>>()
                });

                if !cli.json {
                    println!("{}: {winner}", file.display());
                    for (noun, total) in totals.iter().flatten() {
                        println!("  {noun}: {total}");
                    }
                }
                reports.push(OutcastReport {
                    file: file.display().to_string(),
                    outcast: winner,
                    scores: totals,
                });
            }

            if cli.json {
                print_json(&reports)?;
            }
        }

        Commands::Sap { graph } => {
            let sap = Sap::new(load_digraph(&graph)?);
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()?;
            let pairs = parse_pairs(&input)?;

            let results: Vec<Option<AncestralPath>> = if config.parallel {
                let queries: Vec<SapQuery> = pairs.iter().copied().map(SapQuery::from).collect();
                sap.batch(&queries).into_iter().collect::<Result<_, _>>()?
            } else {
                pairs
                    .iter()
                    .map(|&(v, w)| sap.path([v], [w]))
                    .collect::<Result<_, _>>()?
            };

            if cli.json {
                let reports: Vec<PairReport> = pairs
                    .iter()
                    .zip(&results)
                    .map(|(&(v, w), result)| PairReport {
                        v,
                        w,
                        length: result.map(|p| p.distance),
                        ancestor: result.map(|p| p.ancestor),
                    })
                    .collect();
                print_json(&reports)?;
            } else {
                for result in &results {
                    println!("{}", format_result(*result));
                }
            }
        }

        Commands::Info => {
            let wordnet = WordNet::from_config(&config)?;
            let info = wordnet.info();
            if cli.json {
                print_json(&info)?;
            } else {
                print!("{info}");
            }
        }
    }

    Ok(())
}

fn load_digraph(path: &Path) -> Result<wordnet_sap::graph::Digraph> {
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read digraph {}", path.display()))?;
    Ok(parse_digraph(&text)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
