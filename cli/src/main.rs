//! Percolation CLI: command-line front end for the semantic percolation simulator
//!
//! Runs the simulation pipeline locally and prints the resulting graph
//! statistics as a table, JSON or CSV.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use semantic_percolation::{
    categorize, component_of, critical_threshold, threshold_range, vocabulary, SimilarityGraph,
    Simulation, SimulationConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "percolation", version, about = "Semantic percolation simulator")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Simulation parameters; flags override values from `--config`
#[derive(Args)]
struct SimArgs {
    /// YAML or JSON config file
    #[arg(long, env = "PERCOLATION_CONFIG")]
    config: Option<PathBuf>,

    /// Vocabulary size (capped at 250)
    #[arg(long)]
    vocab: Option<usize>,

    /// Embedding dimension
    #[arg(long)]
    dim: Option<usize>,

    /// Random seed
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Similarity threshold
    #[arg(long, allow_hyphen_values = true)]
    threshold: Option<f64>,
}

impl SimArgs {
    fn resolve(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(vocab) = self.vocab {
            config.vocab_size = vocab;
        }
        if let Some(dim) = self.dim {
            config.dimension = dim;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }

        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print the graph statistics
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Also list the words in the same cluster as this word
        #[arg(long)]
        focus: Option<String>,
    },
    /// Rebuild the graph over a range of thresholds
    Sweep {
        #[command(flatten)]
        sim: SimArgs,

        /// First threshold
        #[arg(long, default_value_t = 0.1, allow_hyphen_values = true)]
        from: f64,

        /// Last threshold (inclusive)
        #[arg(long, default_value_t = 0.9, allow_hyphen_values = true)]
        to: f64,

        /// Threshold increment
        #[arg(long, default_value_t = 0.05)]
        step: f64,
    },
    /// List the active vocabulary with each word's category
    Words {
        /// Vocabulary size (capped at 250)
        #[arg(long, default_value_t = 120)]
        vocab: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Run { sim, focus } => run_simulation(sim, focus.as_deref(), &cli.format),
        Commands::Sweep {
            sim,
            from,
            to,
            step,
        } => run_sweep(sim, *from, *to, *step, &cli.format),
        Commands::Words { vocab } => run_words(*vocab, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_simulation(sim: &SimArgs, focus: Option<&str>, format: &OutputFormat) -> anyhow::Result<()> {
    let config = sim.resolve()?;
    let report = Simulation::new(config)?.run()?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats = &report.stats;
    let columns = ["Words", "Edges", "Density", "Giant component", "Components", "Percolating"];
    let rows = vec![vec![
        stats.words.to_string(),
        stats.edges.to_string(),
        format!("{:.3}", stats.density),
        format!("{} ({}%)", stats.largest_component, stats.indicator().percent()),
        stats.component_count.to_string(),
        stats.is_percolating.to_string(),
    ]];
    print_rows(&columns, &rows, format);

    if let Some(word) = focus {
        for line in focus_summary(&report.graph, word)? {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Direct neighbors and full cluster of one word
fn focus_summary(graph: &SimilarityGraph, word: &str) -> anyhow::Result<Vec<String>> {
    let Some(cluster) = component_of(graph, word)? else {
        return Ok(vec![format!("\"{}\" is not in the active vocabulary", word)]);
    };

    let neighbors: Vec<&str> = graph.neighbors(word).collect();
    Ok(vec![
        format!("\"{}\" neighbors ({}): {}", word, neighbors.len(), neighbors.join(", ")),
        format!("\"{}\" cluster ({}): {}", word, cluster.len(), cluster.join(", ")),
    ])
}

fn run_sweep(
    sim: &SimArgs,
    from: f64,
    to: f64,
    step: f64,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let config = sim.resolve()?;
    let thresholds = threshold_range(from, to, step)?;
    let points = Simulation::new(config)?.sweep(&thresholds)?;
    let critical = critical_threshold(&points);

    if let OutputFormat::Json = format {
        let out = serde_json::json!({ "points": points, "critical_threshold": critical });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let columns = ["Threshold", "Edges", "Density", "Giant component", "Ratio", "Percolating"];
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                format!("{:.2}", p.threshold),
                p.edges.to_string(),
                format!("{:.3}", p.density),
                p.largest_component.to_string(),
                format!("{:.3}", p.ratio),
                p.is_percolating.to_string(),
            ]
        })
        .collect();
    print_rows(&columns, &rows, format);

    if let OutputFormat::Table = format {
        match critical {
            Some(t) => println!("Percolating up to threshold {:.2}", t),
            None => println!("No percolating threshold in range"),
        }
    }

    Ok(())
}

fn run_words(vocab: usize, format: &OutputFormat) -> anyhow::Result<()> {
    let words = vocabulary(vocab);

    if let OutputFormat::Json = format {
        let entries: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(idx, w)| serde_json::json!({ "id": w, "idx": idx, "category": categorize(w) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = words
        .iter()
        .enumerate()
        .map(|(idx, w)| vec![idx.to_string(), w.clone(), categorize(w).to_string()])
        .collect();
    print_rows(&["#", "Word", "Category"], &rows, format);

    Ok(())
}

fn print_rows(columns: &[&str], rows: &[Vec<String>], format: &OutputFormat) {
    match format {
        OutputFormat::Csv => {
            println!("{}", columns.join(","));
            for row in rows {
                let cells: Vec<String> = row.iter().map(|v| format_csv_value(v)).collect();
                println!("{}", cells.join(","));
            }
        }
        _ => {
            if rows.is_empty() {
                println!("(no results)");
                return;
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(columns);

            for row in rows {
                table.add_row(row);
            }

            println!("{}", table);
        }
    }
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
