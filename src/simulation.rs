//! End-to-end simulation pipeline
//!
//! vocabulary -> embeddings -> similarity graph -> components -> indicator.
//! Every run recomputes everything from the configuration; a report is only
//! returned once every stage has completed.

use crate::algo;
use crate::config::SimulationConfig;
use crate::embed::{synthesize_embeddings, Embeddings};
use crate::error::{PercolationError, PercolationResult};
use crate::graph::{build_similarity_graph, SimilarityGraph};
use crate::percolation::GraphStats;
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Complete result of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub graph: SimilarityGraph,
    pub stats: GraphStats,
    /// Component sizes, largest first
    pub component_sizes: Vec<usize>,
}

/// Graph statistics at one threshold of a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub threshold: f64,
    pub edges: usize,
    pub density: f64,
    pub largest_component: usize,
    pub ratio: f64,
    pub is_percolating: bool,
}

/// A configured simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> PercolationResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The active vocabulary for this configuration
    pub fn vocabulary(&self) -> Vec<String> {
        vocabulary::vocabulary(self.config.effective_vocab_size())
    }

    /// Embeddings of the active vocabulary
    pub fn embeddings(&self) -> Embeddings {
        synthesize_embeddings(&self.vocabulary(), self.config.dimension, self.config.seed)
    }

    /// Run every stage and report the resulting graph
    pub fn run(&self) -> PercolationResult<SimulationReport> {
        let words = self.vocabulary();
        let embeddings = synthesize_embeddings(&words, self.config.dimension, self.config.seed);
        let (graph, stats, component_sizes) = analyze(&words, &embeddings, self.config.threshold)?;

        info!(
            "Simulation: {} words, {} edges, giant component {} ({}%), percolating: {}",
            stats.words,
            stats.edges,
            stats.largest_component,
            stats.indicator().percent(),
            stats.is_percolating
        );

        Ok(SimulationReport {
            config: self.config.clone(),
            graph,
            stats,
            component_sizes,
        })
    }

    /// Rebuild the graph at each threshold over one set of embeddings
    ///
    /// Embeddings do not depend on the threshold, so they are synthesized once.
    pub fn sweep(&self, thresholds: &[f64]) -> PercolationResult<Vec<SweepPoint>> {
        let words = self.vocabulary();
        let embeddings = synthesize_embeddings(&words, self.config.dimension, self.config.seed);

        thresholds
            .iter()
            .map(|&threshold| -> PercolationResult<SweepPoint> {
                let (_, stats, _) = analyze(&words, &embeddings, threshold)?;
                debug!(
                    "Sweep threshold {}: {} edges, ratio {}",
                    threshold, stats.edges, stats.ratio
                );
                Ok(SweepPoint {
                    threshold,
                    edges: stats.edges,
                    density: stats.density,
                    largest_component: stats.largest_component,
                    ratio: stats.ratio,
                    is_percolating: stats.is_percolating,
                })
            })
            .collect()
    }
}

fn analyze(
    words: &[String],
    embeddings: &Embeddings,
    threshold: f64,
) -> PercolationResult<(SimilarityGraph, GraphStats, Vec<usize>)> {
    let graph = build_similarity_graph(words, embeddings, threshold)?;
    let largest = algo::largest_component_size(&graph)?;
    let component_sizes = algo::component_sizes(&graph)?;
    let stats = GraphStats::new(&graph, largest, component_sizes.len());
    Ok((graph, stats, component_sizes))
}

/// Highest swept threshold at which the graph still percolates
pub fn critical_threshold(points: &[SweepPoint]) -> Option<f64> {
    points
        .iter()
        .filter(|p| p.is_percolating)
        .map(|p| p.threshold)
        .fold(None, |best: Option<f64>, t| Some(best.map_or(t, |b| b.max(t))))
}

/// Upper bound on the number of thresholds in one sweep
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Evenly spaced thresholds from `from` to `to` inclusive
///
/// Fails with `InvalidConfig` when the range would hold more than
/// [`MAX_SWEEP_POINTS`] thresholds.
pub fn threshold_range(from: f64, to: f64, step: f64) -> PercolationResult<Vec<f64>> {
    if !(step > 0.0) || !from.is_finite() || !to.is_finite() {
        return Err(PercolationError::InvalidConfig(format!(
            "invalid sweep range {}..={} step {}",
            from, to, step
        )));
    }
    if to < from {
        return Ok(Vec::new());
    }

    let steps = ((to - from) / step + 1e-9).floor();
    if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
        return Err(PercolationError::InvalidConfig(format!(
            "sweep range {}..={} step {} exceeds {} points",
            from, to, step, MAX_SWEEP_POINTS
        )));
    }

    let steps = steps as usize;
    Ok((0..=steps).map(|i| from + step * i as f64).collect())
}
