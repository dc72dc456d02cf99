use semantic_percolation::{
    component_of, critical_threshold, threshold_range, Simulation, SimulationConfig,
};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Semantic Percolation v{}", semantic_percolation::version());
    println!("==========================================");
    println!();

    // Demo 1: Default run
    demo_default_run();

    // Demo 2: Threshold sweep
    demo_threshold_sweep();
}

fn demo_default_run() {
    println!("=== Demo 1: Default Simulation ===");
    let config = SimulationConfig::default();
    println!(
        "Vocabulary {} words, {}D embeddings, seed {}, threshold {:.2}",
        config.vocab_size, config.dimension, config.seed, config.threshold
    );

    let report = match Simulation::new(config).and_then(|sim| sim.run()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation error: {}", e);
            return;
        }
    };

    let stats = &report.stats;
    println!("\nGraph Statistics:");
    println!("  Words:           {}", stats.words);
    println!("  Edges:           {}", stats.edges);
    println!("  Density:         {:.3}", stats.density);
    println!(
        "  Giant component: {} ({}%)",
        stats.largest_component,
        stats.indicator().percent()
    );
    println!("  Components:      {}", stats.component_count);

    if stats.is_percolating {
        println!("\n✓ Percolating: the giant component spans most of the vocabulary");
    } else {
        println!("\n✗ Not percolating: the graph is still fragmented");
    }

    if let Ok(Some(cluster)) = component_of(&report.graph, "dog") {
        let preview: Vec<&str> = cluster.iter().take(8).map(String::as_str).collect();
        println!("  \"dog\" cluster ({} words): {}", cluster.len(), preview.join(", "));
    }
}

fn demo_threshold_sweep() {
    println!("\n=== Demo 2: Threshold Sweep ===");
    let sim = match Simulation::new(SimulationConfig::default()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Simulation error: {}", e);
            return;
        }
    };

    let points = match threshold_range(0.1, 0.9, 0.05).and_then(|t| sim.sweep(&t)) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Sweep error: {}", e);
            return;
        }
    };

    for p in &points {
        let marker = if p.is_percolating { "✓" } else { "✗" };
        println!(
            "  threshold={:.2}  edges={:5}  giant={:3} ({:3.0}%) {}",
            p.threshold,
            p.edges,
            p.largest_component,
            p.ratio * 100.0,
            marker
        );
    }

    match critical_threshold(&points) {
        Some(t) => println!("\n✓ Percolation holds up to threshold {:.2}", t),
        None => println!("\nNo percolating threshold in range"),
    }
}
