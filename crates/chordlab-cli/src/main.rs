//! chordlab-cli: Run a chord-generation experiment and persist the result

use std::path::PathBuf;

use anyhow::Context;
use chordlab_core::{ChordGenerator, Scale, ScaleKind};
use chordlab_services::{persist, Experiment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chordlab=debug".parse().unwrap()),
        )
        .init();

    // Destination root for persisted experiments; never hardcoded
    let data_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("DATA"));

    let scale = Scale::from_kind(ScaleKind::Major, 0);
    let generator = ChordGenerator::new(vec![5], vec![2], vec![2]);

    tracing::info!(
        "generating {} chords over the {} scale",
        generator.population(&scale),
        scale.name
    );

    let chords = generator.generate(&scale)?;
    for chord in &chords {
        println!("{chord:?}");
    }

    let experiment = Experiment::build(
        scale,
        generator.octaves.clone(),
        generator.sizes.clone(),
        generator.steps.clone(),
        chords,
    );
    let path = persist(&experiment, &data_root)
        .with_context(|| format!("persisting under {}", data_root.display()))?;
    tracing::info!("experiment saved to {}", path.display());

    Ok(())
}
