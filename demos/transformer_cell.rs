//! Generates a complete spiral-transformer cell and prints a summary.
//!
//! Run with `RUST_LOG=debug` to watch the builders report their work.

use coilis::coil::{CoilParameters, SpiralTransformer, TransformerLayers};
use coilis::layout::{LayoutCell, ProcessStack};

fn main() -> coilis::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stack = ProcessStack::from_json_str(
        r#"{"M6": {"layer": 37, "datatype": 0},
            "M5": {"layer": 36, "datatype": 0},
            "vias": {"layer": 35, "datatype": 0}}"#,
    )?;
    let layers = TransformerLayers::from_process(&stack, "M6", "M5", "vias")?;

    let params = CoilParameters::new(3.0, 20.0, 3, 5.0)?;
    let layout = SpiralTransformer::new(params, true, true, layers).execute()?;

    let mut cell = LayoutCell::new("spiral_transformer");
    layout.emit_into(&mut cell);

    println!(
        "cell {}: {} polygons ({} primary, {} secondary)",
        cell.name(),
        cell.len(),
        layout.primary.len(),
        layout.secondary.len()
    );
    if let Some(terminals) = &layout.terminals {
        println!(
            "{} leads and {} vias out to radius {:.3}",
            terminals.leads.len(),
            terminals.vias.len(),
            terminals.boundary_radius
        );
    }
    for (i, polygon) in cell.polygons().iter().take(4).enumerate() {
        println!(
            "polygon {i}: {} vertices on layer {}",
            polygon.points().len(),
            polygon.layer().layer
        );
    }
    Ok(())
}
