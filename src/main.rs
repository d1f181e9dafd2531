mod settings; // brings `settings.rs` in as `crate::settings`

use std::collections::HashMap;

use anyhow::Context;
use gridvec_vector::{FrozenVector2D, VectorError};
use tracing::{debug, info, warn};
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("gridvec started.");

    // Optional config path as the first argument
    let path = std::env::args().nth(1);
    let settings = settings::load_settings(path.as_deref()).context("failed to load settings")?;
    let spec = settings.grid;
    info!(%spec, points = settings.points.len(), "Quantizing points");

    let mut cells: HashMap<FrozenVector2D, usize> = HashMap::new();
    for (index, point) in settings.points.iter().enumerate() {
        let mut moved = point.copy();
        moved
            .rotate(settings.rotation_degrees)?
            .move_by(&settings.translation)?;
        let cell = spec.cell_of(&moved);
        info!(index, %point, %moved, %cell, "Point quantized");
        *cells.entry(cell).or_default() += 1;
    }

    for (cell, count) in &cells {
        info!(%cell, hash = cell.hash_value(), count, "Cell occupancy");
    }
    info!(cells = cells.len(), "Done.");

    // Once hashed, a vector refuses further mutation
    let mut origin = settings.translation.copy();
    let hash = origin.hash();
    debug!(%origin, hash, "Origin hashed");
    match origin.rotate(settings.rotation_degrees) {
        Err(VectorError::Frozen(msg)) => warn!(%origin, "Rejected mutation of hashed vector: {}", msg),
        Err(e) => return Err(e.into()),
        Ok(_) => warn!(%origin, "Hashed vector accepted a mutation"),
    }

    Ok(())
}
