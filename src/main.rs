use anyhow::Context;
use sketchkit::{
    editor_options, init_logging, open_store, Config, DesignerState, DrawingStore, DrawingSummary,
    BUILD_DATE, VERSION,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("SketchKit {} (built {})", VERSION, BUILD_DATE);

    let config_path = Config::default_path()?;
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let slot = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.storage.default_slot.clone());

    let store = open_store(&config)?;
    let slots = store.slots()?;
    tracing::info!(
        "Drawing store {} holds {} slot(s): {}",
        store.root().display(),
        slots.len(),
        slots.join(", ")
    );

    let mut state = DesignerState::with_options(editor_options(&config));
    if !state
        .load_drawing(&store, &slot)
        .with_context(|| format!("Failed to load slot '{}'", slot))?
    {
        tracing::warn!("Slot '{}' is empty", slot);
        return Ok(());
    }

    let summary = DrawingSummary::of(state.scene());
    tracing::info!(
        "Slot '{}': {} top-level shape(s), {} group(s) holding {} shape(s)",
        slot,
        summary.top_level_shapes,
        summary.groups,
        summary.grouped_shapes
    );
    for (kind, count) in &summary.kinds {
        tracing::info!("  {:<10} {}", kind, count);
    }
    if let Some((min_x, min_y, max_x, max_y)) = summary.bounds {
        tracing::info!(
            "Extent: ({:.1}, {:.1}) to ({:.1}, {:.1})",
            min_x,
            min_y,
            max_x,
            max_y
        );
    }

    Ok(())
}
