mod movement;
mod output;
mod render;

pub use movement::{Choice, partition_paths, resolve_choice};
pub use output::{Output, OutputBlock};
pub use render::{render_arrival, render_inventory, render_paths};
