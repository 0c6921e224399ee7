//! Category extractors.
//!
//! One module per output category, each combining the bounded walker, the
//! registries, and the normalizers into deduplicated token sequences. The
//! aggregator invokes them in a fixed order.

pub mod colors;
pub mod components;
pub mod effects;
pub mod frames;
pub mod grids;
pub mod snapshot;
pub mod typography;
pub mod variables;

pub use colors::extract_colors;
pub use components::extract_components;
pub use effects::extract_effects;
pub use frames::extract_frames;
pub use grids::extract_grids;
pub use snapshot::summarize_children;
pub use typography::extract_typography;
pub use variables::extract_variables;
