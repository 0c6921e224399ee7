//! # Tokex Core
//!
//! Design-token extraction engine: walks a design document's node tree
//! and style registries, normalizes what it finds, and assembles a single
//! canonical JSON record of the file's design system.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 tokex-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Document Model  │  Extractors              │
//! │  - Scene nodes   │  - Colors, typography    │
//! │  - Registries    │  - Effects, grids        │
//! │  - Variables     │  - Components, frames    │
//! ├─────────────────────────────────────────────┤
//! │  Bounded Walker  │  Aggregator              │
//! │  - DFS, capped   │  - Fixed phase order     │
//! │  - Silent stop   │  - Stats, timestamps     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod document;
pub mod error;
pub mod extract;
pub mod message;
pub mod node;
pub mod normalize;
pub mod registry;
pub mod token;
pub mod walk;

pub use aggregate::{extract_document, Phase};
pub use document::DesignDocument;
pub use error::{TokenError, TokenResult};
pub use message::{run_extraction, HostMessage, UiRequest};
pub use node::{
    AutoLayout, CornerRadius, Effect, EffectKind, FontName, NodeKind, Paint, PaintKind, SceneNode,
};
pub use registry::{VariableRegistry, VariableType};
pub use token::{TokenDocument, TokenStats};
pub use walk::walk_nodes;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
