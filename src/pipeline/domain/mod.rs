pub mod archetypes;
pub mod palettes;

pub use archetypes::{archetype_for, gate_for, Archetype, SubtypeGate, Window, ARCHETYPES};
pub use palettes::{DEFAULT_PALETTE, PALETTES};
