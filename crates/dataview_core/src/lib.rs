//! Bounded, schema-stable descriptions of dynamically typed runtime values.

/// Value model, classification, rendering, and view building.
pub mod view;
