//! Gemeinsame Konfiguration der Engine.

pub mod options;

pub use options::{ActivationPolicy, EngineOptions, ExclusionZone};
