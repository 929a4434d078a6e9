//! Marquee-Select Engine Library.
//! Zeiger-gesteuerte Rechteck-Selektion als Library exportiert für Host-Anbindung und Tests.

pub mod core;
pub mod engine;
pub mod shared;

pub use crate::core::SelectionSet;
pub use crate::core::{overlaps, rect_from_points, OverlapMode, SelectionRect};
pub use crate::core::{ElementId, Modifiers, PointerButton, PointerInput, SelectionHost};
pub use crate::engine::{
    CancelReason, CommandLog, DragPhase, DragSession, EngineCallbacks, EngineCommand,
    EngineController, EngineIntent, EngineState, SelectionEngine, SelectionState,
};
pub use crate::shared::{ActivationPolicy, EngineOptions, ExclusionZone};
