//! Intersektions-Evaluation: Marquee-Rechteck gegen Kandidaten-Boxen.

use crate::core::{overlaps, ElementId, SelectionHost, SelectionRect, SelectionSet};
use crate::shared::EngineOptions;

/// Filtert die Kandidaten auf die vom Rechteck getroffenen Elemente.
///
/// Deterministisch und ordnungsstabil: gleiche Eingaben liefern dieselbe
/// Menge in derselben (Dokument-)Reihenfolge.
pub(crate) fn evaluate<H: SelectionHost>(
    host: &mut H,
    rect: &SelectionRect,
    candidates: &[ElementId],
    options: &EngineOptions,
) -> SelectionSet {
    // Batched Provider frischen ihre Boxen einmal pro Durchlauf auf
    host.prepare_boxes(candidates);

    candidates
        .iter()
        .copied()
        .filter(|id| {
            host.bounding_box(*id).is_some_and(|b| {
                overlaps(rect, &b, options.selection_tolerance, options.overlap_mode)
            })
        })
        .collect()
}
