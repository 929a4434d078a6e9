//! Kandidaten-Auflösung: Kriteriums-Abfrage, Marquee-/Exklusions-Filter, Cap.

use glam::Vec2;

use crate::core::{overlaps, ElementId, OverlapMode, SelectionHost, SelectionRect};
use crate::shared::{EngineOptions, ExclusionZone};

/// Löst die geordnete Kandidatenliste für das konfigurierte Kriterium auf.
///
/// Ohne passende Elemente: leere Liste, nie ein Fehler (fail open).
pub(crate) fn resolve<H: SelectionHost>(host: &H, options: &EngineOptions) -> Vec<ElementId> {
    let mut elements = host.matching_elements(&options.select_criteria);

    // Das eigene Marquee-Element ist nie ein Kandidat
    if let Some(marquee) = host.marquee_element() {
        elements.retain(|id| *id != marquee);
    }

    let excluded = exclusion_targets(host, options);
    if !excluded.is_empty() {
        elements.retain(|id| !excluded.contains(id));
    }

    if let Some(cap) = options.max_selections {
        elements.truncate(cap);
    }

    elements
}

/// Ziel-Elemente der konfigurierten Exklusionszone.
fn exclusion_targets<H: SelectionHost>(host: &H, options: &EngineOptions) -> Vec<ElementId> {
    match &options.exclusion_zone {
        ExclusionZone::None => Vec::new(),
        ExclusionZone::Criterion(criterion) => host.matching_elements(criterion),
        ExclusionZone::Elements(ids) => ids.clone(),
    }
}

/// Testet, ob ein Punkt innerhalb der Exklusionszone liegt: 1×1-Proberechteck
/// gegen die Ziel-Boxen, Partial-Modus ohne Toleranz.
pub(crate) fn point_in_exclusion_zone<H: SelectionHost>(
    host: &mut H,
    options: &EngineOptions,
    point: Vec2,
) -> bool {
    let targets = exclusion_targets(host, options);
    if targets.is_empty() {
        // fehlende Ziele sind ein gutartiger Leerfall
        return false;
    }

    let probe = SelectionRect::new(point.x, point.y, 1.0, 1.0);
    targets.iter().any(|id| {
        host.bounding_box(*id)
            .is_some_and(|b| overlaps(&probe, &b, 0.0, OverlapMode::Partial))
    })
}
