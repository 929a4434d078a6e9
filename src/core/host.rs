//! Host-Grenze: Element-Handles, Zeiger-Eingaben und die
//! `SelectionHost`-Capability.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::geometry::SelectionRect;

/// Opakes Handle eines selektierbaren Elements.
/// Identität ist Referenz-Gleichheit auf Host-Seite, nie Wert-Gleichheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Zeiger-Taste des auslösenden Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Primäre Taste (links)
    #[default]
    Primary,
    /// Mittlere Taste
    Auxiliary,
    /// Sekundäre Taste (rechts)
    Secondary,
    /// Sonstige Tasten
    Other,
}

/// Gedrückte Modifier-Tasten zum Zeitpunkt des Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    /// Cmd (macOS) bzw. Meta/Win
    pub command: bool,
}

impl Modifiers {
    /// `true`, wenn irgendein Modifier gedrückt ist.
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.shift || self.command
    }
}

/// Normalisiertes Zeiger-Ereignis vom Host in Dokument-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput {
    /// Stabile ID des Zeigers über seine Lebensdauer
    pub pointer_id: u64,
    /// Position in Dokument-Koordinaten
    pub position: Vec2,
    /// Auslösende Taste
    pub button: PointerButton,
    /// Primärer Zeiger seines Typs (z.B. erster Touch-Kontakt)
    pub is_primary: bool,
    /// Modifier-Tasten
    pub modifiers: Modifiers,
    /// Zusätzlich gehaltene benannte Tasten (für `ActivationPolicy::NamedKeys`)
    pub held_keys: Vec<String>,
}

impl PointerInput {
    /// Erstellt ein primäres Zeiger-Ereignis ohne Modifier.
    pub fn new(pointer_id: u64, position: Vec2) -> Self {
        Self {
            pointer_id,
            position,
            button: PointerButton::Primary,
            is_primary: true,
            modifiers: Modifiers::default(),
            held_keys: Vec::new(),
        }
    }

    /// Taste/Zeiger qualifiziert als Selektions-Start (primäre oder mittlere
    /// Taste, oder primärer Zeiger seines Typs).
    pub fn is_activation_press(&self) -> bool {
        matches!(self.button, PointerButton::Primary | PointerButton::Auxiliary) || self.is_primary
    }
}

/// Capability-Grenze zum Host (DOM, Canvas-Szene, Test-Double).
///
/// Alle Abfragen sind synchron; Koordinatenbasis ist durchgängig
/// Dokument-relativ.
pub trait SelectionHost {
    /// Elemente, die das Kriterium erfüllen, in Dokument-Reihenfolge.
    fn matching_elements(&self, criterion: &str) -> Vec<ElementId>;

    /// Aktuelle Bounding-Box eines Elements; `None`, wenn unbekannt oder
    /// bereits entfernt.
    fn bounding_box(&mut self, id: ElementId) -> Option<SelectionRect>;

    /// Batch-Hook vor einem Evaluations-Durchlauf; Observer-basierte Provider
    /// frischen hier ihre Boxen auf. Default: direkte Messung, No-op.
    fn prepare_boxes(&mut self, _ids: &[ElementId]) {}

    /// Das visuelle Marquee-Element des Hosts selbst, nie ein Kandidat.
    fn marquee_element(&self) -> Option<ElementId> {
        None
    }

    /// Container-Ursprung (oben links) in Dokument-Koordinaten.
    fn container_origin(&self) -> Vec2;

    /// Sichtbare Viewport-Größe des Scroll-Containers.
    fn viewport_size(&self) -> Vec2;

    /// Aktuelle Scroll-Position.
    fn scroll_offset(&self) -> Vec2;

    /// Maximale Scroll-Position (Inhalt minus Viewport, je Achse ≥ 0).
    fn scroll_range(&self) -> Vec2;

    /// Scrollt den Container auf die bereits geklammerte Position.
    fn scroll_to(&mut self, _offset: Vec2) {}

    /// Unterdrückt Text-Selektion u.ä. Host-Nebeneffekte für die Drag-Dauer.
    fn suppress_text_selection(&mut self) {}

    /// Stellt die Host-Nebeneffekte nach Session-Ende wieder her.
    fn restore_text_selection(&mut self) {}
}
