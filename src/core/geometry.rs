//! Geometrie der Marquee-Selektion: Rechteck aus zwei Drag-Punkten und
//! Toleranz-basierte Überlappungstests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Überlappungsmodus für den Intersektionstest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlapMode {
    /// Jede Überlappung zwischen Marquee und Kandidat zählt als selektiert.
    #[default]
    Partial,
    /// Kandidat muss vollständig im Marquee enthalten sein.
    Full,
}

/// Achsen-aligniertes Selektionsrechteck.
/// `width` und `height` sind nie negativ.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SelectionRect {
    /// Erstellt ein Rechteck aus Position und Ausdehnung.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rechte Kante.
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Untere Kante.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Erweitert das Rechteck an allen vier Seiten um `margin`.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            left: self.left - margin,
            top: self.top - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// AABB-Überlappungstest; Kanten-Berührung zählt als Überlappung.
    pub fn intersects(&self, other: &SelectionRect) -> bool {
        self.left <= other.right()
            && self.right() >= other.left
            && self.top <= other.bottom()
            && self.bottom() >= other.top
    }

    /// Enthält `other` vollständig; Kanten-Gleichheit zählt als enthalten.
    pub fn contains_rect(&self, other: &SelectionRect) -> bool {
        self.left <= other.left
            && self.right() >= other.right()
            && self.top <= other.top
            && self.bottom() >= other.bottom()
    }
}

/// Berechnet das Selektionsrechteck aus zwei Drag-Punkten.
///
/// `origin` ist der Container-Ursprung in Dokument-Koordinaten; das Ergebnis
/// ist Container-relativ. Solange nicht beide Punkte gesetzt sind, gibt es
/// kein Rechteck.
pub fn rect_from_points(a: Option<Vec2>, b: Option<Vec2>, origin: Vec2) -> Option<SelectionRect> {
    let (a, b) = (a?, b?);
    Some(SelectionRect {
        left: a.x.min(b.x) - origin.x,
        top: a.y.min(b.y) - origin.y,
        width: (a.x - b.x).abs(),
        height: (a.y - b.y).abs(),
    })
}

/// Testet, ob Kandidat `b` unter Toleranz und Modus vom Marquee `a`
/// getroffen wird. `a` wird an allen Seiten um `tolerance` nach außen
/// erweitert.
pub fn overlaps(a: &SelectionRect, b: &SelectionRect, tolerance: f32, mode: OverlapMode) -> bool {
    let probe = a.expanded(tolerance);
    match mode {
        OverlapMode::Partial => probe.intersects(b),
        OverlapMode::Full => probe.contains_rect(b),
    }
}
