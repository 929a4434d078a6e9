//! Engine State — zentrale Datenhaltung.
//!
//! Mutations-Disziplin: `SelectionState` wird ausschließlich vom
//! `dispatcher` verändert, `DragSession` ausschließlich von den
//! Session-Handlern. Alles läuft auf dem einen Event-Thread des Hosts.

use std::time::Duration;

use glam::Vec2;

use crate::core::{rect_from_points, ElementId, SelectionRect, SelectionSet};
use crate::shared::EngineOptions;

use super::command_log::CommandLog;

/// Phase der Drag-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Keine Session aktiv
    #[default]
    Idle,
    /// Pointer-Down akzeptiert, noch keine Bewegung
    Armed,
    /// Aktive Drag-Bewegung (Marquee sichtbar)
    Dragging,
}

/// Zustand einer Drag-Geste; wird bei Pointer-Down erzeugt und bei
/// Up/Cancel/Escape/Blur vollständig zurückgesetzt.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    /// Aktuelle Phase
    pub phase: DragPhase,
    /// Zeiger, der die Session besitzt
    pub pointer_id: Option<u64>,
    /// Startpunkt in Dokument-Koordinaten
    pub start_point: Option<Vec2>,
    /// Letzter bekannter Punkt in Dokument-Koordinaten
    pub current_point: Option<Vec2>,
    /// Container-Ursprung, beim Scharfschalten gecacht
    pub origin: Vec2,
    /// Host-Nebeneffekte (Text-Selektion) sind unterdrückt
    pub text_selection_suppressed: bool,
}

impl DragSession {
    /// Marquee-Rechteck in Dokument-Koordinaten (Basis der Intersektion).
    pub fn marquee_rect(&self) -> Option<SelectionRect> {
        rect_from_points(self.start_point, self.current_point, Vec2::ZERO)
    }

    /// Container-relatives Rechteck für die Host-Darstellung.
    pub fn display_rect(&self) -> Option<SelectionRect> {
        rect_from_points(self.start_point, self.current_point, self.origin)
    }

    /// Setzt die Session auf Idle zurück.
    pub(crate) fn reset(&mut self) {
        *self = DragSession::default();
    }
}

/// Anstehender verzögerter Commit (Last-Write-Wins).
#[derive(Debug, Clone)]
pub struct PendingCommit {
    /// Fälligkeitszeitpunkt (Host-Uhr)
    pub due: Duration,
    /// Zu committende Selektion
    pub selection: SelectionSet,
}

/// Selektionszustand; Mutation nur durch den `dispatcher`.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Zuletzt committete Selektion (Diff-Basis)
    pub previous: SelectionSet,
    /// Aktuelle, extern sichtbare Selektion
    pub current: SelectionSet,
    /// Anstehender Delay-Commit
    pub pending: Option<PendingCommit>,
}

/// Bündelt Move-Ereignisse zu höchstens einer Evaluation pro Frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameThrottle {
    queued: bool,
}

impl FrameThrottle {
    /// Merkt eine Evaluation für den nächsten Frame vor (koalesziert).
    pub fn queue(&mut self) {
        self.queued = true;
    }

    /// Entnimmt die vorgemerkte Evaluation.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.queued)
    }

    /// Verwirft eine vorgemerkte Evaluation.
    pub fn clear(&mut self) {
        self.queued = false;
    }

    /// `true`, wenn eine Evaluation ansteht.
    pub fn is_queued(&self) -> bool {
        self.queued
    }
}

/// Zustand des Auto-Scroll-Controllers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoScrollState {
    /// Nächster geplanter Scroll-Schritt (Host-Uhr)
    pub wakeup_due: Option<Duration>,
    /// Letzte bekannte Zeigerposition in Dokument-Koordinaten
    pub last_pointer: Option<Vec2>,
}

impl AutoScrollState {
    /// Beendet die Reschedule-Schleife.
    pub(crate) fn stop(&mut self) {
        self.wakeup_due = None;
    }
}

/// Zentraler Engine-Zustand.
pub struct EngineState {
    /// Unveränderliche Policy dieser Engine-Instanz
    pub options: EngineOptions,
    /// Aktive Drag-Geste
    pub session: DragSession,
    /// Selektionszustand (Mutation nur durch den `dispatcher`)
    pub selection: SelectionState,
    /// Alle aktuell gedrückten Zeiger (Multitouch-Erkennung)
    pub pointer_cache: Vec<u64>,
    /// Frame-Koaleszierung der Evaluation
    pub throttle: FrameThrottle,
    /// Auto-Scroll-Zustand
    pub auto_scroll: AutoScrollState,
    /// Beim Scharfschalten aufgelöste Kandidaten in Dokument-Reihenfolge
    pub candidates: Vec<ElementId>,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
}

impl EngineState {
    /// Erstellt den Anfangszustand mit den übergebenen Optionen.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            session: DragSession::default(),
            selection: SelectionState::default(),
            pointer_cache: Vec::new(),
            throttle: FrameThrottle::default(),
            auto_scroll: AutoScrollState::default(),
            candidates: Vec::new(),
            command_log: CommandLog::new(),
        }
    }

    /// `true`, sobald zwei oder mehr Zeiger gleichzeitig gedrückt sind.
    pub fn is_multitouch(&self) -> bool {
        self.pointer_cache.len() >= 2
    }

    /// `true`, wenn eine Session aktiv (Armed oder Dragging) ist.
    pub fn session_active(&self) -> bool {
        self.session.phase != DragPhase::Idle
    }
}
