//! Engine-Schicht: Drag-Session-Zustandsmaschine, Dispatcher und Controller.

pub mod callbacks;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod state;

mod dispatcher;
mod evaluator;
mod handlers;
mod intent_mapping;
mod resolver;

pub use callbacks::EngineCallbacks;
pub use command_log::CommandLog;
pub use controller::EngineController;
pub use events::{CancelReason, EngineCommand, EngineIntent};
pub use state::{
    AutoScrollState, DragPhase, DragSession, EngineState, FrameThrottle, PendingCommit,
    SelectionState,
};

use std::time::Duration;

use crate::core::{ElementId, PointerInput, SelectionHost, SelectionRect};
use crate::shared::EngineOptions;

/// Zeiger-gesteuerte Marquee-Selektions-Engine über einem Host.
///
/// Besitzt Host, Zustand und Observer-Callbacks; alle Eingaben laufen als
/// `EngineIntent` durch den `EngineController`.
pub struct SelectionEngine<H: SelectionHost> {
    host: H,
    state: EngineState,
    controller: EngineController,
    callbacks: EngineCallbacks,
}

impl<H: SelectionHost> SelectionEngine<H> {
    /// Erstellt eine Engine; Konfigurationsfehler werden sofort gemeldet.
    pub fn new(host: H, options: EngineOptions) -> anyhow::Result<Self> {
        options.validate()?;

        Ok(Self {
            host,
            state: EngineState::new(options),
            controller: EngineController::new(),
            callbacks: EngineCallbacks::default(),
        })
    }

    /// Observer-Registrierung; die Callbacks sind öffentliche Felder.
    pub fn callbacks_mut(&mut self) -> &mut EngineCallbacks {
        &mut self.callbacks
    }

    /// Read-only Sicht auf den Engine-Zustand.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Read-only Sicht auf die Optionen.
    pub fn options(&self) -> &EngineOptions {
        &self.state.options
    }

    /// Zugriff auf den Host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable Zugriff auf den Host (z.B. für Test-Doubles).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, intent: EngineIntent) -> anyhow::Result<()> {
        self.controller
            .handle_intent(&mut self.state, &mut self.host, &mut self.callbacks, intent)
    }

    // ── Zeiger-Lebenszyklus ─────────────────────────────────────────

    /// Pointer-Down vom Host.
    pub fn pointer_pressed(&mut self, input: PointerInput) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::PointerPressed { input })
    }

    /// Pointer-Move vom Host.
    pub fn pointer_moved(&mut self, input: PointerInput) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::PointerMoved { input })
    }

    /// Pointer-Up vom Host.
    pub fn pointer_released(&mut self, input: PointerInput) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::PointerReleased { input })
    }

    /// Pointer-Cancel vom Host.
    pub fn pointer_cancelled(&mut self, pointer_id: u64) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::PointerCancelled { pointer_id })
    }

    /// Escape-Taste.
    pub fn escape(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::EscapePressed)
    }

    /// Fokus-Verlust des Host-Fensters.
    pub fn focus_lost(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::FocusLost)
    }

    /// Kontextmenü wurde geöffnet.
    pub fn context_menu(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::ContextMenuOpened)
    }

    /// Host-Container wurde gescrollt.
    pub fn host_scrolled(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::HostScrolled)
    }

    /// Animations-Frame-Tick; entleert die gebündelte Evaluation.
    pub fn frame(&mut self, now: Duration) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::FrameTick { now })
    }

    /// Timer-Tick; feuert fällige Delay-Commits und Auto-Scroll-Schritte.
    pub fn timer_tick(&mut self, now: Duration) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::TimerTick { now })
    }

    // ── Imperative API ──────────────────────────────────────────────

    /// Aktuelle Selektion in deterministischer Reihenfolge.
    pub fn selection(&self) -> Vec<ElementId> {
        self.state.selection.current.to_vec()
    }

    /// Aktuelles Marquee-Rechteck, Container-relativ (nur während Drag).
    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.state.session.display_rect()
    }

    /// `true` während einer aktiven Drag-Bewegung.
    pub fn is_dragging(&self) -> bool {
        self.state.session.phase == DragPhase::Dragging
    }

    /// Löst die Kandidatenliste frisch auf (leerer Host ⇒ leer, kein Fehler).
    pub fn candidates(&self) -> Vec<ElementId> {
        resolver::resolve(&self.host, &self.state.options)
    }

    /// Selektiert alle Kandidaten des Kriteriums.
    pub fn select_all(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::SelectAllRequested)
    }

    /// Leert die Selektion explizit; umgeht `disable_unselection`.
    pub fn clear_selection(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::ClearSelectionRequested)
    }

    /// Ersetzt die Selektion über einen Updater; läuft durch denselben
    /// Dispatcher wie die Zeiger-Selektion (Cap- und Diff-Invarianten
    /// gelten unverändert).
    pub fn mutate_selection<F>(&mut self, update: F) -> anyhow::Result<()>
    where
        F: FnOnce(&[ElementId]) -> Vec<ElementId>,
    {
        let ids = update(&self.selection());
        self.controller.handle_command(
            &mut self.state,
            &mut self.host,
            &mut self.callbacks,
            EngineCommand::CommitExternalSelection { ids },
        )
    }

    /// Bricht eine aktive Session ab (idempotent).
    pub fn cancel(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::CancelRequested)
    }

    /// Invalidiert die Kandidatenliste (Kriteriums-/Strukturänderung).
    pub fn refresh_candidates(&mut self) -> anyhow::Result<()> {
        self.handle_intent(EngineIntent::CandidatesInvalidated)
    }

    /// Frühester anstehender Timer (Delay-Commit oder Auto-Scroll), damit
    /// Hosts präzise schlafen können.
    pub fn next_timer_deadline(&self) -> Option<Duration> {
        let pending = self.state.selection.pending.as_ref().map(|p| p.due);
        let scroll = self.state.auto_scroll.wakeup_due;

        match (pending, scroll) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
