use std::time::Duration;

use crate::core::PointerInput;

/// Engine-Intent Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum EngineIntent {
    /// Zeiger gedrückt (potentieller Session-Start)
    PointerPressed { input: PointerInput },
    /// Zeiger bewegt
    PointerMoved { input: PointerInput },
    /// Zeiger losgelassen
    PointerReleased { input: PointerInput },
    /// Zeiger vom Host abgebrochen (z.B. Stift-Kontakt verloren)
    PointerCancelled { pointer_id: u64 },
    /// Escape gedrückt
    EscapePressed,
    /// Host-Fenster hat den Fokus verloren
    FocusLost,
    /// Kontextmenü wurde geöffnet
    ContextMenuOpened,
    /// Host-Container wurde gescrollt
    HostScrolled,
    /// Animations-Frame-Tick; entleert die gebündelte Evaluation
    FrameTick { now: Duration },
    /// Timer-Tick; feuert fällige Delay-Commits und Auto-Scroll-Schritte
    TimerTick { now: Duration },
    /// Alle Kandidaten selektieren
    SelectAllRequested,
    /// Selektion explizit leeren
    ClearSelectionRequested,
    /// Aktive Session imperativ abbrechen
    CancelRequested,
    /// Kandidatenliste neu aufbauen (Kriteriums-/Strukturänderung)
    CandidatesInvalidated,
}
