use std::time::Duration;

use crate::core::{ElementId, PointerInput};

/// Grund eines Session-Abbruchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Escape-Taste (feuert zusätzlich `on_escape`)
    Escape,
    /// Fokus-Verlust des Host-Fensters
    Blur,
    /// Kontextmenü geöffnet
    ContextMenu,
    /// Host hat den Zeiger abgebrochen
    PointerCancel,
    /// Host-Scroll bei aktivem `hide_on_scroll`
    HostScroll,
    /// Imperativer Abbruch über die API
    Imperative,
}

/// Mutierende Engine-Commands, ausgeführt vom `EngineController`.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Zeiger in den Multitouch-Cache aufnehmen
    TrackPointer { pointer_id: u64 },
    /// Zeiger aus dem Multitouch-Cache entfernen
    UntrackPointer { pointer_id: u64 },
    /// Session scharfschalten (Exklusionszonen-Test läuft im Handler)
    ArmSession { input: PointerInput },
    /// Drag-Punkt aktualisieren und Evaluation für den Frame bündeln
    UpdateDragPoint { input: PointerInput },
    /// Gebündelte Evaluation dieses Frames ausführen
    RunQueuedEvaluation { now: Duration },
    /// Fälligen Delay-Commit feuern
    FireDelayedCommit { now: Duration },
    /// Fälligen Auto-Scroll-Schritt ausführen
    AutoScrollStep { now: Duration },
    /// Session per Pointer-Up des eigenen Zeigers abschließen
    FinishSession { input: PointerInput },
    /// Session abbrechen; bereits committete Selektion bleibt erhalten
    CancelSession { reason: CancelReason },
    /// Container-Ursprung neu vom Host lesen
    RefreshContainerOrigin,
    /// Kandidatenliste neu auflösen
    RefreshCandidates,
    /// Alle Kandidaten selektieren
    SelectAllCandidates,
    /// Selektion leeren (umgeht `disable_unselection`)
    ClearSelection,
    /// Extern bestimmte Selektion committen (mutate-Pfad)
    CommitExternalSelection { ids: Vec<ElementId> },
}
