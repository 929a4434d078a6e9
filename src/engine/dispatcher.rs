//! Selektions-Diff & Dispatch.
//!
//! Einziger Ort, der `SelectionState` verändert. Commit-Semantik:
//! symmetrische Differenz gegen die zuletzt committete Selektion, höchstens
//! ein Ereignis pro Element und Tick, Last-Write-Wins für verzögerte
//! Commits.

use std::time::Duration;

use crate::core::SelectionSet;
use crate::shared::EngineOptions;

use super::callbacks::EngineCallbacks;
use super::state::{PendingCommit, SelectionState};


/// Commit-Modus: `Gated` respektiert `disable_unselection`, `Forced`
/// (explizites `clear`) nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommitMode {
    Gated,
    Forced,
}

/// Committet eine neue Selektion sofort; ein anstehender Delay-Commit wird
/// verworfen (sofort schlägt verzögert).
pub(crate) fn commit(
    selection: &mut SelectionState,
    mut new_selection: SelectionSet,
    mode: CommitMode,
    options: &EngineOptions,
    callbacks: &mut EngineCallbacks,
) {
    selection.pending = None;

    if let Some(cap) = options.max_selections {
        new_selection.truncate(cap);
    }

    let diff = selection.previous.symmetric_difference(&new_selection);
    if diff.is_empty() {
        // Idempotenz: nichts zu selektieren
        return;
    }

    if mode == CommitMode::Gated
        && options.disable_unselection
        && new_selection.len() < selection.previous.len()
    {
        // Selektion darf nur wachsen
        return;
    }

    selection.current = new_selection;

    for id in diff {
        if selection.current.contains(id) {
            callbacks.emit_select(id);
        } else {
            callbacks.emit_unselect(id);
        }
    }

    selection.previous = selection.current.clone();
}

/// Plant einen Commit nach Ablauf der Selektions-Verzögerung; ersetzt einen
/// bereits anstehenden (Last-Write-Wins auf dem Timer).
pub(crate) fn commit_delayed(
    selection: &mut SelectionState,
    new_selection: SelectionSet,
    due: Duration,
) {
    selection.pending = Some(PendingCommit {
        due,
        selection: new_selection,
    });
}

/// Feuert den anstehenden Commit, falls er fällig ist.
pub(crate) fn fire_due(
    selection: &mut SelectionState,
    now: Duration,
    options: &EngineOptions,
    callbacks: &mut EngineCallbacks,
) {
    if let Some(pending) = selection.pending.take_if(|p| p.due <= now) {
        commit(selection, pending.selection, CommitMode::Gated, options, callbacks);
    }
}

/// Spült einen anstehenden Commit sofort. Läuft beim Session-Ende: kein
/// Timer überlebt die Session, die letzte Evaluation geht nicht verloren.
pub(crate) fn flush_pending(
    selection: &mut SelectionState,
    options: &EngineOptions,
    callbacks: &mut EngineCallbacks,
) {
    if let Some(pending) = selection.pending.take() {
        commit(selection, pending.selection, CommitMode::Gated, options, callbacks);
    }
}

/// Verwirft einen anstehenden Commit (Abbruch-Pfad, Multitouch-Beginn).
pub(crate) fn cancel_pending(selection: &mut SelectionState) {
    selection.pending = None;
}
