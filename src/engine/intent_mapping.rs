//! Mapping von Host-Intents auf mutierende Engine-Commands.
//!
//! Hier sitzt das reine Aktivierungs-Gating (Taste, Policy, Multitouch,
//! Zeiger-Zuordnung); Host-abhängige Prüfungen wie der Exklusionszonen-Test
//! laufen in den Handlern.

use super::events::{CancelReason, EngineCommand, EngineIntent};
use super::state::{DragPhase, EngineState};
use crate::core::PointerInput;
use crate::shared::ActivationPolicy;


/// Übersetzt einen `EngineIntent` in eine Sequenz ausführbarer
/// `EngineCommand`s.
pub fn map_intent_to_commands(state: &EngineState, intent: EngineIntent) -> Vec<EngineCommand> {
    match intent {
        EngineIntent::PointerPressed { input } => map_pointer_pressed(state, input),
        EngineIntent::PointerMoved { input } => map_pointer_moved(state, input),
        EngineIntent::PointerReleased { input } => map_pointer_released(state, input),
        EngineIntent::PointerCancelled { pointer_id } => {
            let mut commands = Vec::new();
            if state.session_active() && state.session.pointer_id == Some(pointer_id) {
                commands.push(EngineCommand::CancelSession {
                    reason: CancelReason::PointerCancel,
                });
            }
            commands.push(EngineCommand::UntrackPointer { pointer_id });
            commands
        }
        EngineIntent::EscapePressed => cancel_if_active(state, CancelReason::Escape),
        EngineIntent::FocusLost => cancel_if_active(state, CancelReason::Blur),
        EngineIntent::ContextMenuOpened => cancel_if_active(state, CancelReason::ContextMenu),
        EngineIntent::HostScrolled => {
            let mut commands = vec![EngineCommand::RefreshContainerOrigin];
            if state.options.hide_on_scroll && state.session_active() {
                commands.push(EngineCommand::CancelSession {
                    reason: CancelReason::HostScroll,
                });
            }
            commands
        }
        EngineIntent::FrameTick { now } => {
            if state.throttle.is_queued() && state.session.phase == DragPhase::Dragging {
                vec![EngineCommand::RunQueuedEvaluation { now }]
            } else {
                Vec::new()
            }
        }
        EngineIntent::TimerTick { now } => {
            let mut commands = Vec::new();
            if state
                .selection
                .pending
                .as_ref()
                .is_some_and(|pending| pending.due <= now)
            {
                commands.push(EngineCommand::FireDelayedCommit { now });
            }
            if state.auto_scroll.wakeup_due.is_some_and(|due| due <= now)
                && state.session.phase == DragPhase::Dragging
            {
                commands.push(EngineCommand::AutoScrollStep { now });
            }
            commands
        }
        EngineIntent::SelectAllRequested => vec![EngineCommand::SelectAllCandidates],
        EngineIntent::ClearSelectionRequested => vec![EngineCommand::ClearSelection],
        EngineIntent::CancelRequested => cancel_if_active(state, CancelReason::Imperative),
        EngineIntent::CandidatesInvalidated => vec![EngineCommand::RefreshCandidates],
    }
}

/// Abbruch einer Idle-Session ist ein No-op (Idempotenz des Cancel-Pfads).
fn cancel_if_active(state: &EngineState, reason: CancelReason) -> Vec<EngineCommand> {
    if state.session_active() {
        vec![EngineCommand::CancelSession { reason }]
    } else {
        Vec::new()
    }
}

fn map_pointer_pressed(state: &EngineState, input: PointerInput) -> Vec<EngineCommand> {
    // Doppeltes Pointer-Down derselben ID defensiv ignorieren
    if state.pointer_cache.contains(&input.pointer_id) {
        return Vec::new();
    }

    let pointer_id = input.pointer_id;
    let mut commands = vec![EngineCommand::TrackPointer { pointer_id }];

    // Scharfschalten nur aus Idle, ohne weitere Zeiger, mit qualifizierter
    // Taste und erfüllter Aktivierungs-Policy
    let arms = state.session.phase == DragPhase::Idle
        && state.pointer_cache.is_empty()
        && input.is_activation_press()
        && activation_satisfied(&state.options.activation, &input);

    if arms {
        commands.push(EngineCommand::ArmSession { input });
    }

    commands
}

fn map_pointer_moved(state: &EngineState, input: PointerInput) -> Vec<EngineCommand> {
    if !state.session_active() {
        return Vec::new();
    }
    // Multitouch: Move-Ereignisse vollständig ignorieren (Pinch/Pan-Schutz)
    if state.is_multitouch() {
        return Vec::new();
    }
    if state.session.pointer_id != Some(input.pointer_id) {
        return Vec::new();
    }

    vec![EngineCommand::UpdateDragPoint { input }]
}

fn map_pointer_released(state: &EngineState, input: PointerInput) -> Vec<EngineCommand> {
    let pointer_id = input.pointer_id;
    let mut commands = Vec::new();

    if state.session_active() && state.session.pointer_id == Some(pointer_id) {
        commands.push(EngineCommand::FinishSession { input });
    }
    // Unbekannte Zeiger-IDs laufen defensiv als reines Untrack durch
    commands.push(EngineCommand::UntrackPointer { pointer_id });

    commands
}

/// Prüft die Aktivierungs-Policy gegen das Pointer-Down-Ereignis.
fn activation_satisfied(policy: &ActivationPolicy, input: &PointerInput) -> bool {
    match policy {
        ActivationPolicy::Always => true,
        ActivationPolicy::AnyModifier => input.modifiers.any(),
        ActivationPolicy::NamedKeys(keys) => keys
            .iter()
            .any(|key| input.held_keys.iter().any(|held| held == key)),
    }
}
