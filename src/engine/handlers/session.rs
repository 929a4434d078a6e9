//! Handler für den Session-Lebenszyklus (Arm, Drag, Finish, Cancel).

use std::time::Duration;

use crate::core::{PointerInput, SelectionHost};
use crate::engine::callbacks::EngineCallbacks;
use crate::engine::events::CancelReason;
use crate::engine::state::{DragPhase, EngineState};
use crate::engine::{dispatcher, evaluator, resolver};

use super::scroll;

/// Nimmt einen Zeiger in den Multitouch-Cache auf.
pub(crate) fn track_pointer(state: &mut EngineState, pointer_id: u64) {
    if !state.pointer_cache.contains(&pointer_id) {
        state.pointer_cache.push(pointer_id);
    }

    // Beginn von Multitouch: gebündelte Evaluation und anstehenden
    // Delay-Commit verwerfen; die Selektion dieses Moments bleibt stehen
    if state.is_multitouch() {
        state.throttle.clear();
        dispatcher::cancel_pending(&mut state.selection);
    }
}

/// Entfernt einen Zeiger aus dem Multitouch-Cache (unbekannte IDs: No-op).
pub(crate) fn untrack_pointer(state: &mut EngineState, pointer_id: u64) {
    state.pointer_cache.retain(|id| *id != pointer_id);
}

/// Schaltet die Session scharf, sofern der Startpunkt außerhalb der
/// Exklusionszone liegt.
pub(crate) fn arm<H: SelectionHost>(
    state: &mut EngineState,
    host: &mut H,
    callbacks: &mut EngineCallbacks,
    input: PointerInput,
) {
    if resolver::point_in_exclusion_zone(host, &state.options, input.position) {
        log::debug!("Pointer-Down in Exklusionszone ignoriert");
        return; // Session bleibt Idle
    }

    state.candidates = resolver::resolve(host, &state.options);

    state.session.phase = DragPhase::Armed;
    state.session.pointer_id = Some(input.pointer_id);
    state.session.start_point = Some(input.position);
    state.session.current_point = Some(input.position);
    state.session.origin = host.container_origin();

    host.suppress_text_selection();
    state.session.text_selection_suppressed = true;

    log::debug!(
        "Session scharfgeschaltet: Zeiger {}, {} Kandidaten",
        input.pointer_id,
        state.candidates.len()
    );

    callbacks.emit_drag_start(&input);
}

/// Aktualisiert den Drag-Punkt und bündelt die Evaluation für den Frame.
pub(crate) fn update_drag_point(
    state: &mut EngineState,
    callbacks: &mut EngineCallbacks,
    input: PointerInput,
) {
    state.session.current_point = Some(input.position);
    if state.session.phase == DragPhase::Armed {
        state.session.phase = DragPhase::Dragging;
    }

    state.throttle.queue();
    state.auto_scroll.last_pointer = Some(input.position);

    let current = state.selection.current.to_vec();
    callbacks.emit_drag_move(&input, &current);
}

/// Führt die gebündelte Evaluation dieses Frames aus; anschließend läuft
/// der Auto-Scroll-Schritt.
pub(crate) fn run_queued_evaluation<H: SelectionHost>(
    state: &mut EngineState,
    host: &mut H,
    callbacks: &mut EngineCallbacks,
    now: Duration,
) {
    if !state.throttle.take() {
        return;
    }
    if state.session.phase != DragPhase::Dragging || state.is_multitouch() {
        return;
    }

    if !state.options.only_select_on_drag_end {
        if let Some(rect) = state.session.marquee_rect() {
            let hits = evaluator::evaluate(host, &rect, &state.candidates, &state.options);
            if state.options.delays_selection() {
                let due = now + state.options.selection_delay();
                dispatcher::commit_delayed(&mut state.selection, hits, due);
            } else {
                dispatcher::commit(
                    &mut state.selection,
                    hits,
                    dispatcher::CommitMode::Gated,
                    &state.options,
                    callbacks,
                );
            }
        }
    }

    if state.options.auto_scroll {
        scroll::auto_scroll_step(state, host, now);
    }
}

/// Schließt die Session per Pointer-Up ab (Committing → Idle).
pub(crate) fn finish<H: SelectionHost>(
    state: &mut EngineState,
    host: &mut H,
    callbacks: &mut EngineCallbacks,
    input: PointerInput,
) {
    if state.options.only_select_on_drag_end && !state.is_multitouch() {
        // Genau eine finale Evaluation mit dem letzten Rechteck
        if let Some(rect) = state.session.marquee_rect() {
            let hits = evaluator::evaluate(host, &rect, &state.candidates, &state.options);
            dispatcher::commit(
                &mut state.selection,
                hits,
                dispatcher::CommitMode::Gated,
                &state.options,
                callbacks,
            );
        }
    } else {
        // Die letzte verzögerte Evaluation geht nicht verloren
        dispatcher::flush_pending(&mut state.selection, &state.options, callbacks);
    }

    reset_session(state, host);

    let final_selection = state.selection.current.to_vec();
    log::debug!("Session beendet: {} Elemente selektiert", final_selection.len());
    callbacks.emit_drag_end(Some(&input), &final_selection);
}

/// Bricht die Session ab; bereits committete Selektion bleibt erhalten.
/// Abbruch einer Idle-Session ist ein No-op (Idempotenz).
pub(crate) fn cancel<H: SelectionHost>(
    state: &mut EngineState,
    host: &mut H,
    callbacks: &mut EngineCallbacks,
    reason: CancelReason,
) {
    if state.session.phase == DragPhase::Idle {
        return;
    }

    // In-progress-Rechteck und anstehende Timer verwerfen
    dispatcher::cancel_pending(&mut state.selection);
    reset_session(state, host);

    log::debug!("Session abgebrochen: {:?}", reason);

    let selection = state.selection.current.to_vec();
    callbacks.emit_drag_end(None, &selection);
    if reason == CancelReason::Escape {
        callbacks.emit_escape();
    }
}

/// Setzt Geometrie, Timer und Host-Nebeneffekte der Session zurück.
fn reset_session<H: SelectionHost>(state: &mut EngineState, host: &mut H) {
    state.throttle.clear();
    state.auto_scroll.stop();
    state.auto_scroll.last_pointer = None;

    if state.session.text_selection_suppressed {
        host.restore_text_selection();
    }
    state.session.reset();
}

/// Liest den Container-Ursprung neu vom Host (nach Host-Scroll).
pub(crate) fn refresh_container_origin<H: SelectionHost>(state: &mut EngineState, host: &H) {
    if state.session_active() {
        state.session.origin = host.container_origin();
    }
}

/// Löst die Kandidatenliste neu auf.
pub(crate) fn refresh_candidates<H: SelectionHost>(state: &mut EngineState, host: &H) {
    state.candidates = resolver::resolve(host, &state.options);
}
