//! Handler für imperative Selektions-Operationen (selectAll/clear/mutate).

use crate::core::{ElementId, SelectionHost, SelectionSet};
use crate::engine::callbacks::EngineCallbacks;
use crate::engine::state::EngineState;
use crate::engine::{dispatcher, resolver};

/// Selektiert alle Kandidaten des Kriteriums über den Dispatcher.
pub(crate) fn select_all<H: SelectionHost>(
    state: &mut EngineState,
    host: &mut H,
    callbacks: &mut EngineCallbacks,
) {
    let all: SelectionSet = resolver::resolve(host, &state.options).into_iter().collect();
    let count = all.len();

    dispatcher::commit(
        &mut state.selection,
        all,
        dispatcher::CommitMode::Gated,
        &state.options,
        callbacks,
    );

    log::info!("Alle {} Kandidaten selektiert", count);
}

/// Leert die Selektion explizit; umgeht `disable_unselection`.
pub(crate) fn clear(state: &mut EngineState, callbacks: &mut EngineCallbacks) {
    dispatcher::commit(
        &mut state.selection,
        SelectionSet::new(),
        dispatcher::CommitMode::Forced,
        &state.options,
        callbacks,
    );
}

/// Committet eine extern bestimmte Selektion (mutate-Pfad); Cap- und
/// Diff-Invarianten gelten unverändert.
pub(crate) fn commit_external(
    state: &mut EngineState,
    callbacks: &mut EngineCallbacks,
    ids: Vec<ElementId>,
) {
    let new_selection: SelectionSet = ids.into_iter().collect();
    dispatcher::commit(
        &mut state.selection,
        new_selection,
        dispatcher::CommitMode::Gated,
        &state.options,
        callbacks,
    );
}
