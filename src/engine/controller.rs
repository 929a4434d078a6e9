//! Engine Controller für zentrale Event-Verarbeitung.

use crate::core::SelectionHost;

use super::callbacks::EngineCallbacks;
use super::events::{EngineCommand, EngineIntent};
use super::state::EngineState;
use super::{dispatcher, handlers, intent_mapping};

/// Orchestriert Host-Events und Handler auf dem EngineState.
#[derive(Default)]
pub struct EngineController;

impl EngineController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<H: SelectionHost>(
        &mut self,
        state: &mut EngineState,
        host: &mut H,
        callbacks: &mut EngineCallbacks,
        intent: EngineIntent,
    ) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, host, callbacks, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EngineState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<H: SelectionHost>(
        &mut self,
        state: &mut EngineState,
        host: &mut H,
        callbacks: &mut EngineCallbacks,
        command: EngineCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            // === Zeiger-Tracking ===
            EngineCommand::TrackPointer { pointer_id } => {
                handlers::session::track_pointer(state, pointer_id)
            }
            EngineCommand::UntrackPointer { pointer_id } => {
                handlers::session::untrack_pointer(state, pointer_id)
            }

            // === Session-Lebenszyklus ===
            EngineCommand::ArmSession { input } => {
                handlers::session::arm(state, host, callbacks, input)
            }
            EngineCommand::UpdateDragPoint { input } => {
                handlers::session::update_drag_point(state, callbacks, input)
            }
            EngineCommand::FinishSession { input } => {
                handlers::session::finish(state, host, callbacks, input)
            }
            EngineCommand::CancelSession { reason } => {
                handlers::session::cancel(state, host, callbacks, reason)
            }
            EngineCommand::RefreshContainerOrigin => {
                handlers::session::refresh_container_origin(state, host)
            }
            EngineCommand::RefreshCandidates => {
                handlers::session::refresh_candidates(state, host)
            }

            // === Evaluation & Timer ===
            EngineCommand::RunQueuedEvaluation { now } => {
                handlers::session::run_queued_evaluation(state, host, callbacks, now)
            }
            EngineCommand::FireDelayedCommit { now } => {
                dispatcher::fire_due(&mut state.selection, now, &state.options, callbacks)
            }
            EngineCommand::AutoScrollStep { now } => {
                handlers::scroll::auto_scroll_step(state, host, now)
            }

            // === Imperative Selektion ===
            EngineCommand::SelectAllCandidates => {
                handlers::selection::select_all(state, host, callbacks)
            }
            EngineCommand::ClearSelection => handlers::selection::clear(state, callbacks),
            EngineCommand::CommitExternalSelection { ids } => {
                handlers::selection::commit_external(state, callbacks, ids)
            }
        }

        Ok(())
    }
}
