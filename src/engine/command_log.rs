//! Command-Log für Diagnose und Flow-Tests.

use super::events::EngineCommand;

/// Speichert ausgeführte Commands in Ausführungs-Reihenfolge.
///
/// Begrenzt auf [`CommandLog::MAX_ENTRIES`]; beim Überlauf wird die ältere
/// Hälfte verworfen.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<EngineCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: EngineCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn noch kein Command geloggt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[EngineCommand] {
        &self.entries
    }
}
