//! Zentrale Konfiguration der Selektions-Engine.
//!
//! `EngineOptions` enthält die pro Engine-Instanz unveränderliche Policy.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ElementId, OverlapMode};

// ── Kandidaten ──────────────────────────────────────────────────────

/// Standard-Kriterium: alle Elemente des Scopes.
pub const DEFAULT_SELECT_CRITERIA: &str = "*";

// ── Selektion ───────────────────────────────────────────────────────

/// Zusätzlicher Rand (px) beim Überlappungstest.
pub const SELECTION_TOLERANCE: f32 = 0.0;
/// Verzögerung (ms) zwischen Evaluation und Commit; 0 = sofort.
pub const SELECTION_DELAY_MS: u64 = 0;

// ── Auto-Scroll ─────────────────────────────────────────────────────

/// Randabstand (px), ab dem Auto-Scroll einsetzt.
pub const AUTO_SCROLL_EDGE_DISTANCE: f32 = 100.0;
/// Scroll-Schrittweite (px) bei voller Intensität.
pub const AUTO_SCROLL_STEP: f32 = 30.0;
/// Wiederhol-Intervall (ms) des Auto-Scroll-Timers.
pub const AUTO_SCROLL_INTERVAL_MS: u64 = 30;

/// Aktivierungs-Policy: wann ein Pointer-Down eine Drag-Session startet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivationPolicy {
    /// Jeder primäre Pointer-Down startet die Selektion.
    #[default]
    Always,
    /// Nur mit gedrücktem Modifier (Shift, Ctrl, Alt oder Cmd).
    AnyModifier,
    /// Nur mit einer der benannten gehaltenen Tasten (z.B. "CapsLock").
    NamedKeys(Vec<String>),
}

/// Ausschlusszone: von hier kann keine Drag-Session starten, und die
/// Ziel-Elemente sind nie Kandidaten.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ExclusionZone {
    /// Keine Ausschlusszone
    #[default]
    None,
    /// Host-interpretiertes Kriterium (z.B. CSS-Selektor)
    Criterion(String),
    /// Explizite Element-Liste
    Elements(Vec<ElementId>),
}

/// Pro Engine-Instanz unveränderliche Selektions-Policy.
/// Kann optional als TOML-Datei neben der Host-Anwendung gespeichert werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    // ── Kandidaten ──────────────────────────────────────────────
    /// Host-interpretiertes Match-Kriterium für Kandidaten
    pub select_criteria: String,
    /// Obergrenze der Selektionsgröße; `None` = unbegrenzt
    pub max_selections: Option<usize>,

    // ── Intersektion ────────────────────────────────────────────
    /// Zusätzlicher Rand (px) beim Überlappungstest
    pub selection_tolerance: f32,
    /// Partial- oder Full-Überlappung
    pub overlap_mode: OverlapMode,

    // ── Commit-Timing ───────────────────────────────────────────
    /// Verzögerung (ms) vor dem Commit einer Evaluation; 0 = sofort
    pub selection_delay_ms: u64,
    /// Evaluation erst bei Drag-Ende statt kontinuierlich
    pub only_select_on_drag_end: bool,
    /// Unselektion unterdrücken: Selektion wächst nur noch
    pub disable_unselection: bool,

    // ── Aktivierung ─────────────────────────────────────────────
    /// Wann ein Pointer-Down die Session startet
    pub activation: ActivationPolicy,
    /// Zone, aus der kein Drag starten kann
    #[serde(default)]
    pub exclusion_zone: ExclusionZone,

    // ── Auto-Scroll ─────────────────────────────────────────────
    /// Container beim Drag automatisch zum Rand scrollen
    pub auto_scroll: bool,
    /// Randabstand (px), ab dem gescrollt wird
    pub auto_scroll_edge_distance: f32,
    /// Scroll-Schrittweite (px) bei voller Intensität
    pub auto_scroll_step: f32,
    /// Session bei Host-Scroll abbrechen (inkompatibel mit `auto_scroll`)
    #[serde(default)]
    pub hide_on_scroll: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            select_criteria: DEFAULT_SELECT_CRITERIA.to_string(),
            max_selections: None,

            selection_tolerance: SELECTION_TOLERANCE,
            overlap_mode: OverlapMode::Partial,

            selection_delay_ms: SELECTION_DELAY_MS,
            only_select_on_drag_end: false,
            disable_unselection: false,

            activation: ActivationPolicy::Always,
            exclusion_zone: ExclusionZone::None,

            auto_scroll: true,
            auto_scroll_edge_distance: AUTO_SCROLL_EDGE_DISTANCE,
            auto_scroll_step: AUTO_SCROLL_STEP,
            hide_on_scroll: false,
        }
    }
}

impl EngineOptions {
    /// Prüft die Konfiguration; Fehler werden sofort und genau einmal
    /// gemeldet statt später stilles Fehlverhalten zu erzeugen.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.auto_scroll && self.hide_on_scroll {
            anyhow::bail!("auto_scroll und hide_on_scroll schließen sich gegenseitig aus");
        }
        if self.auto_scroll && self.auto_scroll_edge_distance <= 0.0 {
            anyhow::bail!("auto_scroll_edge_distance muss positiv sein");
        }

        Ok(())
    }

    /// Selektions-Verzögerung als `Duration`.
    pub fn selection_delay(&self) -> Duration {
        Duration::from_millis(self.selection_delay_ms)
    }

    /// `true`, wenn Commits verzögert erfolgen.
    pub fn delays_selection(&self) -> bool {
        self.selection_delay_ms > 0
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
