//! Observer-Callbacks, die die Engine an ihre externen Kollaborateure feuert.

use crate::core::{ElementId, PointerInput};

/// Callback für Selektions-/Unselektions-Ereignisse.
pub type ElementCallback = Box<dyn FnMut(ElementId)>;
/// Callback für Drag-Start.
pub type DragStartCallback = Box<dyn FnMut(&PointerInput)>;
/// Callback für Drag-Move (Ereignis + aktuelle Selektion).
pub type DragMoveCallback = Box<dyn FnMut(&PointerInput, &[ElementId])>;
/// Callback für Drag-Ende (Ereignis fehlt beim Abbruch, finale Selektion).
pub type DragEndCallback = Box<dyn FnMut(Option<&PointerInput>, &[ElementId])>;
/// Callback für Escape-Abbruch.
pub type EscapeCallback = Box<dyn FnMut()>;

/// Registrierte Observer; alle optional, Default ist still.
#[derive(Default)]
pub struct EngineCallbacks {
    /// Element neu selektiert (höchstens einmal pro Tick)
    pub on_select: Option<ElementCallback>,
    /// Element unselektiert (höchstens einmal pro Tick)
    pub on_unselect: Option<ElementCallback>,
    /// Session gestartet
    pub on_drag_start: Option<DragStartCallback>,
    /// Zeiger während der Session bewegt
    pub on_drag_move: Option<DragMoveCallback>,
    /// Session beendet oder abgebrochen
    pub on_drag_end: Option<DragEndCallback>,
    /// Session per Escape abgebrochen
    pub on_escape: Option<EscapeCallback>,
}

impl EngineCallbacks {
    pub(crate) fn emit_select(&mut self, id: ElementId) {
        if let Some(cb) = self.on_select.as_mut() {
            cb(id);
        }
    }

    pub(crate) fn emit_unselect(&mut self, id: ElementId) {
        if let Some(cb) = self.on_unselect.as_mut() {
            cb(id);
        }
    }

    pub(crate) fn emit_drag_start(&mut self, input: &PointerInput) {
        if let Some(cb) = self.on_drag_start.as_mut() {
            cb(input);
        }
    }

    pub(crate) fn emit_drag_move(&mut self, input: &PointerInput, selection: &[ElementId]) {
        if let Some(cb) = self.on_drag_move.as_mut() {
            cb(input, selection);
        }
    }

    pub(crate) fn emit_drag_end(&mut self, input: Option<&PointerInput>, selection: &[ElementId]) {
        if let Some(cb) = self.on_drag_end.as_mut() {
            cb(input, selection);
        }
    }

    pub(crate) fn emit_escape(&mut self) {
        if let Some(cb) = self.on_escape.as_mut() {
            cb();
        }
    }
}
