//! Auto-Scroll-Controller: scrollt den Container zum Rand, solange der
//! Zeiger in der Randzone bleibt.

use std::time::Duration;

use glam::Vec2;

use crate::core::SelectionHost;
use crate::engine::state::EngineState;
use crate::shared::options::AUTO_SCROLL_INTERVAL_MS;

/// Führt einen Auto-Scroll-Schritt aus und plant bei Bedarf den nächsten.
///
/// Die Scroll-Intensität wächst linear zur Randnähe; die Position wird auf
/// den tatsächlich scrollbaren Bereich geklammert. Ohne Randkontakt oder
/// bei gesättigtem Scroll endet die Reschedule-Schleife.
pub(crate) fn auto_scroll_step<H: SelectionHost>(
    state: &mut EngineState,
    host: &mut H,
    now: Duration,
) {
    let Some(pointer_doc) = state.auto_scroll.last_pointer else {
        state.auto_scroll.stop();
        return;
    };

    let scroll = host.scroll_offset();
    let viewport = host.viewport_size();
    let edge = state.options.auto_scroll_edge_distance;
    let step = state.options.auto_scroll_step;

    // Zeigerposition im Viewport: Dokument-Position minus Scroll-Offset
    let pointer = pointer_doc - scroll;

    let edge_right = viewport.x - edge;
    let edge_bottom = viewport.y - edge;
    let in_left = pointer.x < edge;
    let in_right = pointer.x > edge_right;
    let in_top = pointer.y < edge;
    let in_bottom = pointer.y > edge_bottom;

    if !(in_left || in_right || in_top || in_bottom) {
        state.auto_scroll.stop();
        return;
    }

    let range = host.scroll_range();
    let mut next = scroll;

    if in_left && scroll.x > 0.0 {
        let intensity = (edge - pointer.x) / edge;
        next.x -= step * intensity;
    } else if in_right && scroll.x < range.x {
        let intensity = (pointer.x - edge_right) / edge;
        next.x += step * intensity;
    }

    if in_top && scroll.y > 0.0 {
        let intensity = (edge - pointer.y) / edge;
        next.y -= step * intensity;
    } else if in_bottom && scroll.y < range.y {
        let intensity = (pointer.y - edge_bottom) / edge;
        next.y += step * intensity;
    }

    next = next.clamp(Vec2::ZERO, range);

    if next != scroll {
        host.scroll_to(next);
        state.auto_scroll.wakeup_due = Some(now + Duration::from_millis(AUTO_SCROLL_INTERVAL_MS));
    } else {
        state.auto_scroll.stop();
    }
}
