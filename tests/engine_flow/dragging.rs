use std::time::Duration;

use glam::Vec2;
use marquee_select::{
    DragPhase, ElementId, EngineCommand, EngineOptions, OverlapMode, PointerInput, SelectionEngine,
};

use super::host::{record_events, Fired, TestHost};

fn engine_with_three_boxes(options: EngineOptions) -> SelectionEngine<TestHost> {
    SelectionEngine::new(TestHost::with_three_boxes(), options).expect("Optionen sind gültig")
}

fn ids(selection: &[ElementId]) -> Vec<u64> {
    selection.iter().map(|id| id.0).collect()
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_drag_selects_partially_overlapped_boxes() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0]);

    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(215.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(16)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0, 1]);
    assert_eq!(
        *log.borrow(),
        vec![Fired::DragStart, Fired::Selected(0), Fired::Selected(1)]
    );
}

#[test]
fn test_full_overlap_mode_requires_containment() {
    let options = EngineOptions {
        overlap_mode: OverlapMode::Full,
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(205.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    // Box 1 ist nur teilweise überdeckt
    assert_eq!(ids(&engine.selection()), vec![0]);
}

#[test]
fn test_reevaluating_an_unchanged_rect_fires_no_events() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    let events_after_first = log.borrow().len();

    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(106.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(16)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    assert_eq!(log.borrow().len(), events_after_first);
    assert_eq!(ids(&engine.selection()), vec![0]);
}

#[test]
fn test_selection_delay_is_last_write_wins() {
    let options = EngineOptions {
        selection_delay_ms: 300,
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");

    // Evaluation bei t=0 (Menge A = [0])
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    // Evaluation bei t=100 (Menge B = [0, 1]), bevor der Timer feuert
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(215.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(100)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    engine.timer_tick(ms(300)).expect("Timer-Tick sollte ohne Fehler durchlaufen");
    assert!(engine.selection().is_empty());

    engine.timer_tick(ms(400)).expect("Timer-Tick sollte ohne Fehler durchlaufen");
    assert_eq!(ids(&engine.selection()), vec![0, 1]);

    // Menge A hat nie separat gefeuert
    assert_eq!(
        *log.borrow(),
        vec![Fired::DragStart, Fired::Selected(0), Fired::Selected(1)]
    );
}

#[test]
fn test_pending_delayed_commit_is_flushed_on_pointer_up() {
    let options = EngineOptions {
        selection_delay_ms: 300,
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    // Pointer-Up vor Ablauf des Timers: die Evaluation geht nicht verloren
    engine
        .pointer_released(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Up sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0]);
    assert!(engine.next_timer_deadline().is_none());
    assert_eq!(
        *log.borrow(),
        vec![Fired::DragStart, Fired::Selected(0), Fired::DragEnd(vec![0])]
    );
}

#[test]
fn test_defer_to_drag_end_evaluates_exactly_once() {
    let options = EngineOptions {
        only_select_on_drag_end: true,
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(215.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(16)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    // Während des Drags keine Selektions-Ereignisse
    assert!(engine.selection().is_empty());
    assert_eq!(*log.borrow(), vec![Fired::DragStart]);

    engine
        .pointer_released(PointerInput::new(1, Vec2::new(215.0, 100.0)))
        .expect("Pointer-Up sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0, 1]);
    assert_eq!(
        *log.borrow(),
        vec![
            Fired::DragStart,
            Fired::Selected(0),
            Fired::Selected(1),
            Fired::DragEnd(vec![0, 1]),
        ]
    );
}

#[test]
fn test_multitouch_suppresses_moves_and_preserves_selection() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");
    assert_eq!(ids(&engine.selection()), vec![0]);

    // Zweiter Zeiger: Multitouch beginnt
    engine
        .pointer_pressed(PointerInput::new(2, Vec2::new(500.0, 500.0)))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");

    let events_at_multitouch = log.borrow().len();

    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(330.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(16)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    // Selektion des Multitouch-Moments bleibt unverändert
    assert_eq!(ids(&engine.selection()), vec![0]);
    assert_eq!(log.borrow().len(), events_at_multitouch);
    assert!(engine.is_dragging());

    // Zweiter Zeiger weg: Moves laufen wieder
    engine
        .pointer_released(PointerInput::new(2, Vec2::new(500.0, 500.0)))
        .expect("Pointer-Up sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(215.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(32)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0, 1]);
}

#[test]
fn test_escape_cancels_but_keeps_committed_selection() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(105.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    engine.escape().expect("Escape sollte ohne Fehler durchlaufen");

    assert!(!engine.is_dragging());
    assert!(engine.selection_rect().is_none());
    assert_eq!(ids(&engine.selection()), vec![0]);
    assert_eq!(
        *log.borrow(),
        vec![
            Fired::DragStart,
            Fired::Selected(0),
            Fired::DragEnd(vec![0]),
            Fired::Escape,
        ]
    );

    // Abbruch einer Idle-Session ist ein No-op
    let events_after_cancel = log.borrow().len();
    engine.escape().expect("Escape sollte ohne Fehler durchlaufen");
    assert_eq!(log.borrow().len(), events_after_cancel);
}

#[test]
fn test_blur_and_context_menu_cancel_the_session() {
    for intent in ["blur", "contextmenu"] {
        let mut engine = engine_with_three_boxes(EngineOptions::default());

        engine
            .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
            .expect("Pointer-Down sollte ohne Fehler durchlaufen");
        engine
            .pointer_moved(PointerInput::new(1, Vec2::new(50.0, 50.0)))
            .expect("Pointer-Move sollte ohne Fehler durchlaufen");
        assert!(engine.is_dragging());

        match intent {
            "blur" => engine.focus_lost().expect("Blur sollte ohne Fehler durchlaufen"),
            _ => engine
                .context_menu()
                .expect("Kontextmenü sollte ohne Fehler durchlaufen"),
        }

        assert!(!engine.is_dragging());
        assert_eq!(engine.state().session.phase, DragPhase::Idle);
    }
}

#[test]
fn test_pointer_up_of_an_unknown_pointer_is_ignored() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(50.0, 50.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");

    engine
        .pointer_released(PointerInput::new(99, Vec2::new(50.0, 50.0)))
        .expect("Pointer-Up sollte ohne Fehler durchlaufen");

    assert!(engine.is_dragging());
}

#[test]
fn test_selection_cap_is_respected_during_drag() {
    let options = EngineOptions {
        max_selections: Some(2),
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(330.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0, 1]);
}

#[test]
fn test_disable_unselection_keeps_selection_until_cleared() {
    let options = EngineOptions {
        disable_unselection: true,
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);
    let log = record_events(&mut engine);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(215.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(0)).expect("Frame-Tick sollte ohne Fehler durchlaufen");
    assert_eq!(ids(&engine.selection()), vec![0, 1]);

    // Rückwärts-Drag: Selektion schrumpft nicht
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(50.0, 100.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine.frame(ms(16)).expect("Frame-Tick sollte ohne Fehler durchlaufen");
    assert_eq!(ids(&engine.selection()), vec![0, 1]);

    // clear() ist die explizite Ausnahme
    engine
        .clear_selection()
        .expect("Clear sollte ohne Fehler durchlaufen");
    assert!(engine.selection().is_empty());
    assert!(log
        .borrow()
        .iter()
        .any(|event| *event == Fired::Unselected(0)));
    assert!(log
        .borrow()
        .iter()
        .any(|event| *event == Fired::Unselected(1)));
}

#[test]
fn test_select_all_and_mutate_funnel_through_the_dispatcher() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());
    let log = record_events(&mut engine);

    engine.select_all().expect("SelectAll sollte ohne Fehler durchlaufen");
    assert_eq!(ids(&engine.selection()), vec![0, 1, 2]);

    engine
        .mutate_selection(|selection| selection[..1].to_vec())
        .expect("Mutate sollte ohne Fehler durchlaufen");
    assert_eq!(ids(&engine.selection()), vec![0]);

    assert_eq!(
        *log.borrow(),
        vec![
            Fired::Selected(0),
            Fired::Selected(1),
            Fired::Selected(2),
            Fired::Unselected(1),
            Fired::Unselected(2),
        ]
    );
}

#[test]
fn test_mutate_respects_the_selection_cap() {
    let options = EngineOptions {
        max_selections: Some(2),
        ..EngineOptions::default()
    };
    let mut engine = engine_with_three_boxes(options);

    engine
        .mutate_selection(|_| vec![ElementId(0), ElementId(1), ElementId(2)])
        .expect("Mutate sollte ohne Fehler durchlaufen");

    assert_eq!(ids(&engine.selection()), vec![0, 1]);
}

#[test]
fn test_text_selection_suppression_is_paired() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(50.0, 50.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine
        .pointer_released(PointerInput::new(1, Vec2::new(50.0, 50.0)))
        .expect("Pointer-Up sollte ohne Fehler durchlaufen");

    assert_eq!(engine.host().suppress_calls, 1);
    assert_eq!(engine.host().restore_calls, 1);
}

#[test]
fn test_selection_rect_is_container_relative() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());
    engine.host_mut().origin = Vec2::new(50.0, 20.0);

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::new(60.0, 30.0)))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(160.0, 130.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");

    let rect = engine.selection_rect().expect("Rechteck während des Drags");
    assert_eq!(rect.left, 10.0);
    assert_eq!(rect.top, 10.0);
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 100.0);
}

#[test]
fn test_finished_session_logs_finish_and_untrack_commands() {
    let mut engine = engine_with_three_boxes(EngineOptions::default());

    engine
        .pointer_pressed(PointerInput::new(1, Vec2::ZERO))
        .expect("Pointer-Down sollte ohne Fehler durchlaufen");
    engine
        .pointer_moved(PointerInput::new(1, Vec2::new(50.0, 50.0)))
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
    engine
        .pointer_released(PointerInput::new(1, Vec2::new(50.0, 50.0)))
        .expect("Pointer-Up sollte ohne Fehler durchlaufen");

    let entries = engine.state().command_log.entries();
    let last = entries.last().expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, EngineCommand::UntrackPointer { pointer_id: 1 }));
    assert!(entries
        .iter()
        .any(|command| matches!(command, EngineCommand::FinishSession { .. })));
}
