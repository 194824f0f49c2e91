use shape_paint::event::EventLog;
use shape_paint::{
    ActiveRef, Command, Confirmation, EditError, EditSession, EditorEvent, Outcome, PendingAction,
    Point, ShapeKind, ShapeRegistry, Tool,
};

// Helper to create a session with an event log attached
fn create_session() -> (EditSession, EventLog) {
    let session = EditSession::new(ShapeRegistry::new());
    let log = EventLog::new();
    session.subscribe(Box::new(log.clone()));
    (session, log)
}

fn draw(session: &mut EditSession, kind: ShapeKind, from: (i32, i32), to: (i32, i32)) {
    session.arm_tool(Tool::Draw(kind));
    session.pointer_down(Point::new(from.0, from.1));
    session.pointer_move(Point::new(to.0, to.1));
    session.pointer_up(Point::new(to.0, to.1));
}

fn select(session: &mut EditSession, from: (i32, i32), to: (i32, i32)) {
    session.arm_tool(Tool::Select);
    session.pointer_down(Point::new(from.0, from.1));
    session.pointer_move(Point::new(to.0, to.1));
    session.pointer_up(Point::new(to.0, to.1));
}

fn order(session: &EditSession) -> Vec<(Point, Point)> {
    session.document().shapes().map(|s| s.corners()).collect()
}

#[test]
fn test_square_drag_scenario() {
    let (mut session, _) = create_session();
    session.arm_tool(Tool::Draw(ShapeKind::Square));
    session.pointer_down(Point::new(0, 0));
    session.pointer_move(Point::new(10, 4));

    let live = session.preview().unwrap();
    assert_eq!(live.corners(), (Point::new(0, 0), Point::new(10, 10)));

    session.pointer_up(Point::new(10, 4));
    let committed = session.document().top().unwrap().shape;
    assert_eq!(committed.kind(), ShapeKind::Square);
    assert_eq!(committed.corners(), (Point::new(0, 0), Point::new(10, 10)));
    assert!(committed.validate().is_ok());
}

#[test]
fn test_circle_dragged_up_left_stays_canonical() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Circle, (50, 50), (44, 20));

    let circle = session.document().top().unwrap().shape;
    assert_eq!(circle.corners(), (Point::new(20, 20), Point::new(50, 50)));
}

#[test]
fn test_select_topmost_of_overlapping_shapes() {
    let (mut session, log) = create_session();
    draw(&mut session, ShapeKind::Rectangle, (0, 0), (50, 50)); // A
    draw(&mut session, ShapeKind::Rectangle, (10, 10), (20, 20)); // B
    let b = session.document().top().unwrap().id;
    let before = order(&session);

    select(&mut session, (5, 5), (25, 25));

    assert_eq!(session.active(), Some(&ActiveRef::Attached(b)));
    assert_eq!(order(&session), before);
    assert!(matches!(log.last(), Some(EditorEvent::ShapeSelected { id, .. }) if id == b));
}

#[test]
fn test_selection_prefers_top_and_promotes() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Ellipse, (100, 100), (120, 110));
    draw(&mut session, ShapeKind::Line, (0, 0), (10, 10));
    draw(&mut session, ShapeKind::Line, (5, 5), (8, 8));
    let bottom = session.document().all()[0].id;

    select(&mut session, (90, 90), (130, 130));

    let top = session.document().top().unwrap();
    assert_eq!(top.id, bottom);
    assert_eq!(session.document().len(), 3);
    assert_eq!(
        order(&session),
        vec![
            (Point::new(0, 0), Point::new(10, 10)),
            (Point::new(5, 5), Point::new(8, 8)),
            (Point::new(100, 100), Point::new(120, 110)),
        ]
    );
}

#[test]
fn test_selecting_empty_space_is_a_no_op() {
    let (mut session, log) = create_session();
    draw(&mut session, ShapeKind::Line, (0, 0), (10, 10));
    log.clear();

    select(&mut session, (200, 200), (300, 300));

    assert!(session.active().is_none());
    assert!(
        !log.events()
            .iter()
            .any(|event| matches!(event, EditorEvent::ShapeSelected { .. }))
    );
}

#[test]
fn test_copy_on_empty_document() {
    let (mut session, log) = create_session();
    assert!(matches!(session.copy(), Err(EditError::EmptyDocument)));
    assert!(session.document().is_empty());

    assert_eq!(session.execute(Command::Copy), Outcome::Done);
    assert!(session.document().is_empty());
    assert!(log.last().is_some_and(|event| event.is_rejection()));
}

#[test]
fn test_copy_paste_makes_independent_clone() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Rectangle, (0, 0), (10, 10));
    let original = session.document().top().unwrap().id;

    session.execute(Command::Copy);
    session.execute(Command::Paste);
    assert_eq!(session.document().len(), 2);

    let clone = session.document().top().unwrap().id;
    assert_ne!(clone, original);
    assert_eq!(session.active(), Some(&ActiveRef::Attached(clone)));

    session.arm_tool(Tool::Move);
    session.pointer_down(Point::new(0, 0));
    session.pointer_up(Point::new(7, 3));

    let document = session.document();
    assert_eq!(
        document.get(clone).unwrap().corners(),
        (Point::new(7, 3), Point::new(17, 13))
    );
    assert_eq!(
        document.get(original).unwrap().corners(),
        (Point::new(0, 0), Point::new(10, 10))
    );
}

#[test]
fn test_move_stops_at_the_coordinate_limit() {
    let (mut session, log) = create_session();
    session.execute(Command::Open(b"line: 2147483647,0 0,0 0,1,0,0,0".to_vec()));
    session.execute(Command::Copy);
    let line = session.document().top().unwrap().id;

    session.arm_tool(Tool::Move);
    session.pointer_down(Point::new(0, 0));
    session.pointer_up(Point::new(1, 0));

    assert_eq!(
        session.document().get(line).unwrap().corners(),
        (Point::new(i32::MAX, 0), Point::new(0, 0))
    );
    assert_eq!(
        log.last(),
        Some(EditorEvent::ShapeMoved {
            id: line,
            kind: ShapeKind::Line,
            dx: 0,
            dy: 0
        })
    );
    assert!(!session.is_changed());

    // The widest possible pointer jump the other way
    session.pointer_down(Point::new(i32::MAX, 0));
    session.pointer_up(Point::new(i32::MIN, 0));
    assert_eq!(
        session.document().get(line).unwrap().corners(),
        (Point::new(-1, 0), Point::new(i32::MIN, 0))
    );
    assert!(session.is_changed());
}

#[test]
fn test_paste_of_paste() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Circle, (0, 0), (6, 6));
    session.copy().unwrap();

    let first = session.paste().unwrap();
    let second = session.paste().unwrap();

    assert_ne!(first, second);
    assert_eq!(session.document().len(), 3);
    assert_eq!(session.document().top().unwrap().id, second);
}

#[test]
fn test_cut_detaches_and_can_be_pasted_back() {
    let (mut session, log) = create_session();
    draw(&mut session, ShapeKind::Line, (0, 0), (3, 3));
    draw(&mut session, ShapeKind::Ellipse, (10, 10), (20, 16));
    let ellipse = session.document().top().unwrap().shape;

    session.execute(Command::Cut);
    assert_eq!(session.document().len(), 1);
    assert_eq!(session.active(), Some(&ActiveRef::Detached(ellipse)));
    assert_eq!(log.last(), Some(EditorEvent::ShapeCut { kind: ShapeKind::Ellipse }));

    session.execute(Command::Paste);
    assert_eq!(session.document().len(), 2);
    assert_eq!(session.document().top().unwrap().shape, ellipse);
}

#[test]
fn test_deleted_reference_cannot_be_pasted() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Line, (0, 0), (3, 3));
    session.copy().unwrap();

    session.execute(Command::Delete);
    session.resolve(Confirmation::Yes);

    assert!(session.active_shape().is_none());
    assert!(matches!(session.paste(), Err(EditError::NoSelection)));
}

#[test]
fn test_delete_declined_keeps_document() {
    let (mut session, log) = create_session();
    draw(&mut session, ShapeKind::Line, (0, 0), (3, 3));

    let outcome = session.execute(Command::Delete);
    assert_eq!(outcome.pending(), Some(&PendingAction::Delete));
    session.resolve(Confirmation::Cancel);

    assert_eq!(session.document().len(), 1);
    assert!(log.last().is_some_and(|event| event.is_rejection()));
}

#[test]
fn test_unanswered_prompt_is_dropped_by_next_command() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Line, (0, 0), (3, 3));

    session.execute(Command::Delete);
    session.execute(Command::Copy);
    assert!(session.pending().is_none());

    session.resolve(Confirmation::Yes);
    assert_eq!(session.document().len(), 1);
}

#[test]
fn test_open_is_all_or_nothing() {
    let (mut session, log) = create_session();
    let good = b"line: 0,0 10,10 0,1,0,0,16777215\nsquare: 0,0 5,5 0,1,0,1,16777215\n";
    session.execute(Command::Open(good.to_vec()));
    assert_eq!(session.document().len(), 2);
    assert!(!session.is_changed());
    assert_eq!(log.last(), Some(EditorEvent::DocumentLoaded { shapes: 2 }));

    let before = order(&session);
    let bad = b"rectangle: 0,0 5,5 0,1,0,1,0\ncircle: 0,0 9,2 0,1,0,1,0\n";
    assert_eq!(session.execute(Command::Open(bad.to_vec())), Outcome::Done);

    assert_eq!(order(&session), before);
    match log.last() {
        Some(EditorEvent::Rejected { reason }) => assert!(reason.contains("line 2"), "{reason}"),
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[test]
fn test_open_over_changes_asks_first() {
    let (mut session, _) = create_session();
    draw(&mut session, ShapeKind::Line, (0, 0), (3, 3));
    let bytes = b"circle: 0,0 4,4 0,1,0,1,0\n".to_vec();

    let outcome = session.execute(Command::Open(bytes.clone()));
    assert_eq!(outcome, Outcome::NeedsConfirmation(PendingAction::Open(bytes)));
    assert_eq!(session.document().top().unwrap().shape.kind(), ShapeKind::Line);

    session.resolve(Confirmation::No);
    assert_eq!(session.document().len(), 1);
    assert_eq!(session.document().top().unwrap().shape.kind(), ShapeKind::Circle);
}

#[test]
fn test_changed_flag_tracks_edits() {
    let (mut session, _) = create_session();
    assert!(!session.is_changed());

    select(&mut session, (0, 0), (10, 10));
    assert!(!session.is_changed());

    draw(&mut session, ShapeKind::Line, (0, 0), (3, 3));
    assert!(session.is_changed());

    session.execute(Command::New);
    session.resolve(Confirmation::No);
    assert!(!session.is_changed());
    assert!(session.document().is_empty());
}

#[test]
fn test_arming_tools_sets_special() {
    let (mut session, log) = create_session();
    for kind in ShapeKind::ALL {
        session.execute(Command::ChangeTool(Tool::Draw(kind)));
        assert_eq!(session.is_special(), kind.is_special());
        assert!(session.gesture().is_idle());
    }
    session.execute(Command::ChangeTool(Tool::Move));
    assert!(!session.is_special());
    assert_eq!(
        log.last(),
        Some(EditorEvent::ToolChanged {
            old: Tool::Draw(ShapeKind::Circle),
            new: Tool::Move
        })
    );
}
