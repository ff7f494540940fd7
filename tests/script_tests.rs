// Integration tests for headless scripts

use dsplay::playground::{OperationError, Playground};
use dsplay::presentation::render_plain;
use dsplay::script::{run_script, ScriptErrorKind};
use dsplay::structure::StructureKind;

#[test]
fn test_queue_script_output() {
    let source = r#"
        # queue walkthrough
        select queue
        enqueue 1
        enqueue 2
        enqueue 3
        dequeue
    "#;

    let mut pg = Playground::new(StructureKind::Stack);
    let transitions = run_script(&mut pg, source).expect("script failed");
    assert_eq!(transitions.len(), 4);

    assert_eq!(
        render_plain(&pg.snapshot()),
        "Queue (FIFO)\n  [2]  <- FRONT\n   |\n  [3]  <- REAR *\nLog:\n  Dequeued 1\n  Enqueued 3\n  Enqueued 2\n  Enqueued 1\n"
    );
}

#[test]
fn test_underflow_is_not_a_script_error() {
    let mut pg = Playground::new(StructureKind::Stack);
    let transitions = run_script(&mut pg, "pop\npush 4\n").expect("script failed");

    assert!(matches!(
        transitions[0].error(),
        Some(OperationError::Underflow { .. })
    ));
    assert_eq!(pg.snapshot().values(), vec!["4"]);
}

#[test]
fn test_parse_error_leaves_playground_untouched() {
    let mut pg = Playground::new(StructureKind::Stack);
    pg.add("1");
    let before = pg.snapshot();

    let err = run_script(&mut pg, "push 2\npop 2\n").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(matches!(err.kind, ScriptErrorKind::Intent(_)));
    assert_eq!(pg.snapshot(), before);
}

#[test]
fn test_clear_in_script() {
    let mut pg = Playground::new(StructureKind::LinkedList);
    run_script(&mut pg, "append a\nappend b\nclear\n").expect("script failed");
    assert_eq!(
        render_plain(&pg.snapshot()),
        "Linked List\n  (Empty Linked List)\nLog:\n  (empty)\n"
    );
}
