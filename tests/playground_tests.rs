// Integration tests for the operation core

use dsplay::playground::{Effect, Intent, IntentKind, LogEntry, OperationError, Playground};
use dsplay::presentation::{describe, Link, RoleLabel};
use dsplay::structure::{StructureKind, Value};

fn filled(kind: StructureKind, values: &[&str]) -> Playground {
    let mut pg = Playground::new(kind);
    for v in values {
        assert!(pg.add(v).is_ok(), "adding {} failed", v);
    }
    pg
}

#[test]
fn test_stack_pops_in_reverse_order() {
    let values = ["1", "two", "3", "3", "-5"];
    let mut pg = filled(StructureKind::Stack, &values);

    let mut popped = Vec::new();
    for _ in 0..values.len() {
        let t = pg.submit(Intent::pop());
        popped.push(t.removed_value().expect("pop failed").to_string());
    }

    let expected: Vec<String> = values.iter().rev().map(|s| s.to_string()).collect();
    assert_eq!(popped, expected);
    assert!(pg.is_empty());
}

#[test]
fn test_queue_dequeues_in_insertion_order() {
    let values = ["a", "b", "c", "d"];
    let mut pg = filled(StructureKind::Queue, &values);

    let dequeued: Vec<String> = (0..values.len())
        .map(|_| pg.submit(Intent::delete()).removed_value().unwrap().to_string())
        .collect();

    assert_eq!(dequeued, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_underflow_never_changes_length() {
    for kind in StructureKind::ALL {
        let mut pg = Playground::new(kind);
        for _ in 0..3 {
            let t = pg.remove();
            assert_eq!(t.result, Err(OperationError::Underflow { structure: kind }));
            assert_eq!(pg.len(), 0);
        }
        // Each underflow is logged
        assert_eq!(pg.log().len(), 3);
        assert!(pg.latest_entry().unwrap().is_error());
        assert_eq!(
            pg.latest_entry().unwrap().message,
            format!("Error: {} Underflow", kind.noun())
        );
    }
}

#[test]
fn test_clear_empties_sequence_and_log() {
    for kind in StructureKind::ALL {
        let mut pg = filled(kind, &["1", "2", "3"]);
        pg.remove();
        assert!(!pg.log().is_empty());

        let t = pg.submit(Intent::clear());
        assert_eq!(t.result, Ok(Effect::Cleared));
        assert!(pg.is_empty());
        assert!(pg.log().is_empty());
    }
}

#[test]
fn test_blank_add_is_a_no_op() {
    for kind in StructureKind::ALL {
        let mut pg = filled(kind, &["x"]);
        let before = pg.snapshot();

        for blank in ["", "   ", "\t"] {
            let t = pg.add(blank);
            assert_eq!(
                t.result,
                Err(OperationError::Validation {
                    intent: IntentKind::add_for(kind)
                })
            );
            assert!(t.entry.is_none());
        }
        let missing = pg.submit(Intent::new(IntentKind::add_for(kind)));
        assert!(missing.entry.is_none());

        assert_eq!(pg.snapshot(), before);
    }
}

#[test]
fn test_switching_resets_everything() {
    let mut pg = filled(StructureKind::Stack, &["1", "2"]);
    pg.select_structure(StructureKind::Queue);
    assert_eq!(pg.kind(), StructureKind::Queue);
    assert!(pg.is_empty());
    assert!(pg.log().is_empty());

    // Reselecting the same kind also resets
    pg.add("9");
    pg.select_structure(StructureKind::Queue);
    assert!(pg.is_empty());
    assert!(pg.log().is_empty());
}

#[test]
fn test_identities_never_repeat() {
    let mut pg = Playground::new(StructureKind::Stack);
    let mut seen = Vec::new();
    seen.push(pg.add("1").added().unwrap().id);
    pg.clear();
    seen.push(pg.add("1").added().unwrap().id);
    pg.select_structure(StructureKind::LinkedList);
    seen.push(pg.add("1").added().unwrap().id);

    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_mismatched_intent_is_ignored() {
    let mut pg = filled(StructureKind::Queue, &["1"]);
    let before = pg.snapshot();

    let t = pg.submit(Intent::pop());
    assert_eq!(
        t.result,
        Err(OperationError::Mismatch {
            intent: IntentKind::Pop,
            structure: StructureKind::Queue
        })
    );
    assert_eq!(pg.snapshot(), before);
}

#[test]
fn test_stack_scenario() {
    let mut pg = Playground::new(StructureKind::Stack);
    pg.submit(Intent::push("3"));
    pg.submit(Intent::push("7"));

    let t = pg.submit(Intent::pop());
    assert_eq!(t.removed_value(), Some(&Value::Int(7)));
    assert_eq!(pg.snapshot().values(), vec!["3"]);

    let t = pg.submit(Intent::pop());
    assert_eq!(t.removed_value(), Some(&Value::Int(3)));
    assert!(pg.is_empty());

    let t = pg.submit(Intent::pop());
    assert!(matches!(t.error(), Some(OperationError::Underflow { .. })));
    assert!(pg.is_empty());

    assert_eq!(
        pg.snapshot().messages(),
        vec![
            "Error: Stack Underflow",
            "Popped 3 from Stack",
            "Popped 7 from Stack",
            "Pushed 7 to Stack",
            "Pushed 3 to Stack",
        ]
    );
}

#[test]
fn test_queue_scenario() {
    let mut pg = Playground::new(StructureKind::Queue);
    for v in ["1", "2", "3"] {
        pg.submit(Intent::insert(v));
    }

    let t = pg.submit(Intent::delete());
    assert_eq!(t.removed_value(), Some(&Value::Int(1)));
    assert_eq!(pg.snapshot().values(), vec!["2", "3"]);

    let t = pg.submit(Intent::delete());
    assert_eq!(t.removed_value(), Some(&Value::Int(2)));
    assert_eq!(pg.snapshot().values(), vec!["3"]);
    assert_eq!(pg.latest_entry(), Some(&LogEntry::info("Dequeued 2")));
}

#[test]
fn test_linked_list_scenario() {
    let mut pg = Playground::new(StructureKind::LinkedList);
    pg.submit(Intent::append("a"));
    pg.submit(Intent::append("b"));

    let snapshot = pg.snapshot();
    assert_eq!(snapshot.values(), vec!["a", "b"]);

    let nodes = describe(snapshot.kind, &snapshot.elements);
    assert!(nodes[0].has_label(RoleLabel::Head));
    assert_eq!(nodes[0].link, Some(Link::Next));
    assert_eq!(nodes[1].link, None);
    assert!(nodes[1].is_newest);
}

#[test]
fn test_duplicate_values_stay_distinct() {
    let mut pg = filled(StructureKind::Queue, &["5", "5"]);
    let snapshot = pg.snapshot();
    assert_ne!(snapshot.elements[0].id, snapshot.elements[1].id);

    let first_id = snapshot.elements[0].id;
    let t = pg.remove();
    assert_eq!(t.result, Ok(Effect::Removed(snapshot.elements[0].clone())));
    assert_ne!(pg.snapshot().elements[0].id, first_id);
}
