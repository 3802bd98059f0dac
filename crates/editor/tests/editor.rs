// Chunk: docs/chunks/text_editor - End-to-end editing scenarios

use textkit_buffer::{MutableText, Text};
use textkit_diff::PatchError;
use textkit_editor::{EditError, Marker, TextEditor};
use textkit_interval::Interval;

#[test]
fn commit_publishes_a_patch_that_replays_the_edit() {
    let mut editor: TextEditor = TextEditor::from_str("hello");
    let events = editor.subscribe();

    let mut session = editor.begin_edit();
    session.insert(5, " world").unwrap();
    session.commit();

    let mutation = events.try_recv().unwrap();
    assert_eq!(mutation.before.to_text_string(), "hello");
    assert_eq!(mutation.after.to_text_string(), "hello world");

    // Replaying the patch on the before-content yields the after-content.
    let mut replay = textkit_buffer::CharBuffer::from_str(&mutation.before.to_text_string());
    mutation.patch.apply_to(&mut replay).unwrap();
    assert_eq!(replay.to_text_string(), mutation.after.to_text_string());

    // And restoring it walks back.
    mutation.patch.restore(&mut replay).unwrap();
    assert_eq!(replay.to_text_string(), "hello");
}

#[test]
fn every_subscriber_sees_every_commit() {
    let mut editor: TextEditor = TextEditor::from_str("a");
    let first = editor.subscribe();
    let second = editor.subscribe();

    editor.begin_edit().append("b").unwrap();
    editor.begin_edit().append("c").unwrap();

    assert_eq!(first.try_iter().count(), 2);
    assert_eq!(second.try_iter().count(), 2);
}

#[test]
fn dropped_subscribers_are_pruned() {
    let mut editor: TextEditor = TextEditor::from_str("a");
    let events = editor.subscribe();
    drop(events);

    editor.begin_edit().append("b").unwrap();
    // The disconnected receiver is discovered on publish.
    editor.begin_edit().append("c").unwrap();
    assert_eq!(editor.subscriber_count(), 0);
    assert_eq!(editor.to_string(), "abc");
}

#[test]
fn snapshot_restore_round_trip() {
    let mut editor: TextEditor = TextEditor::from_str("draft one");
    let checkpoint = editor.snapshot();

    let mut session = editor.begin_edit();
    session.replace(6, 9, "two").unwrap();
    session.commit();
    assert_eq!(editor.to_string(), "draft two");

    let patch = editor.restore_to(&checkpoint).unwrap();
    assert_eq!(editor.to_string(), "draft one");
    assert!(!patch.is_empty());
    assert_eq!(editor.revision(), 2);
}

#[test]
fn restore_publishes_a_mutation_event() {
    let mut editor: TextEditor = TextEditor::from_str("abc");
    let checkpoint = editor.snapshot();
    editor.begin_edit().append("def").unwrap();

    let events = editor.subscribe();
    editor.restore_to(&checkpoint).unwrap();

    let mutation = events.try_recv().unwrap();
    assert_eq!(mutation.before.to_text_string(), "abcdef");
    assert_eq!(mutation.after.to_text_string(), "abc");
}

#[test]
fn foreign_snapshot_is_refused() {
    let mut editor: TextEditor = TextEditor::from_str("mine");
    let other: TextEditor = TextEditor::from_str("theirs");
    let foreign = other.snapshot();

    match editor.restore_to(&foreign) {
        Err(EditError::ForeignSnapshot { snapshot_editor, editor: id }) => {
            assert_eq!(snapshot_editor, other.id());
            assert_eq!(id, editor.id());
        }
        result => panic!("expected ForeignSnapshot, got {:?}", result),
    }
    assert_eq!(editor.to_string(), "mine");
}

#[test]
fn apply_patch_commits_like_a_session() {
    let mut editor: TextEditor = TextEditor::from_str("hello world");
    let events = editor.subscribe();
    let patch = textkit_diff::diff_text("hello world", "hello there");

    editor.apply_patch(&patch).unwrap();
    assert_eq!(editor.to_string(), "hello there");
    assert_eq!(events.try_iter().count(), 1);
}

#[test]
fn stale_patch_is_rejected() {
    let mut editor: TextEditor = TextEditor::from_str("hello world");
    // Patch generated against different content of the same length.
    let patch = textkit_diff::diff_text("HELLO WORLD", "HELLO MOON!");

    match editor.apply_patch(&patch) {
        Err(EditError::Patch(PatchError::ContentMismatch { .. })) => {}
        result => panic!("expected ContentMismatch, got {:?}", result),
    }
    assert_eq!(editor.to_string(), "hello world");
    assert_eq!(editor.revision(), 0);
}

// ==================== marker tracking ====================

#[test]
fn markers_shift_with_insertions_before_them() {
    let mut editor: TextEditor<&str> = TextEditor::from_str("hello world");
    editor.add_marker(Marker::new(6..11, "world"));

    let mut session = editor.begin_edit();
    session.insert(0, ">> ").unwrap();
    session.commit();

    let marker = editor.markers().next().unwrap();
    assert_eq!(marker.range(), 9..14);
    assert_eq!(editor.slice(marker.start(), marker.end()).unwrap(), "world");
}

#[test]
fn markers_clamp_to_overlapping_deletions() {
    let mut editor: TextEditor<&str> = TextEditor::from_str("abcdefgh");
    editor.add_marker(Marker::new(2..6, "cdef"));

    let mut session = editor.begin_edit();
    session.remove(1, 4).unwrap();
    session.commit();
    assert_eq!(editor.to_string(), "aefgh");

    // Of "cdef", only "ef" survived.
    let marker = editor.markers().next().unwrap();
    assert_eq!(marker.range(), 1..3);
    assert_eq!(editor.slice(marker.start(), marker.end()).unwrap(), "ef");
}

#[test]
fn insertion_at_an_endpoint_extends_only_inclusive_markers() {
    let mut editor: TextEditor<&str> = TextEditor::from_str("one two");
    editor.add_marker(Marker::new(0..3, "inclusive"));
    editor.add_marker(Marker::exclusive(0..3, "exclusive"));

    let mut session = editor.begin_edit();
    session.insert(3, "XY").unwrap();
    session.commit();
    assert_eq!(editor.to_string(), "oneXY two");

    for marker in editor.markers() {
        match *marker.data() {
            "inclusive" => assert_eq!(marker.range(), 0..5),
            "exclusive" => assert_eq!(marker.range(), 0..3),
            other => panic!("unexpected marker {:?}", other),
        }
    }
}

#[test]
fn marker_fully_inside_a_deletion_collapses() {
    let mut editor: TextEditor<&str> = TextEditor::from_str("abcdefgh");
    editor.add_marker(Marker::new(3..5, "de"));

    let mut session = editor.begin_edit();
    session.remove(2, 7).unwrap();
    session.commit();

    let marker = editor.markers().next().unwrap();
    assert_eq!(marker.range(), 2..2);
    assert_eq!(marker.length(), 0);
}

#[test]
fn markers_follow_a_snapshot_restore() {
    let mut editor: TextEditor<&str> = TextEditor::from_str("hello world");
    let checkpoint = editor.snapshot();
    editor.add_marker(Marker::new(6..11, "world"));

    editor.begin_edit().insert(0, ">> ").unwrap();
    assert_eq!(editor.markers().next().unwrap().range(), 9..14);

    editor.restore_to(&checkpoint).unwrap();
    assert_eq!(editor.markers().next().unwrap().range(), 6..11);
}

// ==================== randomized end to end ====================

#[test]
fn random_edits_always_replay_from_events() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0xed17);
    let mut editor: TextEditor = TextEditor::from_str("seed text");
    let events = editor.subscribe();
    let mut shadow = String::from("seed text");

    for _ in 0..50 {
        let len = editor.len();
        let mut session = editor.begin_edit();
        match rng.gen_range(0..3) {
            0 => {
                let at = rng.gen_range(0..=len);
                session.insert(at, "xy").unwrap();
            }
            1 if len > 0 => {
                let start = rng.gen_range(0..len);
                let end = rng.gen_range(start..=len);
                session.remove(start, end).unwrap();
            }
            _ => {
                session.append("z").unwrap();
            }
        }
        session.commit();

        if let Ok(mutation) = events.try_recv() {
            shadow = mutation.patch.apply_to_string(&shadow).unwrap();
            assert_eq!(shadow, editor.to_string());
        } else {
            // The edit was a no-op (for instance removing an empty range).
            assert_eq!(shadow, editor.to_string());
        }
    }
}
