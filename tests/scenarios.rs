use striva::presets;
use striva::NumericInput;

fn type_keys(input: &mut NumericInput, keys: &[&str]) -> Vec<striva::Outcome> {
    keys.iter().map(|key| input.handle_key(key)).collect()
}

#[test]
fn pace_edit_through_both_segments() {
    let mut input = NumericInput::new(presets::pace(7.0, 15.0));
    assert_eq!(input.plain_text(), "7:15");

    input.begin_edit();
    let outcome = input.handle_key("3");
    assert_eq!(input.values(), &[3.0, 15.0]);

    let ticket = outcome.schedule_advance.expect("segment 0 is full");
    assert!(input.fire_auto_advance(ticket));
    assert_eq!(input.active_segment(), Some(1));

    type_keys(&mut input, &["0", "5"]);
    assert_eq!(input.typed(), "05");
    assert_eq!(input.values(), &[3.0, 5.0]);
    assert_eq!(input.formatted_values(), vec!["3", "05"]);
    assert_eq!(input.plain_text(), "3:05");
}

#[test]
fn distance_fills_in_hundredths() {
    let mut input = NumericInput::new(presets::distance(0.0));
    input.begin_edit();

    let mut seen = Vec::new();
    for key in ["1", "0", "9", "3"] {
        input.handle_key(key);
        seen.push(input.values()[0]);
    }
    assert_eq!(seen, vec![10.0, 10.0, 10.9, 10.93]);
    assert_eq!(input.formatted_values(), vec!["10.93"]);
}

#[test]
fn distance_commits_when_its_only_segment_fills() {
    let mut input = NumericInput::new(presets::distance(0.0));
    input.begin_edit();

    let outcomes = type_keys(&mut input, &["1", "0", "9", "3"]);
    let ticket = outcomes[3].schedule_advance.expect("segment is full");
    assert!(input.fire_auto_advance(ticket));

    assert!(!input.is_editing());
    assert_eq!(input.cursor_slot(), None);
    assert_eq!(input.values(), &[10.93]);
}

#[test]
fn one_text_event_matches_keys_across_segments() {
    let mut keys = NumericInput::new(presets::pace(7.0, 15.0));
    keys.begin_edit();
    let ticket = keys.handle_key("3").schedule_advance.expect("minutes are full");
    keys.fire_auto_advance(ticket);
    type_keys(&mut keys, &["0", "5"]);

    let mut text = NumericInput::new(presets::pace(7.0, 15.0));
    text.begin_edit();
    let outcome = text.handle_text("305");

    assert_eq!(text.values(), keys.values());
    assert_eq!(text.values(), &[3.0, 5.0]);
    assert_eq!(text.typed(), "05");
    assert_eq!(text.plain_text(), "3:05");

    let ticket = outcome.schedule_advance.expect("seconds are full");
    assert!(text.fire_auto_advance(ticket));
    assert!(!text.is_editing());
}

#[test]
fn soft_keyboard_matches_hardware_keys() {
    let mut keys = NumericInput::new(presets::time(33.0, 47.0));
    let mut text = NumericInput::new(presets::time(33.0, 47.0));
    keys.begin_edit();
    text.begin_edit();

    type_keys(&mut keys, &["1", "2"]);
    text.handle_text("1");
    text.handle_text("2");

    assert_eq!(keys.values(), text.values());
    assert_eq!(keys.typed(), text.typed());
}

#[test]
fn key_and_echoed_text_count_once() {
    let mut input = NumericInput::new(presets::time(33.0, 47.0));
    input.begin_edit();

    input.handle_key("4");
    let echoed = input.handle_text("4");

    assert!(!echoed.changed);
    assert_eq!(input.typed(), "4");
}

#[test]
fn digits_past_the_limit_are_ignored() {
    let mut input = NumericInput::new(presets::time(33.0, 47.0));
    input.begin_edit();

    type_keys(&mut input, &["5", "8", "9"]);
    assert_eq!(input.typed(), "58");
    assert_eq!(input.values()[0], 58.0);
}

#[test]
fn escape_before_auto_advance_keeps_typed_value() {
    let mut input = NumericInput::new(presets::time(33.0, 47.0));
    input.begin_edit();

    let outcomes = type_keys(&mut input, &["2", "1"]);
    let ticket = outcomes[1].schedule_advance.expect("segment 0 is full");

    let escape = input.handle_key("Escape");
    assert!(!escape.consumed);
    assert!(!input.is_editing());

    assert!(!input.fire_auto_advance(ticket));
    assert!(!input.is_editing());
    assert_eq!(input.plain_text(), "21m47");
}

#[test]
fn backspace_on_empty_first_segment_does_nothing() {
    let mut input = NumericInput::new(presets::pace(7.0, 15.0));
    input.begin_edit();

    let outcome = input.handle_key("Backspace");
    assert!(!outcome.changed);
    assert_eq!(input.active_segment(), Some(0));
    assert_eq!(input.values(), &[7.0, 15.0]);
}

#[test]
fn enter_walks_segments_then_commits() {
    let mut input = NumericInput::new(presets::time(33.0, 47.0));
    input.begin_edit();

    input.handle_key("Enter");
    assert_eq!(input.active_segment(), Some(1));
    input.handle_key("Enter");
    assert!(!input.is_editing());
    assert_eq!(input.values(), &[33.0, 47.0]);
}

#[test]
fn reset_rolls_presets_to_zero() {
    let mut input = NumericInput::new(presets::distance(10.93));
    input.reset_to_zero();
    assert_eq!(input.formatted_values(), vec!["00.00"]);
}
