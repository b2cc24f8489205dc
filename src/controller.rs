//! A complete segmented numeric input: spec, display values and editor.
//!
//! Hardware key presses and soft-keyboard text both end up in [`NumericInput::apply`],
//! so a digit behaves the same whichever channel delivered it.

use crate::editor::{AdvanceTicket, EditEvent, SegmentEditor};
use crate::format::format_value;
use crate::InputSpec;
use log::debug;

/// Keys the input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Digit(char),
    Backspace,
    Tab,
    Enter,
    Escape,
}

impl KeyInput {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(KeyInput::Backspace),
            "Tab" => Some(KeyInput::Tab),
            "Enter" => Some(KeyInput::Enter),
            "Escape" => Some(KeyInput::Escape),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(KeyInput::Digit(c)),
                    _ => None,
                }
            }
        }
    }

    fn event(self) -> EditEvent {
        match self {
            KeyInput::Digit(d) => EditEvent::Digit(d),
            KeyInput::Backspace => EditEvent::Backspace,
            KeyInput::Tab | KeyInput::Enter => EditEvent::AdvanceOrCommit,
            KeyInput::Escape => EditEvent::Cancel,
        }
    }
}

/// What the presentation layer has to do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Outcome {
    /// Something visible changed; re-render.
    pub changed: bool,
    /// The key was handled here and its browser default should be prevented.
    pub consumed: bool,
    /// Fire this ticket back after the auto-advance delay.
    pub schedule_advance: Option<AdvanceTicket>,
}

impl Outcome {
    fn merge(self, later: Outcome) -> Outcome {
        Outcome {
            changed: self.changed || later.changed,
            consumed: self.consumed || later.consumed,
            schedule_advance: later.schedule_advance.or(self.schedule_advance),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumericInput {
    spec: InputSpec,
    values: Vec<f64>,
    editor: SegmentEditor,
    /// Last digit taken from a key press, to drop its copy on the text channel.
    echo: Option<char>,
}

impl NumericInput {
    pub fn new(spec: InputSpec) -> Self {
        let values = spec.initial_values();
        Self {
            spec,
            values,
            editor: SegmentEditor::new(),
            echo: None,
        }
    }

    pub fn spec(&self) -> &InputSpec {
        &self.spec
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn formatted_values(&self) -> Vec<String> {
        self.spec
            .segments()
            .iter()
            .zip(&self.values)
            .map(|(segment, value)| format_value(*value, segment))
            .collect()
    }

    pub fn plain_text(&self) -> String {
        self.spec.plain_text(&self.values)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    pub fn active_segment(&self) -> Option<usize> {
        self.editor.active_segment()
    }

    pub fn typed(&self) -> &str {
        self.editor.typed()
    }

    pub fn cursor_slot(&self) -> Option<usize> {
        self.editor.cursor(self.spec.segments())
    }

    pub fn begin_edit(&mut self) -> Outcome {
        self.echo = None;
        self.apply(EditEvent::BeginEdit)
    }

    /// Handle a hardware key-down by its DOM key name.
    pub fn handle_key(&mut self, key: &str) -> Outcome {
        if !self.is_editing() {
            return Outcome::default();
        }
        let Some(input) = KeyInput::from_key(key) else {
            self.echo = None;
            return Outcome::default();
        };

        self.echo = match input {
            KeyInput::Digit(d) => Some(d),
            _ => None,
        };

        let outcome = self.apply(input.event());
        Outcome {
            consumed: input != KeyInput::Escape,
            ..outcome
        }
    }

    /// Handle text from the hidden soft-keyboard input, one digit at a time.
    ///
    /// Text starting with the digit just handled as a key press carries that
    /// keystroke a second time, so the digit is dropped. A segment filled
    /// while more digits follow advances at once; only a fill by the last
    /// digit leaves its advance to the timer.
    pub fn handle_text(&mut self, text: &str) -> Outcome {
        if !self.is_editing() {
            return Outcome::default();
        }
        let mut text = text;
        if let Some(echoed) = self.echo.take() {
            if let Some(rest) = text.strip_prefix(echoed) {
                debug!("Dropping echoed digit {:?} from text channel", echoed);
                text = rest;
            }
        }

        let mut digits = text.chars().filter(|c| c.is_ascii_digit()).peekable();
        let mut outcome = Outcome::default();
        while let Some(d) = digits.next() {
            let typed = self.apply(EditEvent::Digit(d));
            match typed.schedule_advance {
                Some(ticket) if digits.peek().is_some() => {
                    let advanced = self.apply(EditEvent::AutoAdvance(ticket));
                    let typed = Outcome {
                        schedule_advance: None,
                        ..typed
                    };
                    outcome = outcome.merge(typed).merge(advanced);
                }
                _ => outcome = outcome.merge(typed),
            }
        }
        outcome
    }

    /// Deliver a previously scheduled auto-advance. Returns whether it applied.
    pub fn fire_auto_advance(&mut self, ticket: AdvanceTicket) -> bool {
        let applied = self.apply(EditEvent::AutoAdvance(ticket)).changed;
        if applied {
            self.echo = None;
        }
        applied
    }

    /// Escape or focus loss.
    pub fn cancel(&mut self) -> Outcome {
        self.echo = None;
        self.apply(EditEvent::Cancel)
    }

    /// Roll every segment to zero (or its lower bound).
    pub fn reset_to_zero(&mut self) {
        self.values = self
            .spec
            .segments()
            .iter()
            .map(|segment| segment.clamp(0.0))
            .collect();
        debug!("{} reset to {:?}", self.spec.label, self.values);
    }

    fn apply(&mut self, event: EditEvent) -> Outcome {
        let transition = self.editor.handle(event, self.spec.segments());
        if let Some((segment, value)) = transition.value {
            if let Some(slot) = self.values.get_mut(segment) {
                *slot = value;
            }
        }
        Outcome {
            changed: transition.changed,
            consumed: true,
            schedule_advance: transition.schedule_advance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentSpec;

    fn time() -> NumericInput {
        let spec = InputSpec::new(
            "Time",
            vec![
                SegmentSpec::digits(2).range(0.0, 99.0).pad(2).initial(33.0),
                SegmentSpec::digits(2).range(0.0, 59.0).pad(2).initial(47.0),
            ],
        )
        .unwrap();
        NumericInput::new(spec)
    }

    #[test]
    fn key_names_map_to_inputs() {
        assert_eq!(KeyInput::from_key("7"), Some(KeyInput::Digit('7')));
        assert_eq!(KeyInput::from_key("Enter"), Some(KeyInput::Enter));
        assert_eq!(KeyInput::from_key("a"), None);
        assert_eq!(KeyInput::from_key("12"), None);
        assert_eq!(KeyInput::from_key("Unidentified"), None);
    }

    #[test]
    fn keys_are_ignored_until_editing_begins() {
        let mut input = time();
        let outcome = input.handle_key("5");
        assert!(!outcome.changed);
        assert!(!outcome.consumed);
        assert_eq!(input.values(), &[33.0, 47.0]);
    }

    #[test]
    fn typed_digits_update_display_values() {
        let mut input = time();
        input.begin_edit();
        input.handle_key("4");
        assert_eq!(input.values(), &[4.0, 47.0]);
        assert_eq!(input.formatted_values(), vec!["04", "47"]);
        assert_eq!(input.cursor_slot(), Some(1));
    }

    #[test]
    fn tab_moves_to_next_segment_and_enter_commits() {
        let mut input = time();
        input.begin_edit();
        assert!(input.handle_key("Tab").consumed);
        assert_eq!(input.active_segment(), Some(1));
        input.handle_key("Enter");
        assert!(!input.is_editing());
        assert_eq!(input.cursor_slot(), None);
    }

    #[test]
    fn escape_cancels_without_rollback() {
        let mut input = time();
        input.begin_edit();
        input.handle_key("1");
        let outcome = input.handle_key("Escape");
        assert!(outcome.changed);
        assert!(!outcome.consumed);
        assert!(!input.is_editing());
        assert_eq!(input.values(), &[1.0, 47.0]);
    }

    #[test]
    fn echoed_text_is_not_counted_twice() {
        let mut input = time();
        input.begin_edit();
        input.handle_key("1");
        assert!(!input.handle_text("1").changed);
        assert_eq!(input.typed(), "1");

        // A different digit on the text channel is a new keystroke.
        input.handle_text("2");
        assert_eq!(input.typed(), "12");
    }

    #[test]
    fn echo_is_stripped_from_longer_text() {
        let mut input = time();
        input.begin_edit();
        input.handle_key("1");
        input.handle_text("15");
        assert_eq!(input.typed(), "15");
        assert_eq!(input.values(), &[15.0, 47.0]);
    }

    #[test]
    fn advancing_forgets_the_last_key() {
        let mut input = time();
        input.begin_edit();
        input.handle_key("2");
        let ticket = input.handle_key("2").schedule_advance.unwrap();
        assert!(input.fire_auto_advance(ticket));

        // Typed on the soft keyboard alone, not a copy of the key press.
        input.handle_text("2");
        assert_eq!(input.active_segment(), Some(1));
        assert_eq!(input.typed(), "2");
    }

    #[test]
    fn text_spanning_segments_advances_between_them() {
        let mut input = time();
        input.begin_edit();
        let outcome = input.handle_text("1234");
        assert_eq!(input.values(), &[12.0, 34.0]);
        assert_eq!(input.active_segment(), Some(1));

        // The final fill still waits for the timer.
        let ticket = outcome.schedule_advance.unwrap();
        assert_eq!(ticket.segment(), 1);
        assert!(input.fire_auto_advance(ticket));
        assert!(!input.is_editing());
    }

    #[test]
    fn text_channel_replays_each_digit() {
        let mut input = time();
        input.begin_edit();
        let outcome = input.handle_text("2a5");
        assert!(outcome.changed);
        assert_eq!(input.typed(), "25");
        assert!(outcome.schedule_advance.is_some());
        assert_eq!(input.values(), &[25.0, 47.0]);
    }

    #[test]
    fn reset_to_zero_respects_bounds() {
        let spec = InputSpec::new(
            "Laps",
            vec![SegmentSpec::digits(2).range(1.0, 50.0).initial(20.0)],
        )
        .unwrap();
        let mut input = NumericInput::new(spec);
        input.reset_to_zero();
        assert_eq!(input.values(), &[1.0]);
    }
}
