//! Editing state machine shared by all segments of one numeric input.
//!
//! The editor only tracks which segment is active and what has been typed
//! into it. Display values live with the caller, which applies the
//! `value` of each [`Transition`].

use crate::cursor::cursor_slot;
use crate::format::parse_typed_digits;
use crate::SegmentSpec;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { segment: usize, typed: String },
}

/// Tags a scheduled auto-advance with the editor generation it was issued at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
    segment: usize,
}

impl AdvanceTicket {
    pub fn segment(&self) -> usize {
        self.segment
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    BeginEdit,
    Digit(char),
    Backspace,
    /// Tab or Enter.
    AdvanceOrCommit,
    /// A scheduled auto-advance firing.
    AutoAdvance(AdvanceTicket),
    /// Escape or focus loss.
    Cancel,
}

/// Effect of one event on the editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub changed: bool,
    /// New display value for a segment, computed from its typed digits.
    pub value: Option<(usize, f64)>,
    /// Set when the active buffer just filled up.
    pub schedule_advance: Option<AdvanceTicket>,
}

#[derive(Default)]
struct Step {
    changed: bool,
    value: Option<(usize, f64)>,
    filled: Option<usize>,
}

impl Step {
    fn moved() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SegmentEditor {
    state: EditState,
    generation: u64,
}

impl SegmentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn active_segment(&self) -> Option<usize> {
        match &self.state {
            EditState::Editing { segment, .. } => Some(*segment),
            EditState::Idle => None,
        }
    }

    /// Digits typed into the active segment; empty when idle.
    pub fn typed(&self) -> &str {
        match &self.state {
            EditState::Editing { typed, .. } => typed,
            EditState::Idle => "",
        }
    }

    pub fn cursor(&self, segments: &[SegmentSpec]) -> Option<usize> {
        match &self.state {
            EditState::Editing { segment, typed } => segments
                .get(*segment)
                .map(|spec| cursor_slot(*segment, typed.len(), spec)),
            EditState::Idle => None,
        }
    }

    /// Apply one event. Never fails; events that do not fit the current
    /// state leave it untouched.
    pub fn handle(&mut self, event: EditEvent, segments: &[SegmentSpec]) -> Transition {
        let step = match event {
            EditEvent::BeginEdit => self.begin(segments),
            EditEvent::Digit(d) => self.push_digit(d, segments),
            EditEvent::Backspace => self.backspace(segments),
            EditEvent::AdvanceOrCommit => self.advance(segments),
            EditEvent::AutoAdvance(ticket) => {
                if ticket.generation == self.generation {
                    self.advance(segments)
                } else {
                    debug!(
                        "Dropping stale auto-advance for segment {} (generation {} != {})",
                        ticket.segment, ticket.generation, self.generation
                    );
                    Step::default()
                }
            }
            EditEvent::Cancel => self.cancel(),
        };

        if step.changed {
            self.generation = self.generation.wrapping_add(1);
        }

        Transition {
            changed: step.changed,
            value: step.value,
            schedule_advance: step.filled.map(|segment| AdvanceTicket {
                generation: self.generation,
                segment,
            }),
        }
    }

    fn begin(&mut self, segments: &[SegmentSpec]) -> Step {
        if self.is_editing() || segments.is_empty() {
            return Step::default();
        }
        self.state = EditState::Editing {
            segment: 0,
            typed: String::new(),
        };
        Step::moved()
    }

    fn push_digit(&mut self, d: char, segments: &[SegmentSpec]) -> Step {
        let EditState::Editing { segment, typed } = &mut self.state else {
            return Step::default();
        };
        let Some(spec) = segments.get(*segment) else {
            return Step::default();
        };
        if !d.is_ascii_digit() || typed.len() >= spec.max_digits {
            return Step::default();
        }

        typed.push(d);
        let value = parse_typed_digits(typed, spec);
        debug!("Segment {} buffer {:?} -> {}", segment, typed, value);

        Step {
            changed: true,
            value: Some((*segment, value)),
            filled: (typed.len() == spec.max_digits).then_some(*segment),
        }
    }

    fn backspace(&mut self, segments: &[SegmentSpec]) -> Step {
        let EditState::Editing { segment, typed } = &mut self.state else {
            return Step::default();
        };

        if typed.pop().is_some() {
            let value = segments
                .get(*segment)
                .map(|spec| (*segment, parse_typed_digits(typed, spec)));
            return Step {
                changed: true,
                value,
                filled: None,
            };
        }

        if *segment > 0 {
            *segment -= 1;
            return Step::moved();
        }

        Step::default()
    }

    fn advance(&mut self, segments: &[SegmentSpec]) -> Step {
        let EditState::Editing { segment, typed } = &mut self.state else {
            return Step::default();
        };

        if *segment + 1 < segments.len() {
            *segment += 1;
            typed.clear();
        } else {
            debug!("Last segment committed, editing finished");
            self.state = EditState::Idle;
        }
        Step::moved()
    }

    fn cancel(&mut self) -> Step {
        if !self.is_editing() {
            return Step::default();
        }
        self.state = EditState::Idle;
        Step::moved()
    }
}
