use std::fmt;

pub mod carousel;
pub mod controller;
pub mod cursor;
pub mod editor;
pub mod export;
pub mod focus;
pub mod format;
pub mod presets;
pub mod rolling;

pub use controller::{KeyInput, NumericInput, Outcome};
pub use cursor::cursor_slot;
pub use editor::{AdvanceTicket, EditEvent, EditState, SegmentEditor};
pub use format::{format_value, parse_typed_digits};

/// Default timing and layout parameters
pub mod defaults {
    /// Delay before a full segment hands the cursor to the next one.
    pub const AUTO_ADVANCE_MS: u32 = 300;
    /// Delay between the hidden input losing focus and editing being cancelled.
    pub const BLUR_CANCEL_MS: u32 = 100;
    /// Delay before display values roll to zero after mount.
    pub const ANIMATE_TO_ZERO_MS: u32 = 1000;
    /// Width of the cursor slot band reserved for each segment.
    pub const SLOT_BAND: usize = 100;
    /// Time given to the UI to hide navigation before capture.
    pub const EXPORT_SETTLE_MS: u32 = 100;
    pub const EXPORT_FILE_NAME: &str = "striva-export.png";
}

/// Configuration for one independently editable number.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSpec {
    pub initial_value: f64,
    pub max_digits: usize,
    pub decimal_places: Option<usize>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// Zero-pad width of the integer part.
    pub pad_start: Option<usize>,
}

impl SegmentSpec {
    /// A segment accepting up to `max_digits` typed digits (at least one).
    pub fn digits(max_digits: usize) -> Self {
        Self {
            initial_value: 0.0,
            max_digits: max_digits.max(1),
            decimal_places: None,
            min_value: None,
            max_value: None,
            pad_start: None,
        }
    }

    pub fn decimals(mut self, places: usize) -> Self {
        self.decimal_places = Some(places.min(self.max_digits));
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub fn pad(mut self, width: usize) -> Self {
        self.pad_start = Some(width);
        self
    }

    pub fn initial(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    /// Number of typed digits that land left of the decimal point.
    pub fn integer_digits(&self) -> usize {
        self.max_digits
            .saturating_sub(self.decimal_places.unwrap_or(0))
    }

    /// Saturate `value` into `[min_value, max_value]`.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(min) = self.min_value {
            v = v.max(min);
        }
        if let Some(max) = self.max_value {
            v = v.min(max);
        }
        v
    }
}

/// Cosmetic text or image shown between or after segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decoration {
    pub text: Option<String>,
    pub image_path: Option<String>,
    /// Rendered height in pixels.
    pub height: Option<u32>,
}

impl Decoration {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn image(path: &str) -> Self {
        Self {
            image_path: Some(path.to_string()),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpecError {
    NoSegments,
}

impl fmt::Display for InputSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSpecError::NoSegments => write!(f, "An input needs at least one segment"),
        }
    }
}

impl std::error::Error for InputSpecError {}

/// Full configuration of a segmented numeric input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    pub label: String,
    segments: Vec<SegmentSpec>,
    /// `separators[i]` is drawn after segment `i`.
    pub separators: Vec<Option<Decoration>>,
    pub suffixes: Vec<Decoration>,
    /// Roll every segment to zero this many milliseconds after mount.
    pub animate_to_zero: Option<u32>,
    /// Gap between label and digits, in pixels.
    pub label_gap: u32,
}

impl InputSpec {
    pub fn new(label: &str, segments: Vec<SegmentSpec>) -> Result<Self, InputSpecError> {
        let mut segments = segments.into_iter();
        let first = segments.next().ok_or(InputSpecError::NoSegments)?;
        Ok(Self::from_parts(label, first, segments.collect()))
    }

    /// Non-empty by construction.
    pub fn from_parts(label: &str, first: SegmentSpec, rest: Vec<SegmentSpec>) -> Self {
        let mut segments = Vec::with_capacity(rest.len() + 1);
        segments.push(first);
        segments.extend(rest);
        Self {
            label: label.to_string(),
            segments,
            separators: Vec::new(),
            suffixes: Vec::new(),
            animate_to_zero: None,
            label_gap: 18,
        }
    }

    pub fn with_separator(mut self, after_segment: usize, decoration: Decoration) -> Self {
        if self.separators.len() <= after_segment {
            self.separators.resize(after_segment + 1, None);
        }
        self.separators[after_segment] = Some(decoration);
        self
    }

    pub fn with_suffix(mut self, decoration: Decoration) -> Self {
        self.suffixes.push(decoration);
        self
    }

    pub fn with_animate_to_zero(mut self, delay_ms: u32) -> Self {
        self.animate_to_zero = Some(delay_ms);
        self
    }

    pub fn with_label_gap(mut self, gap: u32) -> Self {
        self.label_gap = gap;
        self
    }

    pub fn segments(&self) -> &[SegmentSpec] {
        &self.segments
    }

    pub fn separator(&self, after_segment: usize) -> Option<&Decoration> {
        self.separators.get(after_segment).and_then(|s| s.as_ref())
    }

    /// Initial display values, clamped to each segment's bounds.
    pub fn initial_values(&self) -> Vec<f64> {
        self.segments
            .iter()
            .map(|s| s.clamp(s.initial_value))
            .collect()
    }

    /// Segments joined with their separators' text, e.g. `"3:05"`.
    /// Image-only separators and suffixes contribute nothing.
    pub fn plain_text(&self, values: &[f64]) -> String {
        let mut out = String::new();
        for (i, (segment, value)) in self.segments.iter().zip(values).enumerate() {
            out.push_str(&format_value(*value, segment));
            if let Some(text) = self.separator(i).and_then(|d| d.text.as_deref()) {
                if i + 1 < self.segments.len() {
                    out.push_str(text);
                }
            }
        }
        out
    }
}
