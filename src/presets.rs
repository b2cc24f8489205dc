//! The three statistics shown on the activity card.

use crate::defaults::ANIMATE_TO_ZERO_MS;
use crate::{Decoration, InputSpec, SegmentSpec};

const KM_IMAGE: &str = "/images/letters/km.png";
const SLASH_IMAGE: &str = "/images/letters/slash.png";
const COLON_IMAGE: &str = "/images/letters/doubledots.png";
const MINUTES_IMAGE: &str = "/images/letters/m.png";
const SECONDS_IMAGE: &str = "/images/letters/s.png";

fn preset(label: &str, first: SegmentSpec, rest: Vec<SegmentSpec>) -> InputSpec {
    InputSpec::from_parts(label, first, rest).with_animate_to_zero(ANIMATE_TO_ZERO_MS)
}

/// `00.00 km`
pub fn distance(initial: f64) -> InputSpec {
    preset(
        "Distance",
        SegmentSpec::digits(4)
            .decimals(2)
            .range(0.0, 99.99)
            .pad(2)
            .initial(initial),
        vec![],
    )
    .with_suffix(Decoration::image(KM_IMAGE).with_text("km"))
    .with_label_gap(18)
}

/// `m:ss /km`
pub fn pace(minutes: f64, seconds: f64) -> InputSpec {
    preset(
        "Pace",
        SegmentSpec::digits(1).range(0.0, 9.0).initial(minutes),
        vec![SegmentSpec::digits(2).range(0.0, 59.0).pad(2).initial(seconds)],
    )
    .with_separator(0, Decoration::image(COLON_IMAGE).with_text(":").with_height(35))
    .with_separator(1, Decoration::text(" "))
    .with_suffix(Decoration::image(SLASH_IMAGE).with_text("/").with_height(40))
    .with_suffix(Decoration::image(KM_IMAGE).with_text("km").with_height(35))
    .with_label_gap(15)
}

/// `mm m ss s`
pub fn time(minutes: f64, seconds: f64) -> InputSpec {
    preset(
        "Time",
        SegmentSpec::digits(2).range(0.0, 99.0).pad(2).initial(minutes),
        vec![SegmentSpec::digits(2).range(0.0, 59.0).pad(2).initial(seconds)],
    )
    .with_separator(0, Decoration::image(MINUTES_IMAGE).with_text("m").with_height(35))
    .with_separator(1, Decoration::image(SECONDS_IMAGE).with_text("s").with_height(35))
    .with_label_gap(17)
}
