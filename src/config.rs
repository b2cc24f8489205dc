//! Page-level configuration constants.

// Card contents
pub const TAGLINE: &str = "None of the sweat. All of the flex.";
pub const BRAND: &str = "STRIVA";
pub const DEFAULT_DISTANCE_KM: f64 = 10.93;
pub const DEFAULT_PACE: (f64, f64) = (7.0, 15.0);
pub const DEFAULT_TIME: (f64, f64) = (33.0, 47.0);

pub const ROUTE_IMAGES: [&str; 4] = [
    "/images/routes/basic01.png",
    "/images/routes/bed.png",
    "/images/routes/middlefinger.png",
    "/images/routes/scribble.png",
];

// Carousel
pub const CAROUSEL_AUTOPLAY_MS: u32 = 5000;

// Digit display
pub const DIGIT_HEIGHT_PX: u32 = 35;
pub const DECORATION_HEIGHT_PX: u32 = 35;

/// Image drawn for a display character; punctuation shares the dot glyph.
pub fn digit_image(c: char) -> &'static str {
    match c {
        '0' => "/images/digits/zero.png",
        '1' => "/images/digits/one.png",
        '2' => "/images/digits/two.png",
        '3' => "/images/digits/three.png",
        '4' => "/images/digits/four.png",
        '5' => "/images/digits/five.png",
        '6' => "/images/digits/six.png",
        '7' => "/images/digits/seven.png",
        '8' => "/images/digits/eight.png",
        '9' => "/images/digits/nine.png",
        _ => "/images/digits/dot.png",
    }
}

pub fn label_image(label: &str) -> Option<&'static str> {
    match label {
        "Distance" => Some("/images/labels/labelDistance.png"),
        "Time" => Some("/images/labels/labelTime.png"),
        "Pace" => Some("/images/labels/labelPace.png"),
        _ => None,
    }
}
