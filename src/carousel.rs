/// Slide position of a wrap-around carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Keep the position valid after the slide list changed size.
    pub fn resized(self, len: usize) -> Self {
        Self {
            len,
            index: if len == 0 { 0 } else { self.index.min(len - 1) },
        }
    }

    /// Horizontal translation of the slide strip, in percent.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// Arrows are only worth drawing with more than one slide.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }
}
