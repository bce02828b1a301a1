use std::time::Duration;

/// Autoplay advances one slide per interval.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
pub const MAX_SLIDES: usize = 5;

/// Carousel position over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    len: usize,
    index: usize,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Slider opened at `index`, wrapped into range.
    pub fn at(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { len, index }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&mut self) {
        self.index = 0;
    }

    /// Moves by `direction` slides, wrapping at both ends.
    pub fn navigate(&mut self, direction: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
    }

    pub fn previous_index(&self) -> usize {
        let mut slider = *self;
        slider.navigate(-1);
        slider.index
    }

    pub fn next_index(&self) -> usize {
        let mut slider = *self;
        slider.navigate(1);
        slider.index
    }

    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}
