//! Star Rating
//!
//! The five-star picker on the review form and the glyph strings used in
//! the testimonials table.

pub const STAR_COUNT: usize = 5;
const STAR: char = '★';

/// Star picker state: a committed rating plus an optional hover preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarPicker {
    committed: u8,
    preview: Option<u8>,
}

impl StarPicker {
    pub fn new(initial: u8) -> Self {
        Self {
            committed: initial.min(STAR_COUNT as u8),
            preview: None,
        }
    }

    /// Committed rating, 0 when unset
    pub fn rating(&self) -> u8 {
        self.committed
    }

    /// Commit the star at `index` (0-based); returns the new rating
    pub fn click(&mut self, index: usize) -> u8 {
        self.committed = Self::rating_at(index);
        self.preview = None;
        self.committed
    }

    /// Preview the star at `index` without committing
    pub fn hover(&mut self, index: usize) {
        self.preview = Some(Self::rating_at(index));
    }

    /// Pointer left the picker: fall back to the committed rating
    pub fn leave(&mut self) {
        self.preview = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rating currently shown, preview included
    pub fn displayed(&self) -> u8 {
        self.preview.unwrap_or(self.committed)
    }

    /// Fill state per star; `false` means the star carries the `empty` marker
    pub fn filled(&self) -> [bool; STAR_COUNT] {
        let shown = self.displayed() as usize;
        std::array::from_fn(|i| i < shown)
    }

    fn rating_at(index: usize) -> u8 {
        (index.min(STAR_COUNT - 1) + 1) as u8
    }
}

/// Filled and empty glyph runs for a read-only rating display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarGlyphs {
    pub filled: String,
    /// Empty when the rating is already five stars
    pub empty: String,
}

impl StarGlyphs {
    pub fn for_rating(rating: u8) -> Self {
        let filled = (rating as usize).min(STAR_COUNT);
        Self {
            filled: STAR.to_string().repeat(filled),
            empty: STAR.to_string().repeat(STAR_COUNT - filled),
        }
    }
}
