//! Session-wide star rating.
//!
//! The rating is not scoped to the document being read; switching pages or
//! sub-pages keeps the same value.

/// Number of stars offered.
pub const MAX_STARS: u8 = 5;

/// Zero until the reader picks a value in `1..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub fn value(self) -> u8 {
        self.0
    }

    /// Applies `stars` when it is between one and five; other values are
    /// ignored and `false` is returned.
    pub fn set(&mut self, stars: u8) -> bool {
        if (1..=MAX_STARS).contains(&stars) {
            self.0 = stars;
            true
        } else {
            false
        }
    }

    /// Whether star number `star` (1-based) is drawn filled.
    pub fn is_filled(self, star: u8) -> bool {
        star <= self.0
    }
}
