//! Star glyphs for ratings.

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

const FILLED: char = '★';
const EMPTY: char = '☆';

/// `rating` filled stars followed by empty ones, always five glyphs wide.
///
/// Ratings above five render as five filled stars.
pub fn render_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;

    let mut out = String::with_capacity(usize::from(MAX_RATING) * FILLED.len_utf8());
    out.extend(core::iter::repeat_n(FILLED, filled));
    out.extend(core::iter::repeat_n(EMPTY, empty));
    out
}
