//! Line-clear scoring.
//!
//! Rows cleared by one placement are scored together with a quadratic bonus:
//!
//! | Lines | Points |
//! |-------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 600 |
//! | 4 | 1000 |
//!
//! Clears from separate placements never compound.

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows with a single placement.
pub fn line_clear_score(lines: u32) -> u32 {
    lines * (lines + 1) * LINE_CLEAR_BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 600);
        assert_eq!(line_clear_score(4), 1000);
    }

    #[test]
    fn test_double_beats_two_singles() {
        assert!(line_clear_score(2) > 2 * line_clear_score(1));
    }
}
