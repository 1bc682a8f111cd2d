//! Star rating widget state
//!
//! The widget owns only transient state: a cursor acting as the hover
//! preview, and the value the user last committed. The committed value is
//! handed to the caller on commit; the widget never mutates the watched
//! list itself.

pub const DEFAULT_STARS: u8 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarRating {
    max: u8,
    /// 0 = nothing committed yet
    committed: u8,
    /// 0 = no preview; otherwise the previewed fill count
    preview: u8,
    /// Star index the cursor sits on (0-based)
    cursor: u8,
}

impl StarRating {
    pub fn new(max: u8) -> Self {
        Self {
            max,
            committed: 0,
            preview: 0,
            cursor: 0,
        }
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn is_rated(&self) -> bool {
        self.committed > 0
    }

    /// Preview the star at `index`: fills `index + 1` stars without
    /// touching the committed value.
    pub fn preview_at(&mut self, index: u8) {
        let index = index.min(self.max.saturating_sub(1));
        self.cursor = index;
        self.preview = index + 1;
    }

    /// Hover-out: the display falls back to the committed value.
    pub fn clear_preview(&mut self) {
        self.preview = 0;
    }

    pub fn cursor_left(&mut self) {
        let index = self.cursor.saturating_sub(1);
        self.preview_at(index);
    }

    pub fn cursor_right(&mut self) {
        let index = (self.cursor + 1).min(self.max.saturating_sub(1));
        self.preview_at(index);
    }

    /// Commit the rating at the cursor and return it (1-based).
    pub fn commit(&mut self) -> u8 {
        self.committed = self.cursor + 1;
        self.committed
    }

    /// Display rule: preview wins while it is active, otherwise the
    /// committed value (0 if none).
    pub fn displayed(&self) -> u8 {
        if self.preview > 0 {
            self.preview
        } else {
            self.committed
        }
    }

    pub fn is_previewing(&self) -> bool {
        self.preview > 0
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(DEFAULT_STARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_displays_index_plus_one() {
        let mut rating = StarRating::default();
        for i in 0..10 {
            rating.preview_at(i);
            assert_eq!(rating.displayed(), i + 1);
        }
    }

    #[test]
    fn hover_out_reverts_to_committed() {
        let mut rating = StarRating::default();
        rating.preview_at(6);
        rating.clear_preview();
        assert_eq!(rating.displayed(), 0);

        rating.preview_at(3);
        assert_eq!(rating.commit(), 4);
        rating.preview_at(8);
        assert_eq!(rating.displayed(), 9);
        rating.clear_preview();
        assert_eq!(rating.displayed(), 4);
    }

    #[test]
    fn commit_does_not_move_with_later_previews() {
        let mut rating = StarRating::default();
        rating.preview_at(8);
        rating.commit();
        rating.preview_at(1);
        assert_eq!(rating.committed(), 9);
        assert_eq!(rating.displayed(), 2);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut rating = StarRating::new(10);
        rating.cursor_left();
        assert_eq!(rating.cursor(), 0);
        for _ in 0..20 {
            rating.cursor_right();
        }
        assert_eq!(rating.cursor(), 9);
        assert_eq!(rating.displayed(), 10);
    }
}
