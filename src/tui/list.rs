//! Cursor and scroll state for the list view.
//!
//! Positions are indices into the picker's filtered view, so every
//! refilter resets the cursor via [`ListCursor::reset`].

pub struct ListCursor {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for ListCursor {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 20,
        }
    }
}

impl ListCursor {
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Re-anchor after the filtered view changed underneath the cursor
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_clamp_to_the_list() {
        let mut cursor = ListCursor::default();
        cursor.select_next(3);
        assert_eq!(cursor.selected, Some(0));
        cursor.select_next(3);
        cursor.select_next(3);
        cursor.select_next(3);
        assert_eq!(cursor.selected, Some(2));

        cursor.select_prev();
        cursor.select_prev();
        cursor.select_prev();
        assert_eq!(cursor.selected, Some(0));
    }

    #[test]
    fn scrolling_follows_the_cursor() {
        let mut cursor = ListCursor {
            visible_rows: 5,
            ..Default::default()
        };
        for _ in 0..10 {
            cursor.select_next(10);
        }
        assert_eq!(cursor.selected, Some(9));
        assert_eq!(cursor.scroll_offset, 5);

        cursor.select_first();
        assert_eq!(cursor.scroll_offset, 0);

        cursor.select_last(10);
        assert_eq!(cursor.selected, Some(9));
        assert_eq!(cursor.scroll_offset, 5);
    }

    #[test]
    fn reset_anchors_to_the_top_or_clears() {
        let mut cursor = ListCursor::default();
        cursor.select_next(3);
        cursor.reset(2);
        assert_eq!(cursor.selected, Some(0));
        assert_eq!(cursor.scroll_offset, 0);

        cursor.reset(0);
        assert_eq!(cursor.selected, None);
    }

    #[test]
    fn paging_moves_by_a_window() {
        let mut cursor = ListCursor {
            visible_rows: 4,
            ..Default::default()
        };
        cursor.page_down(20);
        assert_eq!(cursor.selected, Some(3));
        cursor.page_down(20);
        assert_eq!(cursor.selected, Some(6));
        cursor.page_up();
        assert_eq!(cursor.selected, Some(3));
    }
}
