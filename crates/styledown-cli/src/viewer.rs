use styledown_engine::StyledDocument;

/// Viewer state for one open document.
pub struct Viewer {
    pub title: String,
    pub document: StyledDocument,
    pub base_size: f32,
    /// First visible row.
    pub scroll: usize,
    /// Rows in the last rendered content and viewport, for bottom clamping.
    pub content_rows: usize,
    pub viewport_rows: usize,
}

impl Viewer {
    pub fn new(title: String, document: StyledDocument, base_size: f32) -> Self {
        Self {
            title,
            document,
            base_size,
            scroll: 0,
            content_rows: 0,
            viewport_rows: 0,
        }
    }

    fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = (self.scroll + rows).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn go_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    pub fn page_rows(&self) -> usize {
        self.viewport_rows.max(1)
    }

    /// Records the latest layout and keeps `scroll` in range after a resize.
    pub fn set_layout(&mut self, content_rows: usize, viewport_rows: usize) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(content: usize, viewport: usize) -> Viewer {
        let mut v = Viewer::new("t".into(), StyledDocument::default(), 12.0);
        v.set_layout(content, viewport);
        v
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut v = viewer(100, 20);
        v.scroll_down(5);
        assert_eq!(v.scroll, 5);
        v.scroll_down(1000);
        assert_eq!(v.scroll, 80);
        v.scroll_up(1000);
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn top_and_bottom() {
        let mut v = viewer(50, 10);
        v.go_to_bottom();
        assert_eq!(v.scroll, 40);
        v.go_to_top();
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn short_documents_do_not_scroll() {
        let mut v = viewer(5, 10);
        v.scroll_down(3);
        v.go_to_bottom();
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn resize_reclamps_scroll() {
        let mut v = viewer(50, 10);
        v.go_to_bottom();
        v.set_layout(50, 45);
        assert_eq!(v.scroll, 5);
    }
}
