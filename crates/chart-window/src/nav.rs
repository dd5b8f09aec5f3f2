// File: crates/chart-window/src/nav.rs
// Summary: Pan/zoom bookkeeping for the viewer, kept free of windowing types.

use chart_core::{Insets, ViewState};

pub struct Navigator {
    home: ViewState,
    pub view: ViewState,
    cursor: Option<(f64, f64)>,
    dragging: bool,
    /// Surface size and plot margins of the last rendered frame.
    size: (i32, i32),
    insets: Insets,
}

impl Navigator {
    pub fn new(home: ViewState) -> Self {
        Self {
            home,
            view: home,
            cursor: None,
            dragging: false,
            size: (1, 1),
            insets: Insets::new(0, 0, 0, 0),
        }
    }

    /// Record the geometry of the frame just drawn; event mapping uses it.
    pub fn set_frame(&mut self, width: i32, height: i32, insets: Insets) {
        self.size = (width, height);
        self.insets = insets;
    }

    /// Returns `true` when the view changed and needs a redraw.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> bool {
        let prev = self.cursor.replace((x, y));
        match prev {
            Some((px, py)) if self.dragging => {
                let (w, h) = self.size;
                self.view.pan_by_pixels(x - px, y - py, w, h, &self.insets);
                true
            }
            _ => false,
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.dragging = false;
    }

    pub fn set_dragging(&mut self, pressed: bool) {
        self.dragging = pressed;
    }

    /// Zoom around the cursor; positive `scroll` zooms in.
    pub fn scroll(&mut self, scroll: f64) -> bool {
        let Some((cx, cy)) = self.cursor else {
            return false;
        };
        if scroll == 0.0 {
            return false;
        }
        let (w, h) = self.size;
        self.view.zoom_at_pixel(scroll, cx, cy, w, h, &self.insets);
        true
    }

    pub fn reset(&mut self) {
        self.view = self.home;
    }
}
