//! Screen geometry used for hit testing and panel layout

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds anchored at the origin, e.g. a window viewport
    pub const fn with_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Layout of the slide-out panel and its toggle arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Width of the slide-out container
    pub panel_width: f32,
    /// Side of the square arrow button
    pub arrow_size: f32,
    /// Gap between the arrow and the panel's left edge (or the container edge)
    pub arrow_offset: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            panel_width: 616.0,
            arrow_size: 48.0,
            arrow_offset: 24.0,
        }
    }
}

impl PanelLayout {
    pub fn with_panel_width(panel_width: f32) -> Self {
        Self {
            panel_width,
            ..Self::default()
        }
    }

    /// Where the arrow sits; it rides on the panel's right edge while open
    pub fn arrow_bounds(&self, open: bool) -> Bounds {
        let x = if open {
            self.panel_width + self.arrow_offset
        } else {
            self.arrow_offset
        };
        Bounds::new(x, self.arrow_offset, self.arrow_size, self.arrow_size)
    }

    /// The slide-out container, full viewport height
    pub fn container_bounds(&self, viewport: Bounds) -> Bounds {
        Bounds::new(viewport.x, viewport.y, self.panel_width, viewport.height)
    }

    /// Root region: the smallest rectangle holding both the container and
    /// the arrow
    pub fn root_bounds(&self, open: bool, viewport: Bounds) -> Bounds {
        let arrow = self.arrow_bounds(open);
        if !open {
            return arrow;
        }
        let container = self.container_bounds(viewport);
        let right = (arrow.x + arrow.width).max(container.x + container.width);
        Bounds::new(container.x, container.y, right - container.x, container.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_edges() {
        let b = Bounds::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(30.0, 30.0)));
        assert!(!b.contains(Point::new(30.1, 15.0)));
        assert!(!b.contains(Point::new(5.0, 15.0)));
    }

    #[test]
    fn test_root_bounds_contains_arrow() {
        let layout = PanelLayout::default();
        let viewport = Bounds::with_size(1200.0, 800.0);

        let root = layout.root_bounds(true, viewport);
        let arrow = layout.arrow_bounds(true);
        assert!(root.contains(Point::new(arrow.x + 1.0, arrow.y + 1.0)));
        assert!(root.contains(Point::new(100.0, 700.0)));
        assert!(!root.contains(Point::new(1000.0, 400.0)));
        assert_eq!(root.height, 800.0);
    }

    #[test]
    fn test_closed_root_is_arrow() {
        let layout = PanelLayout::with_panel_width(400.0);
        let viewport = Bounds::with_size(1200.0, 800.0);
        assert_eq!(layout.root_bounds(false, viewport), layout.arrow_bounds(false));
    }
}
