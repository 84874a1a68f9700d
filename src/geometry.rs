//! Shape descriptors for the tractor badge.
//!
//! Every coordinate is a linear function of the canvas size, so the same
//! layout scales to any square canvas. Tractor proportions are fractions of
//! its bounding box (half the canvas wide, three tenths tall).

use tiny_skia::{Path, PathBuilder, Rect};

/// Cubic bezier handle length for approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Hub radius as a fraction of its tire
pub const HUB_RATIO: f32 = 0.7;

/// Axis-aligned box given by its edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn to_rect(&self) -> Option<Rect> {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub bounds: Bounds,
    pub radius: f32,
}

impl RoundedRect {
    /// Outline path; the radius is clamped to half the shorter side.
    pub fn to_path(&self) -> Option<Path> {
        let b = self.bounds;
        let r = self
            .radius
            .min(b.width() / 2.0)
            .min(b.height() / 2.0)
            .max(0.0);
        if r == 0.0 {
            return Some(PathBuilder::from_rect(b.to_rect()?));
        }
        let k = r * KAPPA;

        let mut pb = PathBuilder::new();
        pb.move_to(b.left + r, b.top);
        pb.line_to(b.right - r, b.top);
        pb.cubic_to(b.right - r + k, b.top, b.right, b.top + r - k, b.right, b.top + r);
        pb.line_to(b.right, b.bottom - r);
        pb.cubic_to(b.right, b.bottom - r + k, b.right - r + k, b.bottom, b.right - r, b.bottom);
        pb.line_to(b.left + r, b.bottom);
        pb.cubic_to(b.left + r - k, b.bottom, b.left, b.bottom - r + k, b.left, b.bottom - r);
        pb.line_to(b.left, b.top + r);
        pb.cubic_to(b.left, b.top + r - k, b.left + r - k, b.top, b.left + r, b.top);
        pb.close();
        pb.finish()
    }
}

/// A circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Disc {
    pub fn to_path(&self) -> Option<Path> {
        PathBuilder::from_circle(self.cx, self.cy, self.radius)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Tire plus concentric hub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wheel {
    pub tire: Disc,
}

impl Wheel {
    fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            tire: Disc { cx, cy, radius },
        }
    }

    pub fn hub(&self) -> Disc {
        Disc {
            radius: self.tire.radius * HUB_RATIO,
            ..self.tire
        }
    }
}

/// The circular badge behind the tractor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    pub disc: Disc,
    pub border_width: f32,
}

impl Badge {
    pub fn new(size: u32, margin: f32, border_width: f32) -> Self {
        let half = size as f32 / 2.0;
        Self {
            disc: Disc {
                cx: half,
                cy: half,
                radius: half - margin,
            },
            border_width,
        }
    }

    /// Circle the border is stroked along, keeping the stroke inside the badge
    pub fn border_circle(&self) -> Disc {
        Disc {
            radius: self.disc.radius - self.border_width / 2.0,
            ..self.disc
        }
    }
}

/// Every tractor part for one canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TractorLayout {
    /// Bounding box the proportions below are relative to
    pub frame: Bounds,
    pub body: RoundedRect,
    pub cab: RoundedRect,
    pub window: RoundedRect,
    pub grille: Bounds,
    pub rear_wheel: Wheel,
    pub front_wheel: Wheel,
    pub headlight: Disc,
}

impl TractorLayout {
    pub fn new(size: u32) -> Self {
        let size = size as f32;
        let width = size * 0.5;
        let height = size * 0.3;
        let x0 = ((size - width) / 2.0).floor();
        let y0 = ((size - height) / 2.0).floor();

        let frame = Bounds {
            left: x0,
            top: y0,
            right: x0 + width,
            bottom: y0 + height,
        };
        // Fractions of the frame, left/top/right/bottom
        let part = |l: f32, t: f32, r: f32, b: f32| Bounds {
            left: x0 + width * l,
            top: y0 + height * t,
            right: x0 + width * r,
            bottom: y0 + height * b,
        };

        Self {
            frame,
            body: RoundedRect {
                bounds: part(0.0, 0.3, 0.7, 0.8),
                radius: 20.0,
            },
            cab: RoundedRect {
                bounds: part(0.05, 0.1, 0.35, 0.6),
                radius: 15.0,
            },
            window: RoundedRect {
                bounds: part(0.1, 0.2, 0.28, 0.45),
                radius: 8.0,
            },
            grille: part(0.6, 0.4, 0.68, 0.65),
            rear_wheel: Wheel::new(x0 + width * 0.2, y0 + height * 0.9, width * 0.08),
            front_wheel: Wheel::new(x0 + width * 0.65, y0 + height * 0.85, width * 0.06),
            headlight: Disc {
                cx: x0 + width * 0.67,
                cy: y0 + height * 0.45,
                radius: width * 0.02,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_frame_for_default_canvas() {
        let layout = TractorLayout::new(1024);
        assert_eq!(layout.frame.left, 256.0);
        assert_eq!(layout.frame.top, 358.0);
        assert_eq!(layout.frame.width(), 512.0);
        assert!(approx(layout.frame.height(), 307.2));
    }

    #[test]
    fn test_wheel_sizes() {
        let layout = TractorLayout::new(1024);
        assert!(approx(layout.rear_wheel.tire.radius, 40.96));
        assert!(approx(layout.rear_wheel.tire.radius, layout.frame.width() * 0.08));
        assert!(approx(layout.front_wheel.tire.radius, 30.72));
        assert!(layout.rear_wheel.tire.radius > layout.front_wheel.tire.radius);

        let hub = layout.rear_wheel.hub();
        assert_eq!((hub.cx, hub.cy), (layout.rear_wheel.tire.cx, layout.rear_wheel.tire.cy));
        assert!(approx(hub.radius, 40.96 * 0.7));
    }

    #[test]
    fn test_body_covers_canvas_center() {
        let layout = TractorLayout::new(1024);
        assert!(layout.body.bounds.contains(512.0, 512.0));
        assert!(!layout.cab.bounds.contains(512.0, 512.0));
        assert!(!layout.grille.contains(512.0, 512.0));
        assert!(!layout.headlight.contains(512.0, 512.0));
    }

    #[test]
    fn test_window_inside_cab() {
        let layout = TractorLayout::new(1024);
        let (cab, window) = (layout.cab.bounds, layout.window.bounds);
        assert!(cab.contains(window.left, window.top));
        assert!(cab.contains(window.right, window.bottom));
    }

    #[test]
    fn test_layout_scales_with_canvas() {
        let small = TractorLayout::new(512);
        let large = TractorLayout::new(1024);
        assert_eq!(small.frame.width() * 2.0, large.frame.width());
        assert!(approx(small.headlight.radius * 2.0, large.headlight.radius));
    }

    #[test]
    fn test_badge_border_stays_inside() {
        let badge = Badge::new(1024, 20.0, 8.0);
        assert_eq!(badge.disc.radius, 492.0);
        let ring = badge.border_circle();
        assert_eq!(ring.radius + badge.border_width / 2.0, badge.disc.radius);
    }

    #[test]
    fn test_rounded_rect_paths() {
        let layout = TractorLayout::new(1024);
        assert!(layout.body.to_path().is_some());

        let square = RoundedRect {
            bounds: Bounds {
                left: 0.0,
                top: 0.0,
                right: 10.0,
                bottom: 10.0,
            },
            radius: 50.0,
        };
        let bounds = square.to_path().unwrap().bounds();
        assert!(approx(bounds.width(), 10.0));
        assert!(approx(bounds.height(), 10.0));
    }
}
