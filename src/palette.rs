use tiny_skia::Paint;

/// An opaque 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Anti-aliased solid paint in this color
    pub fn paint(self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(self.0, self.1, self.2, 255);
        paint.anti_alias = true;
        paint
    }

    pub fn rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

// Agricultural green theme, matching the splash screen
pub const BADGE: Rgb = Rgb(46, 125, 50);
pub const BORDER: Rgb = Rgb(255, 255, 255);
pub const BODY: Rgb = Rgb(76, 175, 80);
pub const CAB: Rgb = Rgb(56, 142, 60);
pub const WINDOW: Rgb = Rgb(173, 216, 230);
pub const TIRE: Rgb = Rgb(50, 50, 50);
pub const HUB: Rgb = Rgb(150, 150, 150);
pub const HEADLIGHT: Rgb = Rgb(255, 235, 59);
