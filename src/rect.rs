use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its lower-left corner and its extent
    pub fn from_origin(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// A rectangle of the given extent with its lower-left corner at (0, 0)
    pub fn sized(width: Pt, height: Pt) -> Rect {
        Rect::from_origin(Pt(0.0), Pt(0.0), width, height)
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Split the rectangle into `count` equal-height horizontal bands, ordered
    /// bottom to top
    pub fn split_rows(&self, count: usize) -> Vec<Rect> {
        let count = count.max(1);
        let band = self.height() / count as f32;
        (0..count)
            .map(|i| {
                Rect::from_origin(self.x1, self.y1 + band * i as f32, self.width(), band)
            })
            .collect()
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
