use crate::units::Pt;

/// Margins are the padding kept clear inside a panel. Nothing stops text from
/// overflowing them; they are guidelines the layout functions aim for.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let vertical: Pt = vertical.into();
        let horizontal: Pt = horizontal.into();
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// The width left for content between the left and right margins, never negative
    pub fn inner_width(&self, width: Pt) -> Pt {
        (width - self.left - self.right).max(Pt(0.0))
    }
}
