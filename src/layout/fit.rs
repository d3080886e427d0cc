use crate::font::{Face, TextMeasure};
use crate::units::Pt;

/// An inclusive range of whole point sizes, searched from largest to smallest
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SizeRange {
    pub max: u16,
    pub min: u16,
}

impl SizeRange {
    pub const fn new(max: u16, min: u16) -> SizeRange {
        SizeRange { max, min }
    }

    /// Candidate sizes, largest first
    pub fn descending(&self) -> impl Iterator<Item = Pt> {
        (self.min..=self.max).rev().map(|size| Pt(size as f32))
    }

    pub fn min_size(&self) -> Pt {
        Pt(self.min as f32)
    }
}

/// The lines a piece of text is broken into and the size they are set at
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// One or two lines, top to bottom
    pub lines: Vec<String>,
    pub size: Pt,
}

impl LineLayout {
    pub fn single(text: &str, size: Pt) -> LineLayout {
        LineLayout {
            lines: vec![text.to_string()],
            size,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether every line measures within `max_width`
    pub fn fits<M: TextMeasure>(&self, measure: &M, face: Face, max_width: Pt) -> bool {
        self.lines
            .iter()
            .all(|line| measure.text_width(line, face, self.size) <= max_width)
    }
}

/// The largest size in `sizes` at which `text` fits on one line, if any does
pub fn fit_single_line<M: TextMeasure>(
    measure: &M,
    text: &str,
    face: Face,
    max_width: Pt,
    sizes: SizeRange,
) -> Option<Pt> {
    sizes
        .descending()
        .find(|&size| measure.text_width(text, face, size) <= max_width)
}

/// The split of `words` into two lines that both fit at `size`, minimising the wider
/// of the two. Ties keep the leftmost split point.
fn best_two_line_split<M: TextMeasure>(
    measure: &M,
    words: &[&str],
    face: Face,
    size: Pt,
    max_width: Pt,
) -> Option<(String, String)> {
    let mut best: Option<(Pt, String, String)> = None;
    for split in 1..words.len() {
        let first = words[..split].join(" ");
        let second = words[split..].join(" ");
        let first_width = measure.text_width(&first, face, size);
        let second_width = measure.text_width(&second, face, size);
        if first_width > max_width || second_width > max_width {
            continue;
        }

        let widest = first_width.max(second_width);
        if best.as_ref().map_or(true, |(best_widest, _, _)| widest < *best_widest) {
            best = Some((widest, first, second));
        }
    }
    best.map(|(_, first, second)| (first, second))
}

/// Find the most legible rendering of `text` within `max_width`:
///
/// 1. one line at the largest size in `sizes` that fits;
/// 2. otherwise two lines, split at a word boundary, at the largest size where any
///    split fits, choosing the split whose wider line is narrowest;
/// 3. otherwise the text unbroken at the minimum size, overflowing `max_width`.
///
/// Never produces more than two lines.
pub fn fit_lines<M: TextMeasure>(
    measure: &M,
    text: &str,
    face: Face,
    max_width: Pt,
    sizes: SizeRange,
) -> LineLayout {
    if let Some(size) = fit_single_line(measure, text, face, max_width, sizes) {
        return LineLayout::single(text, size);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > 1 {
        for size in sizes.descending() {
            if let Some((first, second)) =
                best_two_line_split(measure, &words, face, size, max_width)
            {
                return LineLayout {
                    lines: vec![first, second],
                    size,
                };
            }
        }
    }

    tracing::warn!(
        text,
        max_width = *max_width,
        size = sizes.min,
        "text does not fit even at the minimum size; it will overflow"
    );
    LineLayout::single(text, sizes.min_size())
}
