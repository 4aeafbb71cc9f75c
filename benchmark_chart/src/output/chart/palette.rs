//!
//! The series color palette.
//!

///
/// The series color palette.
///
/// Hands out the fixed colors in order and wraps around past the last one. One
/// rotation spans all series of a chart, so duration and allocation series drawn
/// together never restart the sequence.
///
#[derive(Debug, Default)]
pub struct Palette {
    /// The index of the next color to hand out.
    next: usize,
}

impl Palette {
    /// The fixed series colors.
    pub const COLORS: [&'static str; 8] = [
        "#F94144", "#F3722C", "#F8961E", "#F9C74F", "#90BE6D", "#43AA8B", "#4D908E", "#577590",
    ];

    ///
    /// Returns the next color, advancing the rotation.
    ///
    pub fn next_color(&mut self) -> &'static str {
        let color = Self::COLORS[self.next % Self::COLORS.len()];
        self.next += 1;
        color
    }
}
