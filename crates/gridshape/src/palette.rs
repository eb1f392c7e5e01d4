//! Fill colors for drawn shapes.
//!
//! Color choice is a pure function of an ordinal the caller supplies; there is
//! no process-wide cursor. A seeded shuffle gives a per-session order that is
//! still reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Transparency applied to every fill color.
pub const FILL_ALPHA: f64 = 0.5;

/// RGB color with an alpha channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    #[inline]
    pub const fn fill(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, FILL_ALPHA)
    }

    /// `#rrggbb` without alpha.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The twenty named fill colors, in their unshuffled order.
pub const STANDARD_COLORS: [Color; 20] = [
    Color::fill(199, 21, 133), // mediumvioletred
    Color::fill(255, 127, 80), // coral
    Color::fill(143, 188, 143), // darkseagreen
    Color::fill(0, 191, 255), // deepskyblue
    Color::fill(112, 128, 144), // slategray
    Color::fill(95, 158, 160), // cadetblue
    Color::fill(255, 99, 71), // tomato
    Color::fill(218, 165, 32), // goldenrod
    Color::fill(60, 179, 113), // mediumseagreen
    Color::fill(0, 206, 209), // darkturquoise
    Color::fill(65, 105, 225), // royalblue
    Color::fill(105, 105, 105), // dimgray
    Color::fill(205, 92, 92), // indianred
    Color::fill(85, 107, 47), // darkolivegreen
    Color::fill(255, 69, 0), // orangered
    Color::fill(70, 130, 180), // steelblue
    Color::fill(0, 128, 128), // teal
    Color::fill(160, 82, 45), // sienna
    Color::fill(255, 140, 0), // darkorange
    Color::fill(128, 0, 128), // purple
];

/// Ordered, non-empty list of fill colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    pub fn standard() -> Self {
        Self {
            colors: STANDARD_COLORS.to_vec(),
        }
    }

    /// Standard colors in a seed-determined order.
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut colors = STANDARD_COLORS.to_vec();
        colors.shuffle(&mut rng);
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `ordinal`-th shape, wrapping around.
    #[inline]
    pub fn color_at(&self, ordinal: usize) -> Color {
        self.colors[ordinal % self.colors.len()]
    }
}

/// How a new shape gets its color.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ColorPolicy {
    /// Next palette entry by ordinal.
    #[default]
    Cycle,
    /// Always the same color.
    Fixed(Color),
}

impl ColorPolicy {
    pub fn blue() -> Self {
        ColorPolicy::Fixed(Color::fill(0, 0, 255))
    }

    pub fn red() -> Self {
        ColorPolicy::Fixed(Color::fill(255, 0, 0))
    }

    #[inline]
    pub fn pick(&self, palette: &Palette, ordinal: usize) -> Color {
        match *self {
            ColorPolicy::Cycle => palette.color_at(ordinal),
            ColorPolicy::Fixed(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_modulo_palette() {
        let p = Palette::standard();
        assert_eq!(p.len(), 20);
        assert_eq!(p.color_at(0), p.color_at(20));
        assert_ne!(p.color_at(0), p.color_at(1));
        assert_eq!(ColorPolicy::Cycle.pick(&p, 3), STANDARD_COLORS[3]);
    }

    #[test]
    fn shuffle_is_seeded_permutation() {
        let a = Palette::shuffled(7);
        let b = Palette::shuffled(7);
        assert_eq!(a, b);
        let mut hexes: Vec<String> = (0..a.len()).map(|i| a.color_at(i).hex()).collect();
        let mut base: Vec<String> = STANDARD_COLORS.iter().map(Color::hex).collect();
        hexes.sort();
        base.sort();
        assert_eq!(hexes, base);
    }

    #[test]
    fn fixed_policy_ignores_ordinal() {
        let p = Palette::standard();
        let red = ColorPolicy::red();
        assert_eq!(red.pick(&p, 0), red.pick(&p, 11));
        assert_eq!(red.pick(&p, 0).hex(), "#ff0000");
        assert_eq!(ColorPolicy::blue().pick(&p, 5).alpha, FILL_ALPHA);
    }
}
