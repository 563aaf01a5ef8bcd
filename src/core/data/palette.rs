use crate::core::data::colour::Colour;
use crate::core::data::hsl::Hsl;

/// A fixed colour anchored at a palette slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlPoint {
    pub index: usize,
    pub colour: Hsl,
}

impl ControlPoint {
    #[must_use]
    pub fn new(index: usize, hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            index,
            colour: Hsl::new(hue, saturation, lightness),
        }
    }
}

/// Indexed colour lookup table. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    #[must_use]
    pub fn from_colours(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Slot for an escape count: `floor(iterations / max_iterations * (len - 1))`.
    ///
    /// The product is truncated, then clamped to the last slot. Returns `None`
    /// for an empty palette.
    #[must_use]
    pub fn slot_for(&self, iterations: u32, max_iterations: u32) -> Option<usize> {
        let last = self.colours.len().checked_sub(1)?;
        let scaled = iterations as f64 / max_iterations as f64 * last as f64;

        Some((scaled as usize).min(last))
    }
}
