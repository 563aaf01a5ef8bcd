use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

/// Looks escape counts up in a palette, scaled so the cap lands on the last slot.
///
/// An empty palette maps everything to black.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColourMap<'a> {
    palette: &'a Palette,
    max_iterations: u32,
}

impl ColourMap<u32> for PaletteColourMap<'_> {
    fn map(&self, iterations: u32) -> Colour {
        self.palette
            .slot_for(iterations, self.max_iterations)
            .and_then(|slot| self.palette.get(slot))
            .unwrap_or(Colour::BLACK)
    }
}

impl<'a> PaletteColourMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}
