use crate::core::colour::hsl_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::data::hsl::Hsl;
use crate::core::data::palette::{ControlPoint, Palette};

/// Builds an indexed palette by sliding HSL colours between control points.
///
/// Points must be sorted by non-decreasing index. Slots before the first
/// point repeat its colour and slots from the last point up to `size` repeat
/// the last colour, so the palette length follows the point spacing and only
/// equals `size` when the points span `[0, size)`.
///
/// When neighbouring points share an index the earlier one keeps the slot.
/// Fewer than two points yield an empty palette.
#[must_use]
pub fn build_palette(size: usize, points: &[ControlPoint]) -> Palette {
    if points.len() < 2 {
        tracing::warn!(
            points = points.len(),
            "palette needs at least two control points, building an empty palette"
        );
        return Palette::default();
    }

    debug_assert!(
        points.windows(2).all(|pair| pair[0].index <= pair[1].index),
        "palette control points must be sorted by index"
    );

    let first = points[0];
    let last = points[points.len() - 1];
    let mut colours: Vec<Colour> = Vec::with_capacity(size.max(last.index));

    colours.extend(std::iter::repeat_n(hsl_to_rgb(first.colour), first.index));

    for (i, pair) in points.windows(2).enumerate() {
        let (p, p1) = (pair[0], pair[1]);

        if i == 0 || p.index > points[i - 1].index {
            colours.push(hsl_to_rgb(p.colour));
        }

        // Zero-width segment: nothing to interpolate.
        let d = p1.index - p.index;
        if d == 0 {
            continue;
        }

        let span = d as f64;
        let step = Hsl {
            hue: (p1.colour.hue - p.colour.hue) / span,
            saturation: (p1.colour.saturation - p.colour.saturation) / span,
            lightness: (p1.colour.lightness - p.colour.lightness) / span,
        };
        colours.extend((1..d).map(|j| hsl_to_rgb(p.colour + step * j as f64)));
    }

    colours.extend(std::iter::repeat_n(
        hsl_to_rgb(last.colour),
        size.saturating_sub(last.index),
    ));

    tracing::debug!(size, len = colours.len(), "built palette");

    Palette::from_colours(colours)
}
