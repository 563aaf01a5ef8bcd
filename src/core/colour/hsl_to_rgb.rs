use crate::core::data::colour::Colour;
use crate::core::data::hsl::Hsl;

// Channel hue offsets: three decimals, not exact thirds.
const THIRD: f64 = 0.333;
const TWO_THIRDS: f64 = 0.666;

/// Clamps to `[0, 1]` and scales to a byte, truncating.
fn channel_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Converts an HSL colour to RGB.
///
/// Out-of-range saturation or lightness never fails; each channel is clamped
/// before scaling.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Colour {
    let lightness = hsl.lightness;
    let saturation = hsl.saturation;

    if saturation == 0.0 {
        let grey = channel_to_byte(lightness);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let t1 = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let t2 = 2.0 * lightness - t1;
    let slope = (t1 - t2) * 6.0;

    let hue = hsl.normalized_hue();
    let red_hue = (hue + THIRD).rem_euclid(1.0);
    let green_hue = hue;
    let blue_hue = if hue < THIRD {
        hue - THIRD + 1.0
    } else {
        hue - THIRD
    };

    let channel = |tc: f64| -> f64 {
        if 6.0 * tc < 1.0 {
            t2 + slope * tc
        } else if 2.0 * tc < 1.0 {
            t1
        } else if 3.0 * tc < 2.0 {
            t2 + slope * (TWO_THIRDS - tc)
        } else {
            t2
        }
    };

    Colour {
        r: channel_to_byte(channel(red_hue)),
        g: channel_to_byte(channel(green_hue)),
        b: channel_to_byte(channel(blue_hue)),
    }
}
