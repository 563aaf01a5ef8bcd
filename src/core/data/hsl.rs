use std::ops::{Add, Mul, Sub};

/// Hue, saturation and lightness, each nominally in `[0, 1]`.
///
/// Hue is cyclic; values outside `[0, 1)` are wrapped when converted.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    #[must_use]
    pub fn normalized_hue(&self) -> f64 {
        self.hue.rem_euclid(1.0)
    }
}

impl Add for Hsl {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            hue: self.hue + other.hue,
            saturation: self.saturation + other.saturation,
            lightness: self.lightness + other.lightness,
        }
    }
}

impl Sub for Hsl {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            hue: self.hue - other.hue,
            saturation: self.saturation - other.saturation,
            lightness: self.lightness - other.lightness,
        }
    }
}

impl Mul<f64> for Hsl {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            hue: self.hue * factor,
            saturation: self.saturation * factor,
            lightness: self.lightness * factor,
        }
    }
}
