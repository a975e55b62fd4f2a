use serde::{Deserialize, Serialize};

/// RGB color with byte channels
///
/// All surface maps and body tints are expressed in this type. Channel math
/// happens in f64 and is clamped back into byte range on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // Planckian-locus curve fit, same family as the Tanner Helland algorithm
    // but with the warm/hot transition placed at 5800 K (solar photosphere).
    const RED_COEFF: f64 = 329.698727446;
    const RED_EXP: f64 = -0.1332047592;
    const GREEN_WARM_COEFF: f64 = 99.4708025861;
    const GREEN_WARM_OFFSET: f64 = -161.1195681661;
    const GREEN_HOT_COEFF: f64 = 288.1221695283;
    const GREEN_HOT_EXP: f64 = -0.0755148492;
    const BLUE_COEFF: f64 = 138.5177312231;
    const BLUE_OFFSET: f64 = -305.0447927307;

    /// Warm/hot transition in units of kelvin/100
    const TEMP_SPLIT: f64 = 58.0;
    /// Below this (kelvin/100) the blue channel is fully dark
    const TEMP_BLUE_CUTOFF: f64 = 19.0;

    /// Blend toward gray so stars read as whitish rather than saturated
    const DESATURATION_BLEND: f64 = 0.3;

    const MIN_TEMP: f64 = 1000.0;
    const MAX_TEMP: f64 = 40000.0;

    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from HSV components
    ///
    /// Standard six-sector conversion. Hue is in degrees and wraps modulo
    /// 360, saturation and value are clamped into [0, 1].
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r1, g1, b1) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: ((r1 + m) * 255.0).round() as u8,
            g: ((g1 + m) * 255.0).round() as u8,
            b: ((b1 + m) * 255.0).round() as u8,
        }
    }

    /// Convert blackbody temperature to RGB color
    ///
    /// Approximates the Planckian locus with a piecewise curve fit split at
    /// 5800 K, then desaturates slightly for realistic stellar whites.
    ///
    /// # Arguments
    /// * `temperature` - Temperature in Kelvin (clamped to 1000K-40000K)
    pub fn from_temperature(temperature: f64) -> Self {
        let temp = temperature.clamp(Self::MIN_TEMP, Self::MAX_TEMP) / 100.0;

        let r = if temp <= Self::TEMP_SPLIT {
            255.0
        } else {
            (Self::RED_COEFF * (temp - Self::TEMP_SPLIT + 6.0).powf(Self::RED_EXP))
                .clamp(0.0, 255.0)
        };

        let g = if temp <= Self::TEMP_SPLIT {
            (Self::GREEN_WARM_COEFF * temp.ln() + Self::GREEN_WARM_OFFSET).clamp(0.0, 255.0)
        } else {
            (Self::GREEN_HOT_COEFF * (temp - Self::TEMP_SPLIT + 6.0).powf(Self::GREEN_HOT_EXP))
                .clamp(0.0, 255.0)
        };

        let b = if temp >= Self::TEMP_SPLIT {
            255.0
        } else if temp <= Self::TEMP_BLUE_CUTOFF {
            0.0
        } else {
            (Self::BLUE_COEFF * (temp - 10.0).ln() + Self::BLUE_OFFSET).clamp(0.0, 255.0)
        };

        let avg = (r + g + b) / 3.0;
        let r = r + (avg - r) * Self::DESATURATION_BLEND;
        let g = g + (avg - g) * Self::DESATURATION_BLEND;
        let b = b + (avg - b) * Self::DESATURATION_BLEND;

        Self {
            r: r.round() as u8,
            g: g.round() as u8,
            b: b.round() as u8,
        }
    }

    /// Linear interpolation toward `other` by `t` in [0, 1]
    pub fn lerp(&self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Raise each channel to a power
    ///
    /// Channels are normalized to [0, 1], raised to `p`, and rescaled to
    /// byte range. Powers above one bias toward dark, below one toward
    /// bright; ring material uses this to skew dark.
    pub fn pow(&self, p: f64) -> Self {
        let curve = |c: u8| ((c as f64 / 255.0).powf(p) * 255.0).round() as u8;
        Self {
            r: curve(self.r),
            g: curve(self.g),
            b: curve(self.b),
        }
    }

    /// Scale each channel by a factor, clamped to byte range
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).clamp(0.0, 255.0).round() as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Relative luminance in [0, 1] (Rec. 601 weights)
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Returns the color as a hex string (e.g., "#FF9944")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FF9944" or "FF9944")
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(format!("Invalid hex color length: {}", s));
        }

        let r = u8::from_str_radix(&s[0..2], 16)
            .map_err(|_| format!("Invalid red component: {}", &s[0..2]))?;
        let g = u8::from_str_radix(&s[2..4], 16)
            .map_err(|_| format!("Invalid green component: {}", &s[2..4]))?;
        let b = u8::from_str_radix(&s[4..6], 16)
            .map_err(|_| format!("Invalid blue component: {}", &s[4..6]))?;

        Ok(Self { r, g, b })
    }
}
