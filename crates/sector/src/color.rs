use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// RGB color for generated objects
///
/// Crosses the rendering boundary as three channel bytes; `to_hex` produces
/// the `#RRGGBB` form the host's CSS layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#78CCE2")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#78CCE2" or "78CCE2")
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

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
