use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use std::collections::BTreeMap;

use crate::models::Color;

lazy_static! {
    static ref DEFAULT_BRAND_RAMP: BTreeMap<u16, Color> = {
        let mut m = BTreeMap::new();
        m.insert(10, Color::rgb(0x06, 0x01, 0x03));
        m.insert(20, Color::rgb(0x26, 0x10, 0x18));
        m.insert(30, Color::rgb(0x40, 0x16, 0x22));
        m.insert(40, Color::rgb(0x56, 0x1a, 0x2b));
        m.insert(50, Color::rgb(0x6d, 0x1d, 0x34));
        m.insert(60, Color::rgb(0x84, 0x20, 0x3d));
        m.insert(70, Color::rgb(0x9c, 0x22, 0x47));
        m.insert(80, Color::rgb(0xb4, 0x24, 0x50));
        m.insert(90, Color::rgb(0xc9, 0x35, 0x54));
        m.insert(100, Color::rgb(0xd9, 0x4b, 0x5f));
        m.insert(110, Color::rgb(0xe4, 0x5f, 0x6b));
        m.insert(120, Color::rgb(0xec, 0x73, 0x78));
        m.insert(130, Color::rgb(0xf3, 0x86, 0x85));
        m.insert(140, Color::rgb(0xf8, 0xa0, 0x9a));
        m.insert(150, Color::rgb(0xfc, 0xb2, 0xaa));
        m.insert(160, Color::rgb(0xff, 0xc4, 0xbb));
        m
    };
}

const DEFAULT_CONTRAST: [Color; 3] = [
    Color::rgb(0xd0, 0xe7, 0xf8),
    Color::rgb(0x00, 0x43, 0x77),
    Color::rgb(0x00, 0x78, 0xd4),
];

/// Brand colors indexed by shade, 10 (darkest) through 160 (lightest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRamp {
    shades: BTreeMap<u16, Color>,
}

impl Default for BrandRamp {
    fn default() -> Self {
        Self {
            shades: DEFAULT_BRAND_RAMP.clone(),
        }
    }
}

impl BrandRamp {
    pub fn new(shades: BTreeMap<u16, Color>) -> Result<Self> {
        if shades.is_empty() {
            return Err(anyhow!("Brand ramp must define at least one shade"));
        }
        Ok(Self { shades })
    }

    /// Color at `index`, or at the nearest defined shade when `index` has
    /// none. Ties resolve to the darker shade.
    pub fn color_at(&self, index: u16) -> Color {
        if let Some(color) = self.shades.get(&index) {
            return *color;
        }

        let below = self.shades.range(..index).next_back();
        let above = self.shades.range(index..).next();
        match (below, above) {
            (Some((lo, lo_color)), Some((hi, hi_color))) => {
                if index - lo <= hi - index {
                    *lo_color
                } else {
                    *hi_color
                }
            }
            (Some((_, color)), None) | (None, Some((_, color))) => *color,
            // new() rejects empty ramps
            (None, None) => Color::rgb(0, 0, 0),
        }
    }
}

/// Colors reserved for memory extraction entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPalette {
    colors: [Color; 3],
}

impl Default for ContrastPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_CONTRAST,
        }
    }
}

impl ContrastPalette {
    pub fn new(colors: [Color; 3]) -> Self {
        Self { colors }
    }

    /// Wraps past the end of the palette.
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}
