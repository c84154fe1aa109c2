//! Step table mapping a dial angle to a discrete light color.
//!
//! The table is data-driven on purpose: each entry is the upper bound of a
//! contiguous angular band plus the color triple applied while the dial sits
//! inside that band. Lookup is a linear scan with a strict `<` comparison, so
//! an angle exactly on a boundary belongs to the lower band. The final band's
//! bound is inclusive so that 360 resolves to the last entry.

/// Color triple for one band.
///
/// `light` is the packed 0xRRGGBB value fed to the renderer's ambient
/// uniform; `display` and `glow` are the CSS colors painted onto the dial
/// handle (background and box-shadow respectively).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandColor {
    pub light: u32,
    pub display: &'static str,
    pub glow: &'static str,
}

/// One contiguous angular band.
#[derive(Clone, Copy, Debug)]
pub struct ColorBand {
    pub upper_deg: f32,
    pub color: BandColor,
}

// Nine 40-degree bands. The 240 and 280 bands intentionally share one light
// value (they differ only in the CSS colors); this matches the shipped
// palette and is pinned by a test.
pub const COLOR_BANDS: [ColorBand; 9] = [
    ColorBand {
        upper_deg: 40.0,
        color: BandColor {
            light: 0xFF5349,
            display: "#ff5349",
            glow: "#ff8d86",
        },
    },
    ColorBand {
        upper_deg: 80.0,
        color: BandColor {
            light: 0xFFA033,
            display: "#ffa033",
            glow: "#ffc27e",
        },
    },
    ColorBand {
        upper_deg: 120.0,
        color: BandColor {
            light: 0xFFE135,
            display: "#ffe135",
            glow: "#ffee8a",
        },
    },
    ColorBand {
        upper_deg: 160.0,
        color: BandColor {
            light: 0x58D858,
            display: "#58d858",
            glow: "#9ceb9c",
        },
    },
    ColorBand {
        upper_deg: 200.0,
        color: BandColor {
            light: 0x35D6CD,
            display: "#35d6cd",
            glow: "#8ae8e3",
        },
    },
    ColorBand {
        upper_deg: 240.0,
        color: BandColor {
            light: 0x3D7BFF,
            display: "#3d7bff",
            glow: "#8cb1ff",
        },
    },
    ColorBand {
        upper_deg: 280.0,
        color: BandColor {
            light: 0x3D7BFF,
            display: "#7b52ff",
            glow: "#b39aff",
        },
    },
    ColorBand {
        upper_deg: 320.0,
        color: BandColor {
            light: 0xB44BE0,
            display: "#b44be0",
            glow: "#d49bef",
        },
    },
    ColorBand {
        upper_deg: 360.0,
        color: BandColor {
            light: 0xE753C9,
            display: "#e753c9",
            glow: "#f29ade",
        },
    },
];

/// Look up the band color for an angle in degrees.
///
/// Callers are expected to normalize into \[0, 360\] first (see
/// [`crate::dial::normalize_deg`]); anything past the table falls into the
/// final band, keeping the function total.
pub fn color_for_angle(deg: f32) -> BandColor {
    for band in &COLOR_BANDS[..COLOR_BANDS.len() - 1] {
        if deg < band.upper_deg {
            return band.color;
        }
    }
    COLOR_BANDS[COLOR_BANDS.len() - 1].color
}
