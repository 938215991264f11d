/// A colour, expressed in the DeviceRGB or DeviceGray colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants used throughout resume rendering
pub mod colours {
    use super::*;

    /// Body text
    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    /// Decoration label text
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// The muted grey of the per-page footer brand line (150, 150, 150)
    pub const FOOTER_GREY: Colour = Colour::RGB {
        r: 150.0 / 255.0,
        g: 150.0 / 255.0,
        b: 150.0 / 255.0,
    };
    /// The light neutral background of the full-page tint decoration (230, 230, 230)
    pub const PAGE_TINT: Colour = Colour::RGB {
        r: 230.0 / 255.0,
        g: 230.0 / 255.0,
        b: 230.0 / 255.0,
    };
}
