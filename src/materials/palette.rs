use bevy::prelude::*;

/// Display colors, named after their Tailwind shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    Yellow400,
    Yellow800,
    Amber500,
    Blue300,
    Blue500,
    Blue700,
    Red600,
    Purple800,
    Gray400,
    Gray700,
    Gray900,
}

impl Swatch {
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Yellow400 => [0xfa, 0xcc, 0x15],
            Self::Yellow800 => [0x85, 0x4d, 0x0e],
            Self::Amber500 => [0xf5, 0x9e, 0x0b],
            Self::Blue300 => [0x93, 0xc5, 0xfd],
            Self::Blue500 => [0x3b, 0x82, 0xf6],
            Self::Blue700 => [0x1d, 0x4e, 0xd8],
            Self::Red600 => [0xdc, 0x26, 0x26],
            Self::Purple800 => [0x6b, 0x21, 0xa8],
            Self::Gray400 => [0x9c, 0xa3, 0xaf],
            Self::Gray700 => [0x37, 0x41, 0x51],
            Self::Gray900 => [0x11, 0x18, 0x27],
        }
    }

    pub fn color(self) -> Color {
        let [r, g, b] = self.rgb();
        Color::srgb_u8(r, g, b)
    }
}
