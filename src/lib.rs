//! Lookup tables for displaying 8-bit sky images.
//!
//! - [`PaletteRegistry`]: the built-in palettes (gray, `BB`, `A`,
//!   Stern special) and the custom ones (rainbow, EOSB, fire,
//!   cube-helix, polar and any registered by the user).
//! - [`build_lookup_table`]: turns [`RenderParams`] (three cut
//!   levels, a palette, a [`TransferFunction`], inversion and
//!   transparency) into a 256-entry [`Lut`].
//! - [`build_band_table`]: a [`Lut`] highlighting a narrow band of
//!   grey levels.
//!
//! ```
//! use aladin_lut::{PaletteRegistry, RenderParams, Thresholds,
//!                  TransferFunction, build_lookup_table};
//! let registry = PaletteRegistry::new();
//! let params = RenderParams::default()
//!     .palette(registry.code_of("fire").unwrap())
//!     .thresholds(Thresholds::new(10, 80, 200).unwrap())
//!     .transfer(TransferFunction::Asinh);
//! let lut = build_lookup_table(&registry, &params);
//! let pixels = lut.apply(&[0, 128, 255]);
//! assert_eq!(pixels.len(), 3);
//! ```

use std::fmt;
use rgb::{RGB8, RGBA8};

mod palettes;
mod registry;
mod transfer;
mod thresholds;
mod engine;
mod band;

pub use registry::{PaletteFamily, PaletteRegistry,
                   BUILTIN_COUNT, BUILTIN_LAST_INDEX};
pub use transfer::{TransferFunction, transfer_table};
pub use thresholds::{Thresholds, MIN_GAP};
pub use engine::{build_lookup_table, interpolate};
pub use band::build_band_table;

/// Number of entries of a [`Palette`] or a [`Lut`].
pub const LUT_SIZE: usize = 256;

/// Errors reported by the fallible constructors of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No palette is registered under this code.
    UnknownCode(usize),
    /// The cut levels do not satisfy
    /// `0 <= low`, `low + 5 <= mid`, `mid + 5 <= high <= 255`.
    InvalidThresholds { low: i32, mid: i32, high: i32 },
    /// A palette must have exactly 256 colors.
    WrongLength(usize),
    /// Not the name of a [`TransferFunction`].
    UnknownTransfer(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCode(code) => write!(f, "unknown palette code {code}"),
            Self::InvalidThresholds { low, mid, high } => write!(
                f,
                "invalid cut levels ({low}, {mid}, {high}): expected \
                 0 <= low, low + {MIN_GAP} <= mid, mid + {MIN_GAP} <= high <= 255",
            ),
            Self::WrongLength(n) => write!(
                f, "a palette needs {LUT_SIZE} colors, got {n}"),
            Self::UnknownTransfer(name) => write!(
                f, "unknown transfer function “{name}”"),
        }
    }
}

impl std::error::Error for PaletteError {}


/// A named source palette: 256 colors split into red, green and blue
/// channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: String,
    red: [u8; LUT_SIZE],
    green: [u8; LUT_SIZE],
    blue: [u8; LUT_SIZE],
}

impl Palette {
    /// Create a palette from its three channels.
    pub fn new(name: impl Into<String>, red: [u8; LUT_SIZE],
               green: [u8; LUT_SIZE], blue: [u8; LUT_SIZE]) -> Self {
        Self { name: name.into(), red, green, blue }
    }

    /// Create a palette from exactly 256 colors.
    ///
    /// ```
    /// use aladin_lut::Palette;
    /// use rgb::RGB8;
    /// let ramp: Vec<_> = (0 ..= 255).map(|v| RGB8::new(v, 0, 255 - v)).collect();
    /// let p = Palette::from_colors("redblue", &ramp).unwrap();
    /// assert_eq!(p.color(255), RGB8::new(255, 0, 0));
    /// assert!(Palette::from_colors("short", &ramp[.. 10]).is_err());
    /// ```
    pub fn from_colors(name: impl Into<String>, colors: &[RGB8])
                       -> Result<Self, PaletteError> {
        if colors.len() != LUT_SIZE {
            return Err(PaletteError::WrongLength(colors.len()))
        }
        let mut red = [0; LUT_SIZE];
        let mut green = [0; LUT_SIZE];
        let mut blue = [0; LUT_SIZE];
        for (i, c) in colors.iter().enumerate() {
            red[i] = c.r;
            green[i] = c.g;
            blue[i] = c.b;
        }
        Ok(Self::new(name, red, green, blue))
    }

    pub fn name(&self) -> &str { &self.name }

    pub(crate) fn rename(&mut self, name: String) { self.name = name }

    pub fn red(&self) -> &[u8; LUT_SIZE] { &self.red }
    pub fn green(&self) -> &[u8; LUT_SIZE] { &self.green }
    pub fn blue(&self) -> &[u8; LUT_SIZE] { &self.blue }

    /// The color at index `i`.
    pub fn color(&self, i: u8) -> RGB8 {
        let i = i as usize;
        RGB8::new(self.red[i], self.green[i], self.blue[i])
    }

    /// All the colors of the palette, in index order.
    pub fn colors(&self) -> Vec<RGB8> {
        (0 ..= 255).map(|i| self.color(i)).collect()
    }

    pub(crate) fn channels(&self) -> [&[u8]; 3] {
        [&self.red[..], &self.green[..], &self.blue[..]]
    }
}


/// A computed lookup table mapping 8-bit pixel values to colors.
///
/// When the table is transparent, index 0 is reserved as the
/// transparent sentinel and the data occupy indices 1 to 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut {
    r: [u8; LUT_SIZE],
    g: [u8; LUT_SIZE],
    b: [u8; LUT_SIZE],
    transparent: bool,
}

impl Lut {
    pub(crate) fn new(transparent: bool) -> Self {
        Lut { r: [0; LUT_SIZE], g: [0; LUT_SIZE], b: [0; LUT_SIZE],
              transparent }
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, r: u8, g: u8, b: u8) {
        self.r[i] = r;
        self.g[i] = g;
        self.b[i] = b;
    }

    pub fn red(&self) -> &[u8; LUT_SIZE] { &self.r }
    pub fn green(&self) -> &[u8; LUT_SIZE] { &self.g }
    pub fn blue(&self) -> &[u8; LUT_SIZE] { &self.b }

    /// Says whether index 0 is the transparent sentinel.
    pub fn is_transparent(&self) -> bool { self.transparent }

    /// The color of the pixel value `i`.
    #[inline]
    pub fn color(&self, i: u8) -> RGB8 {
        let i = i as usize;
        RGB8::new(self.r[i], self.g[i], self.b[i])
    }

    /// The color of the pixel value `i` with its opacity: fully
    /// transparent for index 0 of a transparent table, opaque
    /// otherwise.
    #[inline]
    pub fn rgba(&self, i: u8) -> RGBA8 {
        let a = if self.transparent && i == 0 { 0 } else { 255 };
        let c = self.color(i);
        RGBA8::new(c.r, c.g, c.b, a)
    }

    /// All 256 colors of the table.
    pub fn colors(&self) -> Vec<RGB8> {
        (0 ..= 255).map(|i| self.color(i)).collect()
    }

    /// Map a buffer of 8-bit pixels to colors.
    pub fn apply(&self, pixels: &[u8]) -> Vec<RGB8> {
        pixels.iter().map(|&p| self.color(p)).collect()
    }

    /// Map a buffer of 8-bit pixels to colors with opacity.
    pub fn apply_rgba(&self, pixels: &[u8]) -> Vec<RGBA8> {
        pixels.iter().map(|&p| self.rgba(p)).collect()
    }
}


/// Everything [`build_lookup_table`] needs to compute a [`Lut`].
///
/// The setters consume and return the value so that parameters can
/// be chained from [`RenderParams::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderParams {
    pub thresholds: Thresholds,
    pub inverted: bool,
    /// Palette code in the [`PaletteRegistry`].
    pub palette: usize,
    pub transfer: TransferFunction,
    pub transparent: bool,
}

impl RenderParams {
    pub fn thresholds(mut self, t: Thresholds) -> Self {
        self.thresholds = t;
        self
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn palette(mut self, code: usize) -> Self {
        self.palette = code;
        self
    }

    pub fn transfer(mut self, f: TransferFunction) -> Self {
        self.transfer = f;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}


/// Return the fully saturated, full value color of the hue `h` ∈
/// \[0., 1.\].
pub(crate) fn hue(h: f64) -> RGB8 {
    let t = 6. * h;
    let f = 255. * t.fract();
    let ti = t.trunc().rem_euclid(6.);
    let (r, g, b) = {
        if ti == 0.      { (255., f, 0.) }
        else if ti == 1. { (255. - f, 255., 0.) }
        else if ti == 2. { (0., 255., f) }
        else if ti == 3. { (0., 255. - f, 255.) }
        else if ti == 4. { (f, 0., 255.) }
        else             { (255., 0., 255. - f) }
    };
    RGB8::new(r.round() as u8, g.round() as u8, b.round() as u8)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_sectors() {
        assert_eq!(hue(0.), RGB8::new(255, 0, 0));
        assert_eq!(hue(1. / 3.), RGB8::new(0, 255, 0));
        assert_eq!(hue(2. / 3.), RGB8::new(0, 0, 255));
        assert_eq!(hue(0.5), RGB8::new(0, 255, 255));
    }

    #[test]
    fn palette_from_colors() {
        let colors: Vec<_> = (0 ..= 255u8).map(|v| RGB8::new(v, v / 2, 255 - v))
            .collect();
        let p = Palette::from_colors("ramp", &colors).unwrap();
        assert_eq!(p.name(), "ramp");
        assert_eq!(p.colors(), colors);
        assert_eq!(p.green()[200], 100);
        assert_eq!(Palette::from_colors("x", &colors[1 ..]),
                   Err(PaletteError::WrongLength(255)));
    }

    #[test]
    fn lut_transparent_alpha() {
        let mut lut = Lut::new(true);
        lut.set(1, 10, 20, 30);
        assert_eq!(lut.rgba(0).a, 0);
        assert_eq!(lut.rgba(1), RGBA8::new(10, 20, 30, 255));
        let opaque = Lut::new(false);
        assert_eq!(opaque.rgba(0).a, 255);
        assert_eq!(lut.apply_rgba(&[0, 1]),
                   vec![RGBA8::new(0, 0, 0, 0), RGBA8::new(10, 20, 30, 255)]);
    }

    #[test]
    fn render_params_builder() {
        let p = RenderParams::default()
            .inverted(true)
            .palette(3)
            .transfer(TransferFunction::Log)
            .transparent(true);
        assert!(p.inverted && p.transparent);
        assert_eq!(p.palette, 3);
        assert_eq!(p.transfer, TransferFunction::Log);
        assert_eq!(p.thresholds, Thresholds::default());
    }

    #[test]
    fn error_messages() {
        let e = PaletteError::InvalidThresholds { low: 10, mid: 12, high: 200 };
        assert!(e.to_string().contains("(10, 12, 200)"));
        assert_eq!(PaletteError::UnknownCode(42).to_string(),
                   "unknown palette code 42");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn render_params_round_trip() {
        let p = RenderParams::default()
            .palette(5)
            .transfer(TransferFunction::Asinh)
            .thresholds(Thresholds::new(10, 60, 200).unwrap());
        let s = serde_json::to_string(&p).unwrap();
        assert!(s.contains("\"asinh\""), "{s}");
        assert!(s.contains("[10,60,200]"), "{s}");
        assert_eq!(serde_json::from_str::<RenderParams>(&s).unwrap(), p);
        let bad = s.replace("[10,60,200]", "[10,11,200]");
        assert!(serde_json::from_str::<RenderParams>(&bad).is_err());
    }
}
