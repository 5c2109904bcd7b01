pub(crate) use rgb::RGB8;

/// A static palette table produced by the generator in `tools/`.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGB8>, // Invariant: length = 256, stored top-down
}

impl PaletteData {
    /// Split the table into its red, green and blue channels.
    pub(crate) fn channels(&self) -> ([u8; 256], [u8; 256], [u8; 256]) {
        let mut r = [0; 256];
        let mut g = [0; 256];
        let mut b = [0; 256];
        for (i, c) in self.rgb.iter().take(256).enumerate() {
            r[i] = c.r;
            g[i] = c.g;
            b[i] = c.b;
        }
        (r, g, b)
    }
}
