//! Lookup table used while probing a band of grey levels.

use crate::{Lut, LUT_SIZE};

/// Return a table showing only the grey levels within `half_width` of
/// `center`: the center itself in red, the rest of the band in cyan
/// fading by 10 levels per step away from the center.
///
/// Outside the band, the table is the gray ramp (reversed when
/// `inverted`) if `dim_background`, and plain black (white when
/// `inverted`) otherwise.  `transparent` marks index 0 as the
/// transparent sentinel.
///
/// ```
/// use aladin_lut::build_band_table;
/// use rgb::RGB8;
/// let lut = build_band_table(100, 5, false, true, false);
/// assert_eq!(lut.color(100), RGB8::new(255, 0, 0));
/// assert_eq!(lut.color(102), RGB8::new(0, 235, 235));
/// assert_eq!(lut.color(90), RGB8::new(90, 90, 90));
/// ```
pub fn build_band_table(center: i32, half_width: i32, inverted: bool,
                        dim_background: bool, transparent: bool) -> Lut {
    let (center, half_width) = (center as i64, half_width as i64);
    let mut lut = Lut::new(transparent);
    for i in 0 .. LUT_SIZE as i64 {
        let (r, g, b) = {
            if i < center - half_width || i > center + half_width {
                let v = match (dim_background, inverted) {
                    (true, false) => i,
                    (true, true) => 255 - i,
                    (false, false) => 0,
                    (false, true) => 255,
                };
                (v, v, v)
            } else if i == center {
                (255, 0, 0)
            } else {
                let v = (255 - (i - center).abs() * 10).clamp(0, 255);
                (0, v, v)
            } };
        lut.set(i as usize, r as u8, g as u8, b as u8);
    }
    lut
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn gray(v: u8) -> RGB8 { RGB8::new(v, v, v) }

    #[test]
    fn center_marker_and_background() {
        for (inverted, dim) in [(false, false), (false, true),
                                (true, false), (true, true)] {
            let lut = build_band_table(128, 16, inverted, dim, false);
            assert_eq!(lut.color(128), RGB8::new(255, 0, 0));
            for i in (0 .. 112).chain(145 ..= 255) {
                let expected = match (dim, inverted) {
                    (true, false) => gray(i),
                    (true, true) => gray(255 - i),
                    (false, false) => gray(0),
                    (false, true) => gray(255),
                };
                assert_eq!(lut.color(i), expected, "index {i}");
            }
        }
    }

    #[test]
    fn band_fades_away_from_center() {
        let lut = build_band_table(128, 16, false, false, false);
        assert_eq!(lut.color(127), RGB8::new(0, 245, 245));
        assert_eq!(lut.color(129), RGB8::new(0, 245, 245));
        assert_eq!(lut.color(112), RGB8::new(0, 95, 95));
        assert_eq!(lut.color(144), RGB8::new(0, 95, 95));
    }

    #[test]
    fn wide_band_is_clamped() {
        let lut = build_band_table(128, 40, false, true, false);
        assert_eq!(lut.color(153), RGB8::new(0, 5, 5));
        assert_eq!(lut.color(154), RGB8::new(0, 0, 0));
        assert_eq!(lut.color(168), RGB8::new(0, 0, 0));
        assert_eq!(lut.color(88), RGB8::new(0, 0, 0));
        assert_eq!(lut.color(87), gray(87));
    }

    #[test]
    fn band_at_the_edges() {
        let lut = build_band_table(0, 3, false, false, true);
        assert!(lut.is_transparent());
        assert_eq!(lut.color(0), RGB8::new(255, 0, 0));
        assert_eq!(lut.rgba(0).a, 0);
        assert_eq!(lut.color(3), RGB8::new(0, 225, 225));
        assert_eq!(lut.color(4), gray(0));
        let lut = build_band_table(255, 2, true, true, false);
        assert_eq!(lut.color(255), RGB8::new(255, 0, 0));
        assert_eq!(lut.color(253), RGB8::new(0, 235, 235));
        assert_eq!(lut.color(252), gray(3));
    }

    #[test]
    fn extreme_arguments() {
        let lut = build_band_table(i32::MIN, 1, false, true, false);
        assert!((0 ..= 255).all(|i| lut.color(i) == gray(i)));
        let lut = build_band_table(i32::MAX, i32::MAX, false, false, false);
        assert!((0 ..= 255).all(|i| lut.color(i) == RGB8::new(0, 0, 0)));
        let lut = build_band_table(128, i32::MAX, false, false, false);
        assert_eq!(lut.color(128), RGB8::new(255, 0, 0));
        assert_eq!(lut.color(0), RGB8::new(0, 0, 0));
        let lut = build_band_table(i32::MIN, i32::MIN, true, false, false);
        assert!((0 ..= 255).all(|i| lut.color(i) == gray(255)));
    }
}
