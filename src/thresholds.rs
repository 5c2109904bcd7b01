//! The three cut levels shaping the contrast curve.

use crate::PaletteError;

/// Minimum distance between two consecutive cut levels.
pub const MIN_GAP: i32 = 5;

const MAX: i32 = 255;

/// Three cut levels `low`, `mid` and `high` with
/// `0 <= low`, `low + MIN_GAP <= mid` and `mid + MIN_GAP <= high <= 255`.
///
/// Pixel values below `low` get the first palette color, values above
/// `high` the last one, and `mid` is mapped to the middle of the
/// palette.  The invariant guarantees that both slopes of the curve
/// are finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(try_from = "[i32; 3]", into = "[i32; 3]"))]
pub struct Thresholds {
    low: u8,
    mid: u8,
    high: u8,
}

impl Default for Thresholds {
    fn default() -> Self { Thresholds { low: 0, mid: 128, high: 255 } }
}

impl Thresholds {
    /// Check the cut levels.
    ///
    /// ```
    /// use aladin_lut::Thresholds;
    /// assert!(Thresholds::new(0, 128, 255).is_ok());
    /// assert!(Thresholds::new(100, 102, 200).is_err());
    /// ```
    pub fn new(low: i32, mid: i32, high: i32) -> Result<Self, PaletteError> {
        let in_range = |v: i32| (0 ..= MAX).contains(&v);
        if !(in_range(low) && in_range(mid) && in_range(high))
            || mid - low < MIN_GAP || high - mid < MIN_GAP {
            return Err(PaletteError::InvalidThresholds { low, mid, high })
        }
        Ok(Thresholds { low: low as u8, mid: mid as u8, high: high as u8 })
    }

    /// Clamp arbitrary cut levels into valid ones.  `low` is fixed
    /// first, then `high`, and `mid` takes what room is left.
    ///
    /// ```
    /// use aladin_lut::Thresholds;
    /// let t = Thresholds::normalized(-3, 300, 120);
    /// assert_eq!((t.low(), t.mid(), t.high()), (0, 115, 120));
    /// ```
    pub fn normalized(low: i32, mid: i32, high: i32) -> Self {
        let low = low.clamp(0, MAX - 2 * MIN_GAP);
        let high = high.clamp(low + 2 * MIN_GAP, MAX);
        let mid = mid.clamp(low + MIN_GAP, high - MIN_GAP);
        Thresholds { low: low as u8, mid: mid as u8, high: high as u8 }
    }

    pub fn low(&self) -> u8 { self.low }
    pub fn mid(&self) -> u8 { self.mid }
    pub fn high(&self) -> u8 { self.high }

    /// Drag the low cut to `v`; it stops `MIN_GAP` short of `mid`.
    pub fn with_low(self, v: i32) -> Self {
        let low = v.clamp(0, self.mid as i32 - MIN_GAP);
        Thresholds { low: low as u8, ..self }
    }

    /// Drag the middle cut to `v`; it stays `MIN_GAP` away from both
    /// neighbours.
    pub fn with_mid(self, v: i32) -> Self {
        let mid = v.clamp(self.low as i32 + MIN_GAP, self.high as i32 - MIN_GAP);
        Thresholds { mid: mid as u8, ..self }
    }

    /// Drag the high cut to `v`; it stops `MIN_GAP` short of `mid`.
    pub fn with_high(self, v: i32) -> Self {
        let high = v.clamp(self.mid as i32 + MIN_GAP, MAX);
        Thresholds { high: high as u8, ..self }
    }
}

impl TryFrom<[i32; 3]> for Thresholds {
    type Error = PaletteError;

    fn try_from([low, mid, high]: [i32; 3]) -> Result<Self, Self::Error> {
        Thresholds::new(low, mid, high)
    }
}

impl From<Thresholds> for [i32; 3] {
    fn from(t: Thresholds) -> Self {
        [t.low as i32, t.mid as i32, t.high as i32]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triple(t: Thresholds) -> (u8, u8, u8) { (t.low(), t.mid(), t.high()) }

    #[test]
    fn validation() {
        assert_eq!(triple(Thresholds::new(0, 5, 10).unwrap()), (0, 5, 10));
        assert_eq!(triple(Thresholds::new(245, 250, 255).unwrap()),
                   (245, 250, 255));
        for (l, m, h) in [(-1, 128, 255), (0, 4, 255), (0, 128, 132),
                          (0, 128, 256), (100, 100, 100),
                          (0, 100, i32::MIN), (i32::MIN, 100, 200),
                          (0, i32::MAX, 255), (i32::MAX, i32::MIN, i32::MAX)] {
            assert_eq!(Thresholds::new(l, m, h),
                       Err(PaletteError::InvalidThresholds { low: l, mid: m,
                                                             high: h }));
        }
    }

    #[test]
    fn normalization_always_valid() {
        for l in (-20 .. 280).step_by(7) {
            for m in (-20 .. 280).step_by(11) {
                for h in (-20 .. 280).step_by(13) {
                    let t = Thresholds::normalized(l, m, h);
                    let (l, m, h) = (t.low() as i32, t.mid() as i32,
                                     t.high() as i32);
                    assert!(Thresholds::new(l, m, h).is_ok(), "{t:?}");
                }
            }
        }
        assert_eq!(triple(Thresholds::normalized(10, 60, 200)), (10, 60, 200));
        assert_eq!(triple(Thresholds::normalized(250, 0, 0)), (245, 250, 255));
    }

    #[test]
    fn dragging_stops_at_neighbours() {
        let t = Thresholds::new(50, 100, 150).unwrap();
        assert_eq!(triple(t.with_low(120)), (95, 100, 150));
        assert_eq!(triple(t.with_low(-10)), (0, 100, 150));
        assert_eq!(triple(t.with_mid(10)), (50, 55, 150));
        assert_eq!(triple(t.with_mid(200)), (50, 145, 150));
        assert_eq!(triple(t.with_high(20)), (50, 100, 105));
        assert_eq!(triple(t.with_high(999)), (50, 100, 255));
        assert_eq!(triple(t.with_mid(120)), (50, 120, 150));
    }

    #[test]
    fn array_conversion() {
        let t = Thresholds::try_from([10, 60, 200]).unwrap();
        assert_eq!(<[i32; 3]>::from(t), [10, 60, 200]);
        assert!(Thresholds::try_from([10, 11, 200]).is_err());
    }
}
