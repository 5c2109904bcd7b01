//! Transfer functions: a monotonic remap of the palette index that
//! compresses or expands contrast independently of the cut levels.

use std::{fmt, str::FromStr};
use crate::{PaletteError, LUT_SIZE};

/// The shape of the contrast curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde",
           derive(serde::Serialize, serde::Deserialize),
           serde(rename_all = "lowercase"))]
pub enum TransferFunction {
    #[default]
    Linear,
    Log,
    Sqrt,
    Sqr,
    Asinh,
}

impl TransferFunction {
    /// All transfer functions, in menu order.
    pub const ALL: [TransferFunction; 5] = [
        TransferFunction::Linear, TransferFunction::Log,
        TransferFunction::Sqrt, TransferFunction::Sqr,
        TransferFunction::Asinh];

    pub fn name(self) -> &'static str {
        match self {
            TransferFunction::Linear => "linear",
            TransferFunction::Log => "log",
            TransferFunction::Sqrt => "sqrt",
            TransferFunction::Sqr => "sqr",
            TransferFunction::Asinh => "asinh",
        }
    }

    /// The curve before rescaling, evaluated at the index `x`.
    fn curve(self, x: f64) -> f64 {
        match self {
            TransferFunction::Linear => x,
            TransferFunction::Log => (x / 10. + 1.).ln(),
            TransferFunction::Sqrt => (x / 10.).sqrt(),
            TransferFunction::Sqr => x * x,
            TransferFunction::Asinh => (x + (x * x + 1.).sqrt()).ln(),
        }
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransferFunction {
    type Err = PaletteError;

    /// Parse a transfer function name, ignoring case.  `pow2` is
    /// accepted for [`TransferFunction::Sqr`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(TransferFunction::Linear),
            "log" => Ok(TransferFunction::Log),
            "sqrt" => Ok(TransferFunction::Sqrt),
            "sqr" | "pow2" => Ok(TransferFunction::Sqr),
            "asinh" => Ok(TransferFunction::Asinh),
            _ => Err(PaletteError::UnknownTransfer(s.to_string())),
        }
    }
}

/// Return the index remap table of `fct`: 256 entries, or 255 when
/// `transparent` (index 0 of the final table is then reserved).
///
/// The curve is rescaled so that its range covers the whole table,
/// and every entry lies in `0 .. len`.
///
/// ```
/// use aladin_lut::{transfer_table, TransferFunction};
/// let t = transfer_table(TransferFunction::Sqrt, false);
/// assert_eq!(t.len(), 256);
/// assert_eq!((t[0], t[255]), (0, 255));
/// ```
pub fn transfer_table(fct: TransferFunction, transparent: bool) -> Vec<usize> {
    let n = if transparent { LUT_SIZE - 1 } else { LUT_SIZE };
    if fct == TransferFunction::Linear {
        return (0 .. n).collect()
    }
    let v: Vec<f64> = (0 .. n).map(|i| fct.curve(i as f64)).collect();
    let (min, max) = v.iter().fold((f64::INFINITY, f64::NEG_INFINITY),
                                   |(lo, hi), &x| (lo.min(x), hi.max(x)));
    let scale = n as f64 / (max - min);
    v.iter().map(|&x| ((scale * (x - min)).round() as usize).min(n - 1))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        let t = transfer_table(TransferFunction::Linear, false);
        assert_eq!(t, (0 .. 256).collect::<Vec<_>>());
        let t = transfer_table(TransferFunction::Linear, true);
        assert_eq!(t, (0 .. 255).collect::<Vec<_>>());
    }

    #[test]
    fn nonlinear_tables_are_monotonic() {
        for fct in TransferFunction::ALL {
            for transparent in [false, true] {
                let t = transfer_table(fct, transparent);
                let n = if transparent { 255 } else { 256 };
                assert_eq!(t.len(), n);
                assert!(t.windows(2).all(|w| w[0] <= w[1]),
                        "{fct} (transparent: {transparent}) decreases");
                assert_eq!(t[0], 0);
                assert_eq!(t[n - 1], n - 1, "{fct} does not reach the top");
            }
        }
    }

    #[test]
    fn curves_bend_the_right_way() {
        // Log, sqrt and asinh lift the shadows, the square darkens them.
        let mid = |f| transfer_table(f, false)[64];
        assert!(mid(TransferFunction::Log) > 64);
        assert!(mid(TransferFunction::Sqrt) > 64);
        assert!(mid(TransferFunction::Asinh) > 64);
        assert!(mid(TransferFunction::Sqr) < 64);
        assert_eq!(mid(TransferFunction::Sqr), 16);
    }

    #[test]
    fn names() {
        for fct in TransferFunction::ALL {
            assert_eq!(fct.to_string().parse::<TransferFunction>(), Ok(fct));
        }
        assert_eq!("POW2".parse::<TransferFunction>(), Ok(TransferFunction::Sqr));
        assert_eq!(" Asinh ".parse::<TransferFunction>(), Ok(TransferFunction::Asinh));
        assert_eq!("gamma".parse::<TransferFunction>(),
                   Err(PaletteError::UnknownTransfer("gamma".to_string())));
    }
}
