//! Computation of the lookup table from the rendering parameters.

use log::trace;
use crate::{registry::gray_ramp, transfer_table, Lut, PaletteFamily,
            PaletteRegistry, RenderParams, Thresholds, TransferFunction,
            LUT_SIZE};

/// Compute the lookup table for `params`.
///
/// # Panics
/// If `params.palette` is not a code of `registry`.
///
/// ```
/// use aladin_lut::{PaletteRegistry, RenderParams, build_lookup_table};
/// let registry = PaletteRegistry::new();
/// let lut = build_lookup_table(&registry, &RenderParams::default());
/// assert!((0 ..= 255).all(|i| lut.red()[i as usize] == i));
/// ```
pub fn build_lookup_table(registry: &PaletteRegistry,
                          params: &RenderParams) -> Lut {
    let family = PaletteFamily::from_code(params.palette);
    let inverted = params.inverted ^ family.flips_inversion();
    trace!("lookup table: {family:?}, {:?}, inverted {}, {}, transparent {}",
           params.thresholds, params.inverted, params.transfer,
           params.transparent);
    match family {
        PaletteFamily::Gray => {
            let ramp = gray_ramp(params.transparent as usize);
            let ramp = ramp.as_slice();
            interpolate([ramp, ramp, ramp], inverted, params.transparent,
                        params.thresholds, params.transfer)
        }
        _ => {
            let palette = registry.lookup(params.palette);
            interpolate(palette.channels(), inverted, params.transparent,
                        params.thresholds, params.transfer)
        }
    }
}

/// Map the pixel values onto the `source` channels (red, green,
/// blue) through the cut levels and the transfer function.
///
/// Values below `low` take the first source color and values from
/// `high` on the last one.  In between, `low .. mid` is stretched
/// linearly over the first half of the source and `mid .. high` over
/// the second half; the resulting index is then remapped by
/// [`transfer_table`](crate::transfer_table).  With `inverted`, the
/// source is read backwards.
///
/// When `transparent`, index 0 of the result is the transparent
/// sentinel: it is left black and the 255 remaining entries receive
/// the data.
///
/// # Panics
/// If the three channels are empty or of different lengths.
pub fn interpolate(source: [&[u8]; 3], inverted: bool, transparent: bool,
                   t: Thresholds, fct: TransferFunction) -> Lut {
    let [sr, sg, sb] = source;
    assert!(!sr.is_empty() && sr.len() == sg.len() && sr.len() == sb.len(),
            "aladin-lut: source channels of lengths {}, {}, {}",
            sr.len(), sg.len(), sb.len());
    let range = if transparent { LUT_SIZE - 1 } else { LUT_SIZE };
    let gap = LUT_SIZE - range;
    let mid_domain = (range / 2) as f64;
    let (low, mid, high) = (t.low() as usize, t.mid() as usize,
                            t.high() as usize);
    let pas1 = mid_domain / (mid - low) as f64;
    let pas2 = mid_domain / (high - mid) as f64;
    let max_index = sr.len() - 1;
    let table = transfer_table(fct, transparent);

    let mut lut = Lut::new(transparent);
    for i in 0 .. range {
        let j = {
            if i < low { 0 }
            else if i < mid { ((i - low) as f64 * pas1) as usize }
            else if i < high { (mid_domain + (i - mid) as f64 * pas2) as usize }
            else { max_index } };
        // The table is one entry short of the source when transparent.
        let j = table[j.min(table.len() - 1)].min(max_index);
        let j = if inverted { max_index - j } else { j };
        lut.set(i + gap, sr[j], sg[j], sb[j]);
    }
    lut
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Palette, BUILTIN_LAST_INDEX};

    fn params(code: usize) -> RenderParams {
        RenderParams::default().palette(code)
    }

    fn reversed(p: &Palette) -> [Vec<u8>; 3] {
        let rev = |c: &[u8; LUT_SIZE]| -> Vec<u8> { c.iter().rev().copied().collect() };
        [rev(p.red()), rev(p.green()), rev(p.blue())]
    }

    #[test]
    fn gray_identity() {
        let registry = PaletteRegistry::new();
        let lut = build_lookup_table(&registry, &params(0));
        let ramp: Vec<u8> = (0 ..= 255).collect();
        assert_eq!(lut.red().to_vec(), ramp);
        assert_eq!(lut.green().to_vec(), ramp);
        assert_eq!(lut.blue().to_vec(), ramp);
        assert!(!lut.is_transparent());
    }

    #[test]
    fn cut_levels_shape_the_curve() {
        let registry = PaletteRegistry::new();
        let t = Thresholds::new(50, 100, 200).unwrap();
        let lut = build_lookup_table(&registry, &params(0).thresholds(t));
        let r = lut.red();
        assert!(r[.. 50].iter().all(|&v| v == 0));
        assert!(r[200 ..].iter().all(|&v| v == 255));
        assert_eq!(r[75], 64);
        assert_eq!(r[100], 128);
        assert_eq!(r[150], 192);
        assert!(r.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn inverted_gray_is_complement() {
        let registry = PaletteRegistry::new();
        for t in [Thresholds::default(), Thresholds::new(30, 90, 240).unwrap(),
                  Thresholds::new(0, 5, 10).unwrap()] {
            for fct in TransferFunction::ALL {
                let p = params(0).thresholds(t).transfer(fct);
                let lut = build_lookup_table(&registry, &p);
                let inv = build_lookup_table(&registry, &p.inverted(true));
                for i in 0 .. LUT_SIZE {
                    assert_eq!(inv.red()[i], 255 - lut.red()[i]);
                }
            }
        }
    }

    #[test]
    fn inversion_mirrors_synthetic_ramps() {
        let registry = PaletteRegistry::new();
        for code in 0 ..= 2 {
            let lut = build_lookup_table(&registry, &params(code));
            let inv = build_lookup_table(&registry, &params(code).inverted(true));
            for i in 0 ..= 255u8 {
                assert_eq!(inv.color(i), lut.color(255 - i), "code {code}");
            }
        }
    }

    #[test]
    fn inversion_reads_source_backwards() {
        let registry = PaletteRegistry::new();
        let t = Thresholds::new(20, 60, 180).unwrap();
        let a = registry.lookup(2);
        let [r, g, b] = reversed(&a);
        for fct in TransferFunction::ALL {
            let inv = build_lookup_table(
                &registry, &params(2).thresholds(t).transfer(fct).inverted(true));
            let expected = interpolate([&r[..], &g[..], &b[..]], false, false, t, fct);
            assert_eq!(inv, expected);
        }
    }

    #[test]
    fn table_palettes_negate_inversion() {
        let registry = PaletteRegistry::new();
        let t = Thresholds::new(10, 100, 220).unwrap();
        for code in [3, BUILTIN_LAST_INDEX + 1, registry.len() - 1] {
            let palette = registry.lookup(code);
            for inverted in [false, true] {
                let p = params(code).thresholds(t).inverted(inverted)
                    .transfer(TransferFunction::Sqrt);
                let lut = build_lookup_table(&registry, &p);
                let expected = interpolate(palette.channels(), !inverted, false,
                                           t, TransferFunction::Sqrt);
                assert_eq!(lut, expected);
            }
        }
        // Top-down storage: the default orientation goes dark to bright.
        let stern = build_lookup_table(&registry, &params(3));
        assert_eq!(stern.color(0), rgb::RGB8::new(0, 0, 0));
        assert_eq!(stern.color(255), rgb::RGB8::new(255, 255, 255));
    }

    #[test]
    fn transparent_leaves_index_zero() {
        let registry = PaletteRegistry::new();
        for code in 0 .. registry.len() {
            for inverted in [false, true] {
                let p = params(code).transparent(true).inverted(inverted)
                    .transfer(TransferFunction::Log);
                let lut = build_lookup_table(&registry, &p);
                assert!(lut.is_transparent());
                assert_eq!(lut.color(0), rgb::RGB8::new(0, 0, 0));
                assert_eq!(lut.rgba(0).a, 0);
            }
        }
        // The gray data shift up by one and span 0 ..= 254.
        let lut = build_lookup_table(&registry, &params(0).transparent(true));
        assert_eq!(lut.red()[1], 0);
        assert_eq!(lut.red()[255], 253);
        assert!(lut.red()[1 ..].windows(2).all(|w| w[0] <= w[1]));
        let inv = build_lookup_table(&registry,
                                     &params(0).transparent(true).inverted(true));
        assert_eq!(inv.red()[0], 0);
        assert_eq!(inv.red()[1], 254);
        assert_eq!(inv.red()[255], 1);
    }

    #[test]
    fn transparent_writes_only_from_one() {
        let white = [255u8; LUT_SIZE];
        let lut = interpolate([&white[..], &white[..], &white[..]], false, true,
                              Thresholds::default(), TransferFunction::Linear);
        assert_eq!(lut.color(0), rgb::RGB8::new(0, 0, 0));
        assert!((1 ..= 255).all(|i| lut.color(i) == rgb::RGB8::new(255, 255, 255)));
    }

    #[test]
    fn transfer_function_is_applied_after_cuts() {
        let registry = PaletteRegistry::new();
        let lut = build_lookup_table(&registry,
                                     &params(0).transfer(TransferFunction::Sqr));
        let table = transfer_table(TransferFunction::Sqr, false);
        for i in 0 .. LUT_SIZE {
            assert_eq!(lut.red()[i] as usize, table[i]);
        }
    }

    #[test]
    fn short_sources() {
        let ramp = [0u8, 100, 200];
        let lut = interpolate([&ramp[..], &ramp[..], &ramp[..]], false, false,
                              Thresholds::default(), TransferFunction::Linear);
        assert_eq!(lut.red()[.. 3], [0, 100, 200]);
        assert!(lut.red()[3 ..].iter().all(|&v| v == 200));
    }

    #[test]
    #[should_panic]
    fn mismatched_channels() {
        let a = [0u8; 4];
        let b = [0u8; 3];
        interpolate([&a[..], &a[..], &b[..]], false, false, Thresholds::default(),
                    TransferFunction::Linear);
    }
}
