//! The registry of named palettes.
//!
//! Codes `0 ..= BUILTIN_LAST_INDEX` are the built-in palettes, whose
//! meaning never changes.  Higher codes address the custom palettes in
//! registration order.

use std::{fmt,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};
use lazy_static::lazy_static;
use log::debug;
use crate::{hue, palettes, Palette, PaletteError, LUT_SIZE};

/// Number of built-in palettes.
pub const BUILTIN_COUNT: usize = 4;

/// Code of the last built-in palette.
pub const BUILTIN_LAST_INDEX: usize = BUILTIN_COUNT - 1;

/// The kind of a palette code, which decides how the engine obtains
/// the source colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteFamily {
    /// Identity gray ramp (code 0).
    Gray,
    /// Overlapping red, green and blue ramps, the "BB" palette (code 1).
    BlueBlack,
    /// Hand-tuned four segment ramps, the "A" palette (code 2).
    A,
    /// IDL "Stern special" table (code 3).
    Stern,
    /// The k-th custom palette.
    Custom(usize),
}

impl PaletteFamily {
    pub fn from_code(code: usize) -> Self {
        match code {
            0 => PaletteFamily::Gray,
            1 => PaletteFamily::BlueBlack,
            2 => PaletteFamily::A,
            3 => PaletteFamily::Stern,
            c => PaletteFamily::Custom(c - BUILTIN_COUNT),
        }
    }

    pub fn code(self) -> usize {
        match self {
            PaletteFamily::Gray => 0,
            PaletteFamily::BlueBlack => 1,
            PaletteFamily::A => 2,
            PaletteFamily::Stern => 3,
            PaletteFamily::Custom(k) => BUILTIN_COUNT + k,
        }
    }

    /// Table palettes are stored top-down, so the engine reads them
    /// with the inversion flag negated.
    pub fn flips_inversion(self) -> bool {
        matches!(self, PaletteFamily::Stern | PaletteFamily::Custom(_))
    }
}

/// Identity ramp over `0 .. 256 - gap`.
pub(crate) fn gray_ramp(gap: usize) -> Vec<u8> {
    (0 .. LUT_SIZE - gap).map(|i| i as u8).collect()
}

fn gray() -> Palette {
    let mut ramp = [0; LUT_SIZE];
    ramp.copy_from_slice(&gray_ramp(0));
    Palette::new("gray", ramp, ramp, ramp)
}

fn blue_black() -> Palette {
    let ramp = |i: usize, phase: usize| (2 * i.saturating_sub(phase)).min(255) as u8;
    let mut r = [0; LUT_SIZE];
    let mut g = [0; LUT_SIZE];
    let mut b = [0; LUT_SIZE];
    for i in 0 .. LUT_SIZE {
        r[i] = ramp(i, 0);
        g[i] = ramp(i, 64);
        b[i] = ramp(i, 128);
    }
    Palette::new("BB", r, g, b)
}

fn a() -> Palette {
    let mut r = [0; LUT_SIZE];
    let mut g = [0; LUT_SIZE];
    let mut b = [0; LUT_SIZE];
    for i in 0 .. LUT_SIZE {
        let ri = if i < 64 { 0 }
                 else if i < 128 { (i - 64) << 2 }
                 else { 255 };
        let gi = if i < 64 { i << 2 }
                 else if i < 128 { 255 - ((i - 64) << 2) }
                 else if i < 192 { 0 }
                 else { (i - 192) << 2 };
        let bi = if i < 32 { 0 }
                 else if i < 128 { ((i - 32) << 3) / 3 }
                 else if i < 192 { 255 - ((i - 128) << 2) }
                 else { 0 };
        r[i] = ri as u8;
        g[i] = gi as u8;
        b[i] = bi as u8;
    }
    Palette::new("A", r, g, b)
}

fn table(data: &palettes::ty::PaletteData) -> Palette {
    let (r, g, b) = data.channels();
    Palette::new(data.name, r, g, b)
}

/// Hue sweep at full saturation and value, starting half way round
/// the color wheel.
fn polar() -> Palette {
    let mut r = [0; LUT_SIZE];
    let mut g = [0; LUT_SIZE];
    let mut b = [0; LUT_SIZE];
    for i in 0 .. LUT_SIZE {
        let c = hue((i as f64 / LUT_SIZE as f64 + 0.5).fract());
        r[i] = c.r;
        g[i] = c.g;
        b[i] = c.b;
    }
    Palette::new("polar", r, g, b)
}

lazy_static! {
    static ref BUILTINS: [Arc<Palette>; BUILTIN_COUNT] = [
        Arc::new(gray()), Arc::new(blue_black()), Arc::new(a()),
        Arc::new(table(&palettes::STERN))];
}


/// Built-in and custom palettes, addressed by integer codes.
///
/// Custom palettes are append-only; registration may happen from
/// several threads at once.
///
/// ```
/// use aladin_lut::{Palette, PaletteRegistry, BUILTIN_LAST_INDEX};
/// let registry = PaletteRegistry::new();
/// let fire = registry.lookup(registry.code_of("fire").unwrap());
/// let mine = Palette::new("fire", *fire.blue(), *fire.green(), *fire.red());
/// assert_eq!(registry.register_custom(mine), "fire1");
/// assert_eq!(registry.names().last().map(String::as_str), Some("fire1"));
/// let k = registry.custom_count() - 1;
/// assert_eq!(registry.lookup(BUILTIN_LAST_INDEX + 1 + k).name(), "fire1");
/// ```
pub struct PaletteRegistry {
    customs: Mutex<Vec<Arc<Palette>>>,
}

impl Default for PaletteRegistry {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for PaletteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl PaletteRegistry {
    /// Return a registry holding the built-in palettes followed by the
    /// custom palettes rainbow, eosb, fire, cubehlx and polar.
    pub fn new() -> Self {
        let registry = PaletteRegistry { customs: Mutex::new(Vec::new()) };
        registry.register_builtins();
        registry
    }

    fn register_builtins(&self) {
        for data in palettes::REGISTERED_TABLES.iter() {
            self.register_custom(table(data));
        }
        self.register_custom(polar());
    }

    /// The custom list only ever grows, so it is consistent even if a
    /// thread panicked while holding the lock.
    fn customs(&self) -> MutexGuard<'_, Vec<Arc<Palette>>> {
        self.customs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `palette` to the custom palettes and return the name it
    /// is registered under: its own name if free, otherwise the name
    /// followed by the smallest integer ≥ 1 making it unique.
    pub fn register_custom(&self, mut palette: Palette) -> String {
        let mut customs = self.customs();
        let taken = |name: &str| {
            BUILTINS.iter().any(|p| p.name() == name)
                || customs.iter().any(|p| p.name() == name)
        };
        let base = palette.name().to_string();
        let mut name = base.clone();
        let mut k = 1;
        while taken(&name) {
            name = format!("{base}{k}");
            k += 1;
        }
        if name != base {
            debug!("palette “{base}” already registered, renamed “{name}”");
        }
        palette.rename(name.clone());
        customs.push(Arc::new(palette));
        debug!("registered palette “{name}” with code {}",
               BUILTIN_COUNT + customs.len() - 1);
        name
    }

    /// Names of all palettes: built-ins first, in code order, then
    /// the custom ones in registration order.
    pub fn names(&self) -> Vec<String> {
        BUILTINS.iter().map(|p| p.name().to_string())
            .chain(self.customs().iter().map(|p| p.name().to_string()))
            .collect()
    }

    /// Total number of palettes.
    pub fn len(&self) -> usize { BUILTIN_COUNT + self.custom_count() }

    /// Always false: the built-in palettes are always present.
    pub fn is_empty(&self) -> bool { false }

    pub fn custom_count(&self) -> usize { self.customs().len() }

    pub fn is_builtin(code: usize) -> bool { code <= BUILTIN_LAST_INDEX }

    /// The palette with this code, if any.
    pub fn get(&self, code: usize) -> Option<Arc<Palette>> {
        if Self::is_builtin(code) {
            Some(Arc::clone(&BUILTINS[code]))
        } else {
            self.customs().get(code - BUILTIN_COUNT).cloned()
        }
    }

    /// The palette with this code.
    ///
    /// # Panics
    /// If no palette has this code: codes come from [`Self::names`]
    /// or [`Self::code_of`], a stray one is a bug of the caller.
    pub fn lookup(&self, code: usize) -> Arc<Palette> {
        match self.get(code) {
            Some(p) => p,
            None => panic!("aladin-lut: {}", PaletteError::UnknownCode(code)),
        }
    }

    /// The code of the palette named `name`.
    pub fn code_of(&self, name: &str) -> Option<usize> {
        self.names().iter().position(|n| n == name)
    }

    /// The family of the palette with this code.
    pub fn family(&self, code: usize) -> Result<PaletteFamily, PaletteError> {
        if code < self.len() { Ok(PaletteFamily::from_code(code)) }
        else { Err(PaletteError::UnknownCode(code)) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, thread};
    use rgb::RGB8;

    #[test]
    fn builtin_then_custom_names() {
        let registry = PaletteRegistry::new();
        assert_eq!(registry.names(),
                   ["gray", "BB", "A", "Stern special",
                    "rainbow", "eosb", "fire", "cubehlx", "polar"]);
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.custom_count(), 5);
        assert_eq!(registry.code_of("rainbow"), Some(BUILTIN_LAST_INDEX + 1));
        assert_eq!(registry.code_of("polar"), Some(8));
        assert_eq!(registry.code_of("nope"), None);
    }

    #[test]
    fn builtin_ramps() {
        let registry = PaletteRegistry::new();
        let gray = registry.lookup(0);
        assert!((0 ..= 255).all(|i| gray.color(i) == RGB8::new(i, i, i)));
        let bb = registry.lookup(1);
        assert_eq!(bb.color(0), RGB8::new(0, 0, 0));
        assert_eq!(bb.color(100), RGB8::new(200, 72, 0));
        assert_eq!(bb.color(200), RGB8::new(255, 255, 144));
        let a = registry.lookup(2);
        assert_eq!(a.color(10), RGB8::new(0, 40, 0));
        assert_eq!(a.color(100), RGB8::new(144, 111, 181));
        assert_eq!(a.color(150), RGB8::new(255, 0, 167));
        assert_eq!(a.color(255), RGB8::new(255, 252, 0));
    }

    #[test]
    fn tables_are_top_down() {
        let registry = PaletteRegistry::new();
        let stern = registry.lookup(3);
        assert_eq!(stern.name(), "Stern special");
        assert_eq!(registry.code_of("Stern special"), Some(3));
        assert_eq!(stern.color(0), RGB8::new(255, 255, 255));
        assert_eq!(stern.color(255), RGB8::new(0, 0, 0));
        let fire = registry.lookup(registry.code_of("fire").unwrap());
        assert_eq!(fire.color(0), RGB8::new(255, 255, 255));
        assert_eq!(fire.color(255), RGB8::new(0, 0, 0));
    }

    #[test]
    fn polar_starts_half_way() {
        let registry = PaletteRegistry::new();
        let polar = registry.lookup(registry.code_of("polar").unwrap());
        assert_eq!(polar.color(0), RGB8::new(0, 255, 255));
        assert_eq!(polar.color(128), RGB8::new(255, 0, 0));
    }

    #[test]
    fn colliding_names_get_a_suffix() {
        let registry = PaletteRegistry::new();
        let p = Palette::clone(&registry.lookup(0));
        let mut mine = p.clone();
        mine.rename("mine".to_string());
        assert_eq!(registry.register_custom(mine.clone()), "mine");
        assert_eq!(registry.register_custom(mine), "mine1");
        let mut rainbow = p;
        rainbow.rename("rainbow".to_string());
        assert_eq!(registry.register_custom(rainbow.clone()), "rainbow1");
        assert_eq!(registry.register_custom(rainbow), "rainbow2");
        let names = registry.names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn custom_palettes_by_code() {
        let registry = PaletteRegistry::new();
        let first = registry.custom_count();
        let mut expected = Vec::new();
        for k in 0 .. 3u8 {
            let mut red = [0; LUT_SIZE];
            red[0] = k;
            let p = Palette::new(format!("user{k}"), red, [k; LUT_SIZE],
                                 [255 - k; LUT_SIZE]);
            registry.register_custom(p.clone());
            expected.push(p);
        }
        for (k, p) in expected.iter().enumerate() {
            let code = BUILTIN_LAST_INDEX + 1 + first + k;
            assert_eq!(*registry.lookup(code), *p);
            assert_eq!(registry.family(code),
                       Ok(PaletteFamily::Custom(first + k)));
        }
        let past = registry.len();
        assert!(registry.get(past).is_none());
        assert_eq!(registry.family(past), Err(PaletteError::UnknownCode(past)));
    }

    #[test]
    #[should_panic(expected = "unknown palette code 99")]
    fn lookup_unknown_code_panics() {
        PaletteRegistry::new().lookup(99);
    }

    #[test]
    fn concurrent_registrations_stay_unique() {
        let registry = PaletteRegistry::new();
        let p = Palette::clone(&registry.lookup(1));
        thread::scope(|s| {
            for _ in 0 .. 8 {
                s.spawn(|| {
                    for _ in 0 .. 10 {
                        let mut q = p.clone();
                        q.rename("shared".to_string());
                        registry.register_custom(q);
                    }
                });
            }
        });
        let names = registry.names();
        assert_eq!(names.len(), 9 + 80);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert!(names.contains(&"shared79".to_string()));
    }

    #[test]
    fn family_codes() {
        for code in 0 .. 12 {
            assert_eq!(PaletteFamily::from_code(code).code(), code);
        }
        assert!(!PaletteFamily::Gray.flips_inversion());
        assert!(!PaletteFamily::A.flips_inversion());
        assert!(PaletteFamily::Stern.flips_inversion());
        assert!(PaletteFamily::Custom(0).flips_inversion());
    }
}
