// Generates ../src/palettes.rs from palettes.hjson.  Run it from the
// tools/ directory: `cargo run --release`.

use std::{string::String,
          env,
          f64::consts::PI,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::{Map, Value::{self, *}};

const LEN: usize = 256;

#[derive(Debug)]
struct Table {
    name: String,
    ident: String,
    builtin: bool,
    rgb: Vec<[u8; 3]>, // Colors, bottom-up
}

fn number(v: &Value) -> f64 {
    match v {
        I64(x) => *x as f64,
        U64(x) => *x as f64,
        F64(x) => *x,
        _ => panic!("aladin-lut-tools: {v:?} is not a number"),
    }
}

fn string<'a>(m: &'a Map<String, Value>, key: &str) -> &'a str {
    match m.get(key) {
        Some(String(s)) => s,
        v => panic!("aladin-lut-tools: “{key}” must be a string, got {v:?}"),
    }
}

/// Convert a component in [0, 1] to a byte.
fn quantize(v: f64) -> u8 {
    (255. * v.clamp(0., 1.)).round() as u8
}

/// Control points `[x, y]` or `[x, y_left, y_right]`, as
/// `(x, y_left, y_right)`.
fn control_points(v: Option<&Value>) -> Vec<(f64, f64, f64)> {
    let pts = match v {
        Some(Array(a)) => a,
        _ => panic!("aladin-lut-tools: channel must be an array"),
    };
    let pts: Vec<_> = pts.iter().map(|p| match p {
        Array(p) if p.len() == 2 => {
            let y = number(&p[1]);
            (number(&p[0]), y, y)
        }
        Array(p) if p.len() == 3 =>
            (number(&p[0]), number(&p[1]), number(&p[2])),
        _ => panic!("aladin-lut-tools: bad control point {p:?}"),
    }).collect();
    assert!(pts.len() >= 2, "aladin-lut-tools: need two control points");
    assert_eq!(pts[0].0, 0.);
    assert_eq!(pts[pts.len() - 1].0, 1.);
    pts
}

/// Piecewise linear interpolation of the control points at `x`.
fn segment(pts: &[(f64, f64, f64)], x: f64) -> f64 {
    for w in pts.windows(2) {
        let (x0, _, y0) = w[0];
        let (x1, y1, _) = w[1];
        if x <= x1 {
            if x1 == x0 { return y0 }
            return y0 + (x - x0) / (x1 - x0) * (y1 - y0)
        }
    }
    pts[pts.len() - 1].2
}

fn segmented(m: &Map<String, Value>) -> Vec<[u8; 3]> {
    let red = control_points(m.get("red"));
    let green = control_points(m.get("green"));
    let blue = control_points(m.get("blue"));
    (0 .. LEN).map(|i| {
        let x = i as f64 / (LEN - 1) as f64;
        [quantize(segment(&red, x)),
         quantize(segment(&green, x)),
         quantize(segment(&blue, x))]
    }).collect()
}

fn cubehelix(p: &Map<String, Value>) -> Vec<[u8; 3]> {
    let param = |k: &str| match p.get(k) {
        Some(v) => number(v),
        None => panic!("aladin-lut-tools: cubehelix needs “{k}”"),
    };
    let (start, rot, hue, gamma) =
        (param("start"), param("rotations"), param("hue"), param("gamma"));
    (0 .. LEN).map(|i| {
        let fract = i as f64 / (LEN - 1) as f64;
        let angle = 2. * PI * (start / 3. + 1. + rot * fract);
        let f = fract.powf(gamma);
        let amp = hue * f * (1. - f) / 2.;
        let (s, c) = angle.sin_cos();
        [quantize(f + amp * (-0.14861 * c + 1.78277 * s)),
         quantize(f + amp * (-0.29227 * c - 0.90649 * s)),
         quantize(f + amp * (1.97294 * c))]
    }).collect()
}

fn tables_from_json(json: Value) -> Vec<Table> {
    let entries = match json {
        Array(a) => a,
        _ => panic!("aladin-lut-tools: expected a list of palettes"),
    };
    entries.into_iter().map(|e| {
        let m = match e {
            Object(m) => m,
            _ => panic!("aladin-lut-tools: palette must be an object"),
        };
        let rgb = match m.get("cubehelix") {
            Some(Object(p)) => cubehelix(p),
            Some(v) => panic!("aladin-lut-tools: bad cubehelix {v:?}"),
            None => segmented(&m),
        };
        let builtin = matches!(m.get("builtin"), Some(Bool(true)));
        Table { name: string(&m, "name").to_string(),
                ident: string(&m, "ident").to_string(),
                builtin, rgb }
    }).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let fh = File::open("palettes.hjson")?;
    let json: Value = serde_hjson::from_reader(fh)?;
    let tables = tables_from_json(json);

    let mut fh = BufWriter::new(File::create("../src/palettes.rs")?);
    writeln!(fh, "// Written by {} from tools/palettes.hjson\n\
                  // Colors rebuilt from published control points, \
                  not Aladin's exact tables.\n\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;\n",
             env::args().next().unwrap_or_default())?;

    for t in &tables {
        write!(fh, "lazy_static! {{\n  \
                    pub(crate) static ref {}: PaletteData = {{\n  \
                    PaletteData {{\n    \
                    name: \"{}\",\n    \
                    rgb: vec![\n",
               t.ident, t.name)?;
        // Top-down: the engine negates the inversion flag for these.
        let rgb: Vec<_> = t.rgb.iter().rev().collect();
        for row in rgb.chunks(4) {
            let row: Vec<_> = row.iter()
                .map(|[r, g, b]| format!("RGB8{{r: {r:3}, g: {g:3}, b: {b:3}}},"))
                .collect();
            writeln!(fh, "      {}", row.join(" "))?;
        }
        writeln!(fh, "    ]}}\n  }};\n}}\n")?;
    }

    let registered: Vec<_> = tables.iter().filter(|t| !t.builtin)
        .map(|t| format!("&*{}", t.ident)).collect();
    write!(fh, "lazy_static! {{\n  \
                pub(crate) static ref REGISTERED_TABLES: \
                [&'static PaletteData; {}] = [\n    {}];\n}}\n",
           registered.len(), registered.join(", "))?;

    Ok(())
}
