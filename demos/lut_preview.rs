// Writes lut_preview.html showing every palette, the transfer
// functions and a band table.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use aladin_lut::{build_band_table, build_lookup_table, Lut, PaletteRegistry,
                 RenderParams, Thresholds, TransferFunction};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, lut: &Lut, comment: &str)
                   -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in lut.colors() {
        writeln!(fh, "  <td style=\"width: 2px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let registry = PaletteRegistry::new();
    let mut fh = BufWriter::new(File::create("lut_preview.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>aladin-lut: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    for (code, name) in registry.names().iter().enumerate() {
        let params = RenderParams::default().palette(code);
        table_of_colors(&mut fh, &build_lookup_table(&registry, &params), name)?;
        let lut = build_lookup_table(&registry, &params.inverted(true));
        table_of_colors(&mut fh, &lut, &format!("{name} (inverted)"))?;
    }

    writeln!(fh, "<h3>Transfer functions</h3>")?;
    for fct in TransferFunction::ALL {
        let params = RenderParams::default().transfer(fct);
        table_of_colors(&mut fh, &build_lookup_table(&registry, &params),
                        &fct.to_string())?;
    }

    writeln!(fh, "<h3>Cut levels</h3>")?;
    let cubehlx = registry.code_of("cubehlx").unwrap_or(0);
    for (low, mid, high) in [(0, 128, 255), (40, 80, 200), (0, 30, 120)] {
        let params = RenderParams::default()
            .palette(cubehlx)
            .thresholds(Thresholds::normalized(low, mid, high));
        table_of_colors(&mut fh, &build_lookup_table(&registry, &params),
                        &format!("cubehlx ({low}, {mid}, {high})"))?;
    }

    writeln!(fh, "<h3>Band</h3>")?;
    table_of_colors(&mut fh, &build_band_table(128, 16, false, true, false),
                    "center 128, half width 16")?;
    table_of_colors(&mut fh, &build_band_table(60, 30, true, false, false),
                    "center 60, half width 30, inverted")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
