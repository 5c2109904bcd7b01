// Written by aladin-lut-tools from tools/palettes.hjson
// Colors rebuilt from published control points, not Aladin's exact tables.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref STERN: PaletteData = {
  PaletteData {
    name: "Stern special",
    rgb: vec![
      RGB8{r: 255, g: 255, b: 255}, RGB8{r: 254, g: 254, b: 251}, RGB8{r: 253, g: 253, b: 247}, RGB8{r: 252, g: 252, b: 244},
      RGB8{r: 251, g: 251, b: 240}, RGB8{r: 250, g: 250, b: 236}, RGB8{r: 249, g: 249, b: 232}, RGB8{r: 248, g: 248, b: 229},
      RGB8{r: 247, g: 247, b: 225}, RGB8{r: 246, g: 246, b: 221}, RGB8{r: 245, g: 245, b: 217}, RGB8{r: 244, g: 244, b: 213},
      RGB8{r: 243, g: 243, b: 210}, RGB8{r: 242, g: 242, b: 206}, RGB8{r: 241, g: 241, b: 202}, RGB8{r: 240, g: 240, b: 198},
      RGB8{r: 239, g: 239, b: 195}, RGB8{r: 238, g: 238, b: 191}, RGB8{r: 237, g: 237, b: 187}, RGB8{r: 236, g: 236, b: 183},
      RGB8{r: 235, g: 235, b: 180}, RGB8{r: 234, g: 234, b: 176}, RGB8{r: 233, g: 233, b: 172}, RGB8{r: 232, g: 232, b: 168},
      RGB8{r: 231, g: 231, b: 164}, RGB8{r: 230, g: 230, b: 161}, RGB8{r: 229, g: 229, b: 157}, RGB8{r: 228, g: 228, b: 153},
      RGB8{r: 227, g: 227, b: 149}, RGB8{r: 226, g: 226, b: 146}, RGB8{r: 225, g: 225, b: 142}, RGB8{r: 224, g: 224, b: 138},
      RGB8{r: 223, g: 223, b: 134}, RGB8{r: 222, g: 222, b: 130}, RGB8{r: 221, g: 221, b: 127}, RGB8{r: 220, g: 220, b: 123},
      RGB8{r: 219, g: 219, b: 119}, RGB8{r: 218, g: 218, b: 115}, RGB8{r: 217, g: 217, b: 112}, RGB8{r: 216, g: 216, b: 108},
      RGB8{r: 215, g: 215, b: 104}, RGB8{r: 214, g: 214, b: 100}, RGB8{r: 213, g: 213, b:  97}, RGB8{r: 212, g: 212, b:  93},
      RGB8{r: 211, g: 211, b:  89}, RGB8{r: 210, g: 210, b:  85}, RGB8{r: 209, g: 209, b:  81}, RGB8{r: 208, g: 208, b:  78},
      RGB8{r: 207, g: 207, b:  74}, RGB8{r: 206, g: 206, b:  70}, RGB8{r: 205, g: 205, b:  66}, RGB8{r: 204, g: 204, b:  63},
      RGB8{r: 203, g: 203, b:  59}, RGB8{r: 202, g: 202, b:  55}, RGB8{r: 201, g: 201, b:  51}, RGB8{r: 200, g: 200, b:  47},
      RGB8{r: 199, g: 199, b:  44}, RGB8{r: 198, g: 198, b:  40}, RGB8{r: 197, g: 197, b:  36}, RGB8{r: 196, g: 196, b:  32},
      RGB8{r: 195, g: 195, b:  29}, RGB8{r: 194, g: 194, b:  25}, RGB8{r: 193, g: 193, b:  21}, RGB8{r: 192, g: 192, b:  17},
      RGB8{r: 191, g: 191, b:  13}, RGB8{r: 190, g: 190, b:  10}, RGB8{r: 189, g: 189, b:   6}, RGB8{r: 188, g: 188, b:   2},
      RGB8{r: 187, g: 187, b:   2}, RGB8{r: 186, g: 186, b:   6}, RGB8{r: 185, g: 185, b:  10}, RGB8{r: 184, g: 184, b:  15},
      RGB8{r: 183, g: 183, b:  19}, RGB8{r: 182, g: 182, b:  23}, RGB8{r: 181, g: 181, b:  27}, RGB8{r: 180, g: 180, b:  32},
      RGB8{r: 179, g: 179, b:  36}, RGB8{r: 178, g: 178, b:  40}, RGB8{r: 177, g: 177, b:  44}, RGB8{r: 176, g: 176, b:  49},
      RGB8{r: 175, g: 175, b:  53}, RGB8{r: 174, g: 174, b:  57}, RGB8{r: 173, g: 173, b:  61}, RGB8{r: 172, g: 172, b:  66},
      RGB8{r: 171, g: 171, b:  70}, RGB8{r: 170, g: 170, b:  74}, RGB8{r: 169, g: 169, b:  78}, RGB8{r: 168, g: 168, b:  83},
      RGB8{r: 167, g: 167, b:  87}, RGB8{r: 166, g: 166, b:  91}, RGB8{r: 165, g: 165, b:  95}, RGB8{r: 164, g: 164, b: 100},
      RGB8{r: 163, g: 163, b: 104}, RGB8{r: 162, g: 162, b: 108}, RGB8{r: 161, g: 161, b: 112}, RGB8{r: 160, g: 160, b: 117},
      RGB8{r: 159, g: 159, b: 121}, RGB8{r: 158, g: 158, b: 125}, RGB8{r: 157, g: 157, b: 129}, RGB8{r: 156, g: 156, b: 134},
      RGB8{r: 155, g: 155, b: 138}, RGB8{r: 154, g: 154, b: 142}, RGB8{r: 153, g: 153, b: 146}, RGB8{r: 152, g: 152, b: 151},
      RGB8{r: 151, g: 151, b: 155}, RGB8{r: 150, g: 150, b: 159}, RGB8{r: 149, g: 149, b: 164}, RGB8{r: 148, g: 148, b: 168},
      RGB8{r: 147, g: 147, b: 172}, RGB8{r: 146, g: 146, b: 176}, RGB8{r: 145, g: 145, b: 181}, RGB8{r: 144, g: 144, b: 185},
      RGB8{r: 143, g: 143, b: 189}, RGB8{r: 142, g: 142, b: 193}, RGB8{r: 141, g: 141, b: 198}, RGB8{r: 140, g: 140, b: 202},
      RGB8{r: 139, g: 139, b: 206}, RGB8{r: 138, g: 138, b: 210}, RGB8{r: 137, g: 137, b: 215}, RGB8{r: 136, g: 136, b: 219},
      RGB8{r: 135, g: 135, b: 223}, RGB8{r: 134, g: 134, b: 227}, RGB8{r: 133, g: 133, b: 232}, RGB8{r: 132, g: 132, b: 236},
      RGB8{r: 131, g: 131, b: 240}, RGB8{r: 130, g: 130, b: 244}, RGB8{r: 129, g: 129, b: 249}, RGB8{r: 128, g: 128, b: 253},
      RGB8{r: 127, g: 127, b: 254}, RGB8{r: 126, g: 126, b: 252}, RGB8{r: 125, g: 125, b: 250}, RGB8{r: 124, g: 124, b: 248},
      RGB8{r: 123, g: 123, b: 246}, RGB8{r: 122, g: 122, b: 244}, RGB8{r: 121, g: 121, b: 242}, RGB8{r: 120, g: 120, b: 240},
      RGB8{r: 119, g: 119, b: 238}, RGB8{r: 118, g: 118, b: 236}, RGB8{r: 117, g: 117, b: 234}, RGB8{r: 116, g: 116, b: 232},
      RGB8{r: 115, g: 115, b: 230}, RGB8{r: 114, g: 114, b: 228}, RGB8{r: 113, g: 113, b: 226}, RGB8{r: 112, g: 112, b: 224},
      RGB8{r: 111, g: 111, b: 222}, RGB8{r: 110, g: 110, b: 220}, RGB8{r: 109, g: 109, b: 218}, RGB8{r: 108, g: 108, b: 216},
      RGB8{r: 107, g: 107, b: 214}, RGB8{r: 106, g: 106, b: 212}, RGB8{r: 105, g: 105, b: 210}, RGB8{r: 104, g: 104, b: 208},
      RGB8{r: 103, g: 103, b: 206}, RGB8{r: 102, g: 102, b: 204}, RGB8{r: 101, g: 101, b: 202}, RGB8{r: 100, g: 100, b: 200},
      RGB8{r:  99, g:  99, b: 198}, RGB8{r:  98, g:  98, b: 196}, RGB8{r:  97, g:  97, b: 194}, RGB8{r:  96, g:  96, b: 192},
      RGB8{r:  95, g:  95, b: 190}, RGB8{r:  94, g:  94, b: 188}, RGB8{r:  93, g:  93, b: 186}, RGB8{r:  92, g:  92, b: 184},
      RGB8{r:  91, g:  91, b: 182}, RGB8{r:  90, g:  90, b: 180}, RGB8{r:  89, g:  89, b: 178}, RGB8{r:  88, g:  88, b: 176},
      RGB8{r:  87, g:  87, b: 174}, RGB8{r:  86, g:  86, b: 172}, RGB8{r:  85, g:  85, b: 170}, RGB8{r:  84, g:  84, b: 168},
      RGB8{r:  83, g:  83, b: 166}, RGB8{r:  82, g:  82, b: 164}, RGB8{r:  81, g:  81, b: 162}, RGB8{r:  80, g:  80, b: 160},
      RGB8{r:  79, g:  79, b: 158}, RGB8{r:  78, g:  78, b: 156}, RGB8{r:  77, g:  77, b: 154}, RGB8{r:  76, g:  76, b: 152},
      RGB8{r:  75, g:  75, b: 150}, RGB8{r:  74, g:  74, b: 148}, RGB8{r:  73, g:  73, b: 146}, RGB8{r:  72, g:  72, b: 144},
      RGB8{r:  71, g:  71, b: 142}, RGB8{r:  70, g:  70, b: 140}, RGB8{r:  69, g:  69, b: 138}, RGB8{r:  68, g:  68, b: 136},
      RGB8{r:  67, g:  67, b: 134}, RGB8{r:  66, g:  66, b: 132}, RGB8{r:  65, g:  65, b: 130}, RGB8{r:  64, g:  64, b: 128},
      RGB8{r:  11, g:  63, b: 126}, RGB8{r:  16, g:  62, b: 124}, RGB8{r:  21, g:  61, b: 122}, RGB8{r:  26, g:  60, b: 120},
      RGB8{r:  31, g:  59, b: 118}, RGB8{r:  36, g:  58, b: 116}, RGB8{r:  41, g:  57, b: 114}, RGB8{r:  45, g:  56, b: 112},
      RGB8{r:  50, g:  55, b: 110}, RGB8{r:  55, g:  54, b: 108}, RGB8{r:  60, g:  53, b: 106}, RGB8{r:  65, g:  52, b: 104},
      RGB8{r:  70, g:  51, b: 102}, RGB8{r:  75, g:  50, b: 100}, RGB8{r:  80, g:  49, b:  98}, RGB8{r:  85, g:  48, b:  96},
      RGB8{r:  90, g:  47, b:  94}, RGB8{r:  95, g:  46, b:  92}, RGB8{r: 100, g:  45, b:  90}, RGB8{r: 105, g:  44, b:  88},
      RGB8{r: 110, g:  43, b:  86}, RGB8{r: 115, g:  42, b:  84}, RGB8{r: 120, g:  41, b:  82}, RGB8{r: 125, g:  40, b:  80},
      RGB8{r: 130, g:  39, b:  78}, RGB8{r: 135, g:  38, b:  76}, RGB8{r: 140, g:  37, b:  74}, RGB8{r: 145, g:  36, b:  72},
      RGB8{r: 150, g:  35, b:  70}, RGB8{r: 155, g:  34, b:  68}, RGB8{r: 160, g:  33, b:  66}, RGB8{r: 165, g:  32, b:  64},
      RGB8{r: 170, g:  31, b:  62}, RGB8{r: 175, g:  30, b:  60}, RGB8{r: 180, g:  29, b:  58}, RGB8{r: 185, g:  28, b:  56},
      RGB8{r: 190, g:  27, b:  54}, RGB8{r: 195, g:  26, b:  52}, RGB8{r: 200, g:  25, b:  50}, RGB8{r: 205, g:  24, b:  48},
      RGB8{r: 210, g:  23, b:  46}, RGB8{r: 215, g:  22, b:  44}, RGB8{r: 220, g:  21, b:  42}, RGB8{r: 225, g:  20, b:  40},
      RGB8{r: 230, g:  19, b:  38}, RGB8{r: 235, g:  18, b:  36}, RGB8{r: 240, g:  17, b:  34}, RGB8{r: 245, g:  16, b:  32},
      RGB8{r: 250, g:  15, b:  30}, RGB8{r: 255, g:  14, b:  28}, RGB8{r: 238, g:  13, b:  26}, RGB8{r: 219, g:  12, b:  24},
      RGB8{r: 201, g:  11, b:  22}, RGB8{r: 183, g:  10, b:  20}, RGB8{r: 165, g:   9, b:  18}, RGB8{r: 146, g:   8, b:  16},
      RGB8{r: 128, g:   7, b:  14}, RGB8{r: 110, g:   6, b:  12}, RGB8{r:  91, g:   5, b:  10}, RGB8{r:  73, g:   4, b:   8},
      RGB8{r:  55, g:   3, b:   6}, RGB8{r:  37, g:   2, b:   4}, RGB8{r:  18, g:   1, b:   2}, RGB8{r:   0, g:   0, b:   0},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref RAINBOW: PaletteData = {
  PaletteData {
    name: "rainbow",
    rgb: vec![
      RGB8{r: 255, g:   0, b:   0}, RGB8{r: 255, g:   5, b:   0}, RGB8{r: 255, g:  10, b:   0}, RGB8{r: 255, g:  15, b:   0},
      RGB8{r: 255, g:  20, b:   0}, RGB8{r: 255, g:  25, b:   0}, RGB8{r: 255, g:  30, b:   0}, RGB8{r: 255, g:  35, b:   0},
      RGB8{r: 255, g:  40, b:   0}, RGB8{r: 255, g:  45, b:   0}, RGB8{r: 255, g:  50, b:   0}, RGB8{r: 255, g:  55, b:   0},
      RGB8{r: 255, g:  60, b:   0}, RGB8{r: 255, g:  65, b:   0}, RGB8{r: 255, g:  70, b:   0}, RGB8{r: 255, g:  75, b:   0},
      RGB8{r: 255, g:  80, b:   0}, RGB8{r: 255, g:  85, b:   0}, RGB8{r: 255, g:  90, b:   0}, RGB8{r: 255, g:  95, b:   0},
      RGB8{r: 255, g: 100, b:   0}, RGB8{r: 255, g: 105, b:   0}, RGB8{r: 255, g: 110, b:   0}, RGB8{r: 255, g: 115, b:   0},
      RGB8{r: 255, g: 120, b:   0}, RGB8{r: 255, g: 125, b:   0}, RGB8{r: 255, g: 130, b:   0}, RGB8{r: 255, g: 135, b:   0},
      RGB8{r: 255, g: 140, b:   0}, RGB8{r: 255, g: 145, b:   0}, RGB8{r: 255, g: 150, b:   0}, RGB8{r: 255, g: 155, b:   0},
      RGB8{r: 255, g: 160, b:   0}, RGB8{r: 255, g: 165, b:   0}, RGB8{r: 255, g: 170, b:   0}, RGB8{r: 255, g: 175, b:   0},
      RGB8{r: 255, g: 180, b:   0}, RGB8{r: 255, g: 185, b:   0}, RGB8{r: 255, g: 190, b:   0}, RGB8{r: 255, g: 195, b:   0},
      RGB8{r: 255, g: 200, b:   0}, RGB8{r: 255, g: 205, b:   0}, RGB8{r: 255, g: 210, b:   0}, RGB8{r: 255, g: 215, b:   0},
      RGB8{r: 255, g: 220, b:   0}, RGB8{r: 255, g: 225, b:   0}, RGB8{r: 255, g: 230, b:   0}, RGB8{r: 255, g: 235, b:   0},
      RGB8{r: 255, g: 240, b:   0}, RGB8{r: 255, g: 245, b:   0}, RGB8{r: 255, g: 250, b:   0}, RGB8{r: 255, g: 255, b:   0},
      RGB8{r: 250, g: 255, b:   0}, RGB8{r: 245, g: 255, b:   0}, RGB8{r: 240, g: 255, b:   0}, RGB8{r: 235, g: 255, b:   0},
      RGB8{r: 230, g: 255, b:   0}, RGB8{r: 225, g: 255, b:   0}, RGB8{r: 220, g: 255, b:   0}, RGB8{r: 215, g: 255, b:   0},
      RGB8{r: 210, g: 255, b:   0}, RGB8{r: 205, g: 255, b:   0}, RGB8{r: 200, g: 255, b:   0}, RGB8{r: 195, g: 255, b:   0},
      RGB8{r: 190, g: 255, b:   0}, RGB8{r: 185, g: 255, b:   0}, RGB8{r: 180, g: 255, b:   0}, RGB8{r: 175, g: 255, b:   0},
      RGB8{r: 170, g: 255, b:   0}, RGB8{r: 165, g: 255, b:   0}, RGB8{r: 160, g: 255, b:   0}, RGB8{r: 155, g: 255, b:   0},
      RGB8{r: 150, g: 255, b:   0}, RGB8{r: 145, g: 255, b:   0}, RGB8{r: 140, g: 255, b:   0}, RGB8{r: 135, g: 255, b:   0},
      RGB8{r: 130, g: 255, b:   0}, RGB8{r: 125, g: 255, b:   0}, RGB8{r: 120, g: 255, b:   0}, RGB8{r: 115, g: 255, b:   0},
      RGB8{r: 110, g: 255, b:   0}, RGB8{r: 105, g: 255, b:   0}, RGB8{r: 100, g: 255, b:   0}, RGB8{r:  95, g: 255, b:   0},
      RGB8{r:  90, g: 255, b:   0}, RGB8{r:  85, g: 255, b:   0}, RGB8{r:  80, g: 255, b:   0}, RGB8{r:  75, g: 255, b:   0},
      RGB8{r:  70, g: 255, b:   0}, RGB8{r:  65, g: 255, b:   0}, RGB8{r:  60, g: 255, b:   0}, RGB8{r:  55, g: 255, b:   0},
      RGB8{r:  50, g: 255, b:   0}, RGB8{r:  45, g: 255, b:   0}, RGB8{r:  40, g: 255, b:   0}, RGB8{r:  35, g: 255, b:   0},
      RGB8{r:  30, g: 255, b:   0}, RGB8{r:  25, g: 255, b:   0}, RGB8{r:  20, g: 255, b:   0}, RGB8{r:  15, g: 255, b:   0},
      RGB8{r:  10, g: 255, b:   0}, RGB8{r:   5, g: 255, b:   0}, RGB8{r:   0, g: 255, b:   0}, RGB8{r:   0, g: 255, b:   5},
      RGB8{r:   0, g: 255, b:  10}, RGB8{r:   0, g: 255, b:  15}, RGB8{r:   0, g: 255, b:  20}, RGB8{r:   0, g: 255, b:  25},
      RGB8{r:   0, g: 255, b:  30}, RGB8{r:   0, g: 255, b:  35}, RGB8{r:   0, g: 255, b:  40}, RGB8{r:   0, g: 255, b:  45},
      RGB8{r:   0, g: 255, b:  50}, RGB8{r:   0, g: 255, b:  55}, RGB8{r:   0, g: 255, b:  60}, RGB8{r:   0, g: 255, b:  65},
      RGB8{r:   0, g: 255, b:  70}, RGB8{r:   0, g: 255, b:  75}, RGB8{r:   0, g: 255, b:  80}, RGB8{r:   0, g: 255, b:  85},
      RGB8{r:   0, g: 255, b:  90}, RGB8{r:   0, g: 255, b:  95}, RGB8{r:   0, g: 255, b: 100}, RGB8{r:   0, g: 255, b: 105},
      RGB8{r:   0, g: 255, b: 110}, RGB8{r:   0, g: 255, b: 115}, RGB8{r:   0, g: 255, b: 120}, RGB8{r:   0, g: 255, b: 125},
      RGB8{r:   0, g: 255, b: 130}, RGB8{r:   0, g: 255, b: 135}, RGB8{r:   0, g: 255, b: 140}, RGB8{r:   0, g: 255, b: 145},
      RGB8{r:   0, g: 255, b: 150}, RGB8{r:   0, g: 255, b: 155}, RGB8{r:   0, g: 255, b: 160}, RGB8{r:   0, g: 255, b: 165},
      RGB8{r:   0, g: 255, b: 170}, RGB8{r:   0, g: 255, b: 175}, RGB8{r:   0, g: 255, b: 180}, RGB8{r:   0, g: 255, b: 185},
      RGB8{r:   0, g: 255, b: 190}, RGB8{r:   0, g: 255, b: 195}, RGB8{r:   0, g: 255, b: 200}, RGB8{r:   0, g: 255, b: 205},
      RGB8{r:   0, g: 255, b: 210}, RGB8{r:   0, g: 255, b: 215}, RGB8{r:   0, g: 255, b: 220}, RGB8{r:   0, g: 255, b: 225},
      RGB8{r:   0, g: 255, b: 230}, RGB8{r:   0, g: 255, b: 235}, RGB8{r:   0, g: 255, b: 240}, RGB8{r:   0, g: 255, b: 245},
      RGB8{r:   0, g: 255, b: 250}, RGB8{r:   0, g: 255, b: 255}, RGB8{r:   0, g: 250, b: 255}, RGB8{r:   0, g: 245, b: 255},
      RGB8{r:   0, g: 240, b: 255}, RGB8{r:   0, g: 235, b: 255}, RGB8{r:   0, g: 230, b: 255}, RGB8{r:   0, g: 225, b: 255},
      RGB8{r:   0, g: 220, b: 255}, RGB8{r:   0, g: 215, b: 255}, RGB8{r:   0, g: 210, b: 255}, RGB8{r:   0, g: 205, b: 255},
      RGB8{r:   0, g: 200, b: 255}, RGB8{r:   0, g: 195, b: 255}, RGB8{r:   0, g: 190, b: 255}, RGB8{r:   0, g: 185, b: 255},
      RGB8{r:   0, g: 180, b: 255}, RGB8{r:   0, g: 175, b: 255}, RGB8{r:   0, g: 170, b: 255}, RGB8{r:   0, g: 165, b: 255},
      RGB8{r:   0, g: 160, b: 255}, RGB8{r:   0, g: 155, b: 255}, RGB8{r:   0, g: 150, b: 255}, RGB8{r:   0, g: 145, b: 255},
      RGB8{r:   0, g: 140, b: 255}, RGB8{r:   0, g: 135, b: 255}, RGB8{r:   0, g: 130, b: 255}, RGB8{r:   0, g: 125, b: 255},
      RGB8{r:   0, g: 120, b: 255}, RGB8{r:   0, g: 115, b: 255}, RGB8{r:   0, g: 110, b: 255}, RGB8{r:   0, g: 105, b: 255},
      RGB8{r:   0, g: 100, b: 255}, RGB8{r:   0, g:  95, b: 255}, RGB8{r:   0, g:  90, b: 255}, RGB8{r:   0, g:  85, b: 255},
      RGB8{r:   0, g:  80, b: 255}, RGB8{r:   0, g:  75, b: 255}, RGB8{r:   0, g:  70, b: 255}, RGB8{r:   0, g:  65, b: 255},
      RGB8{r:   0, g:  60, b: 255}, RGB8{r:   0, g:  55, b: 255}, RGB8{r:   0, g:  50, b: 255}, RGB8{r:   0, g:  45, b: 255},
      RGB8{r:   0, g:  40, b: 255}, RGB8{r:   0, g:  35, b: 255}, RGB8{r:   0, g:  30, b: 255}, RGB8{r:   0, g:  25, b: 255},
      RGB8{r:   0, g:  20, b: 255}, RGB8{r:   0, g:  15, b: 255}, RGB8{r:   0, g:  10, b: 255}, RGB8{r:   0, g:   5, b: 255},
      RGB8{r:   0, g:   0, b: 255}, RGB8{r:   5, g:   0, b: 255}, RGB8{r:  10, g:   0, b: 255}, RGB8{r:  15, g:   0, b: 255},
      RGB8{r:  20, g:   0, b: 255}, RGB8{r:  25, g:   0, b: 255}, RGB8{r:  30, g:   0, b: 255}, RGB8{r:  35, g:   0, b: 255},
      RGB8{r:  40, g:   0, b: 255}, RGB8{r:  45, g:   0, b: 255}, RGB8{r:  50, g:   0, b: 255}, RGB8{r:  55, g:   0, b: 255},
      RGB8{r:  60, g:   0, b: 255}, RGB8{r:  65, g:   0, b: 255}, RGB8{r:  70, g:   0, b: 255}, RGB8{r:  75, g:   0, b: 255},
      RGB8{r:  80, g:   0, b: 255}, RGB8{r:  85, g:   0, b: 255}, RGB8{r:  90, g:   0, b: 255}, RGB8{r:  95, g:   0, b: 255},
      RGB8{r: 100, g:   0, b: 255}, RGB8{r: 105, g:   0, b: 255}, RGB8{r: 110, g:   0, b: 255}, RGB8{r: 115, g:   0, b: 255},
      RGB8{r: 120, g:   0, b: 255}, RGB8{r: 125, g:   0, b: 255}, RGB8{r: 130, g:   0, b: 255}, RGB8{r: 135, g:   0, b: 255},
      RGB8{r: 140, g:   0, b: 255}, RGB8{r: 145, g:   0, b: 255}, RGB8{r: 150, g:   0, b: 255}, RGB8{r: 155, g:   0, b: 255},
      RGB8{r: 160, g:   0, b: 255}, RGB8{r: 165, g:   0, b: 255}, RGB8{r: 170, g:   0, b: 255}, RGB8{r: 175, g:   0, b: 255},
      RGB8{r: 180, g:   0, b: 255}, RGB8{r: 185, g:   0, b: 255}, RGB8{r: 190, g:   0, b: 255}, RGB8{r: 195, g:   0, b: 255},
      RGB8{r: 200, g:   0, b: 255}, RGB8{r: 205, g:   0, b: 255}, RGB8{r: 210, g:   0, b: 255}, RGB8{r: 215, g:   0, b: 255},
      RGB8{r: 220, g:   0, b: 255}, RGB8{r: 225, g:   0, b: 255}, RGB8{r: 230, g:   0, b: 255}, RGB8{r: 235, g:   0, b: 255},
      RGB8{r: 240, g:   0, b: 255}, RGB8{r: 245, g:   0, b: 255}, RGB8{r: 250, g:   0, b: 255}, RGB8{r: 255, g:   0, b: 255},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref EOSB: PaletteData = {
  PaletteData {
    name: "eosb",
    rgb: vec![
      RGB8{r: 128, g:   0, b:   0}, RGB8{r: 132, g:   0, b:   0}, RGB8{r: 135, g:   0, b:   0}, RGB8{r: 139, g:   0, b:   0},
      RGB8{r: 144, g:   0, b:   0}, RGB8{r: 148, g:   0, b:   0}, RGB8{r: 152, g:   0, b:   0}, RGB8{r: 156, g:   0, b:   0},
      RGB8{r: 160, g:   0, b:   0}, RGB8{r: 163, g:   0, b:   0}, RGB8{r: 167, g:   0, b:   0}, RGB8{r: 171, g:   0, b:   0},
      RGB8{r: 176, g:   0, b:   0}, RGB8{r: 180, g:   0, b:   0}, RGB8{r: 184, g:   0, b:   0}, RGB8{r: 188, g:   0, b:   0},
      RGB8{r: 192, g:   0, b:   0}, RGB8{r: 195, g:   0, b:   0}, RGB8{r: 199, g:   0, b:   0}, RGB8{r: 203, g:   0, b:   0},
      RGB8{r: 208, g:   0, b:   0}, RGB8{r: 212, g:   0, b:   0}, RGB8{r: 216, g:   0, b:   0}, RGB8{r: 220, g:   0, b:   0},
      RGB8{r: 224, g:   0, b:   0}, RGB8{r: 227, g:   0, b:   0}, RGB8{r: 231, g:   0, b:   0}, RGB8{r: 235, g:   0, b:   0},
      RGB8{r: 240, g:   0, b:   0}, RGB8{r: 244, g:   0, b:   0}, RGB8{r: 248, g:   0, b:   0}, RGB8{r: 252, g:   0, b:   0},
      RGB8{r: 255, g:   0, b:   0}, RGB8{r: 255, g:   4, b:   0}, RGB8{r: 255, g:   8, b:   0}, RGB8{r: 255, g:  12, b:   0},
      RGB8{r: 255, g:  17, b:   0}, RGB8{r: 255, g:  21, b:   0}, RGB8{r: 255, g:  25, b:   0}, RGB8{r: 255, g:  29, b:   0},
      RGB8{r: 255, g:  33, b:   0}, RGB8{r: 255, g:  36, b:   0}, RGB8{r: 255, g:  40, b:   0}, RGB8{r: 255, g:  44, b:   0},
      RGB8{r: 255, g:  49, b:   0}, RGB8{r: 255, g:  53, b:   0}, RGB8{r: 255, g:  57, b:   0}, RGB8{r: 255, g:  61, b:   0},
      RGB8{r: 255, g:  65, b:   0}, RGB8{r: 255, g:  68, b:   0}, RGB8{r: 255, g:  72, b:   0}, RGB8{r: 255, g:  76, b:   0},
      RGB8{r: 255, g:  81, b:   0}, RGB8{r: 255, g:  85, b:   0}, RGB8{r: 255, g:  89, b:   0}, RGB8{r: 255, g:  93, b:   0},
      RGB8{r: 255, g:  97, b:   0}, RGB8{r: 255, g: 100, b:   0}, RGB8{r: 255, g: 104, b:   0}, RGB8{r: 255, g: 108, b:   0},
      RGB8{r: 255, g: 113, b:   0}, RGB8{r: 255, g: 117, b:   0}, RGB8{r: 255, g: 121, b:   0}, RGB8{r: 255, g: 125, b:   0},
      RGB8{r: 255, g: 129, b:   0}, RGB8{r: 255, g: 132, b:   0}, RGB8{r: 255, g: 136, b:   0}, RGB8{r: 255, g: 140, b:   0},
      RGB8{r: 255, g: 145, b:   0}, RGB8{r: 255, g: 149, b:   0}, RGB8{r: 255, g: 153, b:   0}, RGB8{r: 255, g: 157, b:   0},
      RGB8{r: 255, g: 161, b:   0}, RGB8{r: 255, g: 164, b:   0}, RGB8{r: 255, g: 168, b:   0}, RGB8{r: 255, g: 172, b:   0},
      RGB8{r: 255, g: 177, b:   0}, RGB8{r: 255, g: 181, b:   0}, RGB8{r: 255, g: 185, b:   0}, RGB8{r: 255, g: 189, b:   0},
      RGB8{r: 255, g: 193, b:   0}, RGB8{r: 255, g: 196, b:   0}, RGB8{r: 255, g: 200, b:   0}, RGB8{r: 255, g: 204, b:   0},
      RGB8{r: 255, g: 209, b:   0}, RGB8{r: 255, g: 213, b:   0}, RGB8{r: 255, g: 217, b:   0}, RGB8{r: 255, g: 221, b:   0},
      RGB8{r: 255, g: 225, b:   0}, RGB8{r: 255, g: 228, b:   0}, RGB8{r: 255, g: 232, b:   0}, RGB8{r: 255, g: 236, b:   0},
      RGB8{r: 255, g: 241, b:   0}, RGB8{r: 255, g: 245, b:   0}, RGB8{r: 255, g: 249, b:   0}, RGB8{r: 255, g: 253, b:   0},
      RGB8{r: 254, g: 255, b:   1}, RGB8{r: 250, g: 255, b:   5}, RGB8{r: 246, g: 255, b:   9}, RGB8{r: 242, g: 255, b:  13},
      RGB8{r: 237, g: 255, b:  18}, RGB8{r: 233, g: 255, b:  22}, RGB8{r: 229, g: 255, b:  26}, RGB8{r: 226, g: 255, b:  30},
      RGB8{r: 222, g: 255, b:  33}, RGB8{r: 218, g: 255, b:  37}, RGB8{r: 214, g: 255, b:  41}, RGB8{r: 210, g: 255, b:  45},
      RGB8{r: 205, g: 255, b:  50}, RGB8{r: 201, g: 255, b:  54}, RGB8{r: 197, g: 255, b:  58}, RGB8{r: 194, g: 255, b:  62},
      RGB8{r: 190, g: 255, b:  66}, RGB8{r: 186, g: 255, b:  69}, RGB8{r: 182, g: 255, b:  73}, RGB8{r: 178, g: 255, b:  77},
      RGB8{r: 173, g: 255, b:  82}, RGB8{r: 169, g: 255, b:  86}, RGB8{r: 165, g: 255, b:  90}, RGB8{r: 162, g: 255, b:  94},
      RGB8{r: 158, g: 255, b:  98}, RGB8{r: 154, g: 255, b: 101}, RGB8{r: 150, g: 255, b: 105}, RGB8{r: 146, g: 255, b: 109},
      RGB8{r: 141, g: 255, b: 114}, RGB8{r: 137, g: 255, b: 118}, RGB8{r: 133, g: 255, b: 122}, RGB8{r: 130, g: 255, b: 126},
      RGB8{r: 126, g: 255, b: 130}, RGB8{r: 122, g: 255, b: 133}, RGB8{r: 117, g: 255, b: 138}, RGB8{r: 114, g: 255, b: 142},
      RGB8{r: 110, g: 255, b: 146}, RGB8{r: 106, g: 255, b: 149}, RGB8{r: 101, g: 255, b: 154}, RGB8{r:  98, g: 255, b: 158},
      RGB8{r:  94, g: 255, b: 162}, RGB8{r:  90, g: 255, b: 165}, RGB8{r:  85, g: 255, b: 170}, RGB8{r:  82, g: 255, b: 174},
      RGB8{r:  78, g: 255, b: 178}, RGB8{r:  74, g: 255, b: 181}, RGB8{r:  69, g: 255, b: 186}, RGB8{r:  66, g: 255, b: 190},
      RGB8{r:  62, g: 255, b: 194}, RGB8{r:  58, g: 255, b: 197}, RGB8{r:  53, g: 255, b: 202}, RGB8{r:  49, g: 255, b: 206},
      RGB8{r:  46, g: 255, b: 210}, RGB8{r:  42, g: 255, b: 213}, RGB8{r:  37, g: 255, b: 218}, RGB8{r:  33, g: 255, b: 222},
      RGB8{r:  30, g: 255, b: 226}, RGB8{r:  26, g: 255, b: 229}, RGB8{r:  21, g: 255, b: 234}, RGB8{r:  17, g: 255, b: 238},
      RGB8{r:  14, g: 255, b: 242}, RGB8{r:  10, g: 255, b: 245}, RGB8{r:   5, g: 255, b: 250}, RGB8{r:   1, g: 255, b: 254},
      RGB8{r:   0, g: 253, b: 255}, RGB8{r:   0, g: 249, b: 255}, RGB8{r:   0, g: 244, b: 255}, RGB8{r:   0, g: 241, b: 255},
      RGB8{r:   0, g: 237, b: 255}, RGB8{r:   0, g: 233, b: 255}, RGB8{r:   0, g: 228, b: 255}, RGB8{r:   0, g: 225, b: 255},
      RGB8{r:   0, g: 221, b: 255}, RGB8{r:   0, g: 217, b: 255}, RGB8{r:   0, g: 212, b: 255}, RGB8{r:   0, g: 209, b: 255},
      RGB8{r:   0, g: 205, b: 255}, RGB8{r:   0, g: 201, b: 255}, RGB8{r:   0, g: 196, b: 255}, RGB8{r:   0, g: 193, b: 255},
      RGB8{r:   0, g: 189, b: 255}, RGB8{r:   0, g: 185, b: 255}, RGB8{r:   0, g: 180, b: 255}, RGB8{r:   0, g: 177, b: 255},
      RGB8{r:   0, g: 173, b: 255}, RGB8{r:   0, g: 169, b: 255}, RGB8{r:   0, g: 164, b: 255}, RGB8{r:   0, g: 161, b: 255},
      RGB8{r:   0, g: 157, b: 255}, RGB8{r:   0, g: 153, b: 255}, RGB8{r:   0, g: 148, b: 255}, RGB8{r:   0, g: 145, b: 255},
      RGB8{r:   0, g: 141, b: 255}, RGB8{r:   0, g: 137, b: 255}, RGB8{r:   0, g: 132, b: 255}, RGB8{r:   0, g: 129, b: 255},
      RGB8{r:   0, g: 125, b: 255}, RGB8{r:   0, g: 121, b: 255}, RGB8{r:   0, g: 117, b: 255}, RGB8{r:   0, g: 113, b: 255},
      RGB8{r:   0, g: 109, b: 255}, RGB8{r:   0, g: 105, b: 255}, RGB8{r:   0, g: 101, b: 255}, RGB8{r:   0, g:  97, b: 255},
      RGB8{r:   0, g:  93, b: 255}, RGB8{r:   0, g:  89, b: 255}, RGB8{r:   0, g:  85, b: 255}, RGB8{r:   0, g:  81, b: 255},
      RGB8{r:   0, g:  77, b: 255}, RGB8{r:   0, g:  73, b: 255}, RGB8{r:   0, g:  69, b: 255}, RGB8{r:   0, g:  65, b: 255},
      RGB8{r:   0, g:  61, b: 255}, RGB8{r:   0, g:  57, b: 255}, RGB8{r:   0, g:  53, b: 255}, RGB8{r:   0, g:  49, b: 255},
      RGB8{r:   0, g:  45, b: 255}, RGB8{r:   0, g:  41, b: 255}, RGB8{r:   0, g:  37, b: 255}, RGB8{r:   0, g:  33, b: 255},
      RGB8{r:   0, g:  29, b: 255}, RGB8{r:   0, g:  24, b: 255}, RGB8{r:   0, g:  21, b: 255}, RGB8{r:   0, g:  16, b: 255},
      RGB8{r:   0, g:  13, b: 255}, RGB8{r:   0, g:   8, b: 255}, RGB8{r:   0, g:   5, b: 255}, RGB8{r:   0, g:   0, b: 255},
      RGB8{r:   0, g:   0, b: 252}, RGB8{r:   0, g:   0, b: 248}, RGB8{r:   0, g:   0, b: 243}, RGB8{r:   0, g:   0, b: 240},
      RGB8{r:   0, g:   0, b: 236}, RGB8{r:   0, g:   0, b: 232}, RGB8{r:   0, g:   0, b: 227}, RGB8{r:   0, g:   0, b: 224},
      RGB8{r:   0, g:   0, b: 220}, RGB8{r:   0, g:   0, b: 216}, RGB8{r:   0, g:   0, b: 211}, RGB8{r:   0, g:   0, b: 208},
      RGB8{r:   0, g:   0, b: 204}, RGB8{r:   0, g:   0, b: 200}, RGB8{r:   0, g:   0, b: 195}, RGB8{r:   0, g:   0, b: 192},
      RGB8{r:   0, g:   0, b: 188}, RGB8{r:   0, g:   0, b: 184}, RGB8{r:   0, g:   0, b: 179}, RGB8{r:   0, g:   0, b: 176},
      RGB8{r:   0, g:   0, b: 172}, RGB8{r:   0, g:   0, b: 168}, RGB8{r:   0, g:   0, b: 163}, RGB8{r:   0, g:   0, b: 160},
      RGB8{r:   0, g:   0, b: 156}, RGB8{r:   0, g:   0, b: 152}, RGB8{r:   0, g:   0, b: 147}, RGB8{r:   0, g:   0, b: 144},
      RGB8{r:   0, g:   0, b: 140}, RGB8{r:   0, g:   0, b: 136}, RGB8{r:   0, g:   0, b: 132}, RGB8{r:   0, g:   0, b: 128},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref FIRE: PaletteData = {
  PaletteData {
    name: "fire",
    rgb: vec![
      RGB8{r: 255, g: 255, b: 255}, RGB8{r: 255, g: 255, b: 250}, RGB8{r: 255, g: 255, b: 245}, RGB8{r: 255, g: 255, b: 240},
      RGB8{r: 255, g: 255, b: 235}, RGB8{r: 255, g: 255, b: 230}, RGB8{r: 255, g: 255, b: 225}, RGB8{r: 255, g: 255, b: 220},
      RGB8{r: 255, g: 255, b: 215}, RGB8{r: 255, g: 255, b: 210}, RGB8{r: 255, g: 255, b: 205}, RGB8{r: 255, g: 255, b: 200},
      RGB8{r: 255, g: 255, b: 195}, RGB8{r: 255, g: 255, b: 190}, RGB8{r: 255, g: 255, b: 185}, RGB8{r: 255, g: 255, b: 180},
      RGB8{r: 255, g: 255, b: 175}, RGB8{r: 255, g: 255, b: 170}, RGB8{r: 255, g: 255, b: 165}, RGB8{r: 255, g: 255, b: 160},
      RGB8{r: 255, g: 255, b: 155}, RGB8{r: 255, g: 255, b: 150}, RGB8{r: 255, g: 255, b: 145}, RGB8{r: 255, g: 255, b: 140},
      RGB8{r: 255, g: 255, b: 135}, RGB8{r: 255, g: 255, b: 130}, RGB8{r: 255, g: 255, b: 125}, RGB8{r: 255, g: 255, b: 120},
      RGB8{r: 255, g: 255, b: 115}, RGB8{r: 255, g: 255, b: 110}, RGB8{r: 255, g: 255, b: 105}, RGB8{r: 255, g: 255, b: 100},
      RGB8{r: 255, g: 255, b:  95}, RGB8{r: 255, g: 255, b:  90}, RGB8{r: 255, g: 255, b:  85}, RGB8{r: 255, g: 255, b:  80},
      RGB8{r: 255, g: 255, b:  75}, RGB8{r: 255, g: 255, b:  70}, RGB8{r: 255, g: 255, b:  65}, RGB8{r: 255, g: 255, b:  60},
      RGB8{r: 255, g: 255, b:  55}, RGB8{r: 255, g: 255, b:  50}, RGB8{r: 255, g: 255, b:  45}, RGB8{r: 255, g: 255, b:  40},
      RGB8{r: 255, g: 255, b:  35}, RGB8{r: 255, g: 255, b:  30}, RGB8{r: 255, g: 255, b:  25}, RGB8{r: 255, g: 255, b:  20},
      RGB8{r: 255, g: 255, b:  15}, RGB8{r: 255, g: 255, b:  10}, RGB8{r: 255, g: 255, b:   5}, RGB8{r: 255, g: 255, b:   0},
      RGB8{r: 255, g: 252, b:   0}, RGB8{r: 255, g: 250, b:   0}, RGB8{r: 255, g: 247, b:   0}, RGB8{r: 255, g: 245, b:   0},
      RGB8{r: 255, g: 243, b:   0}, RGB8{r: 255, g: 240, b:   0}, RGB8{r: 255, g: 238, b:   0}, RGB8{r: 255, g: 235, b:   0},
      RGB8{r: 255, g: 232, b:   0}, RGB8{r: 255, g: 230, b:   0}, RGB8{r: 255, g: 227, b:   0}, RGB8{r: 255, g: 225, b:   0},
      RGB8{r: 255, g: 222, b:   0}, RGB8{r: 255, g: 220, b:   0}, RGB8{r: 255, g: 218, b:   0}, RGB8{r: 255, g: 215, b:   0},
      RGB8{r: 255, g: 212, b:   0}, RGB8{r: 255, g: 210, b:   0}, RGB8{r: 255, g: 207, b:   0}, RGB8{r: 255, g: 205, b:   0},
      RGB8{r: 255, g: 203, b:   0}, RGB8{r: 255, g: 200, b:   0}, RGB8{r: 255, g: 198, b:   0}, RGB8{r: 255, g: 195, b:   0},
      RGB8{r: 255, g: 192, b:   0}, RGB8{r: 255, g: 190, b:   0}, RGB8{r: 255, g: 187, b:   0}, RGB8{r: 255, g: 185, b:   0},
      RGB8{r: 255, g: 182, b:   0}, RGB8{r: 255, g: 180, b:   0}, RGB8{r: 255, g: 178, b:   0}, RGB8{r: 255, g: 175, b:   0},
      RGB8{r: 255, g: 172, b:   0}, RGB8{r: 255, g: 170, b:   0}, RGB8{r: 255, g: 167, b:   0}, RGB8{r: 255, g: 165, b:   0},
      RGB8{r: 255, g: 163, b:   0}, RGB8{r: 255, g: 160, b:   0}, RGB8{r: 255, g: 158, b:   0}, RGB8{r: 255, g: 155, b:   0},
      RGB8{r: 255, g: 152, b:   0}, RGB8{r: 255, g: 150, b:   0}, RGB8{r: 255, g: 147, b:   0}, RGB8{r: 255, g: 145, b:   0},
      RGB8{r: 255, g: 142, b:   0}, RGB8{r: 255, g: 140, b:   0}, RGB8{r: 255, g: 138, b:   0}, RGB8{r: 255, g: 135, b:   0},
      RGB8{r: 255, g: 132, b:   0}, RGB8{r: 255, g: 130, b:   0}, RGB8{r: 255, g: 127, b:   0}, RGB8{r: 255, g: 125, b:   0},
      RGB8{r: 255, g: 122, b:   0}, RGB8{r: 255, g: 120, b:   0}, RGB8{r: 255, g: 118, b:   0}, RGB8{r: 255, g: 115, b:   0},
      RGB8{r: 255, g: 112, b:   0}, RGB8{r: 255, g: 110, b:   0}, RGB8{r: 255, g: 107, b:   0}, RGB8{r: 255, g: 105, b:   0},
      RGB8{r: 255, g: 102, b:   0}, RGB8{r: 255, g: 100, b:   0}, RGB8{r: 255, g:  98, b:   0}, RGB8{r: 255, g:  95, b:   0},
      RGB8{r: 255, g:  92, b:   0}, RGB8{r: 255, g:  90, b:   0}, RGB8{r: 255, g:  87, b:   0}, RGB8{r: 255, g:  85, b:   0},
      RGB8{r: 255, g:  82, b:   0}, RGB8{r: 255, g:  80, b:   0}, RGB8{r: 255, g:  78, b:   0}, RGB8{r: 255, g:  75, b:   0},
      RGB8{r: 255, g:  72, b:   0}, RGB8{r: 255, g:  70, b:   0}, RGB8{r: 255, g:  67, b:   0}, RGB8{r: 255, g:  65, b:   0},
      RGB8{r: 255, g:  62, b:   0}, RGB8{r: 255, g:  60, b:   0}, RGB8{r: 255, g:  57, b:   0}, RGB8{r: 255, g:  55, b:   0},
      RGB8{r: 255, g:  52, b:   0}, RGB8{r: 255, g:  50, b:   0}, RGB8{r: 255, g:  47, b:   0}, RGB8{r: 255, g:  45, b:   0},
      RGB8{r: 255, g:  42, b:   0}, RGB8{r: 255, g:  40, b:   0}, RGB8{r: 255, g:  37, b:   0}, RGB8{r: 255, g:  35, b:   0},
      RGB8{r: 255, g:  32, b:   0}, RGB8{r: 255, g:  30, b:   0}, RGB8{r: 255, g:  27, b:   0}, RGB8{r: 255, g:  25, b:   0},
      RGB8{r: 255, g:  22, b:   0}, RGB8{r: 255, g:  20, b:   0}, RGB8{r: 255, g:  17, b:   0}, RGB8{r: 255, g:  15, b:   0},
      RGB8{r: 255, g:  12, b:   0}, RGB8{r: 255, g:  10, b:   0}, RGB8{r: 255, g:   7, b:   0}, RGB8{r: 255, g:   5, b:   0},
      RGB8{r: 255, g:   2, b:   0}, RGB8{r: 255, g:   0, b:   0}, RGB8{r: 252, g:   0, b:   0}, RGB8{r: 250, g:   0, b:   0},
      RGB8{r: 248, g:   0, b:   0}, RGB8{r: 245, g:   0, b:   0}, RGB8{r: 243, g:   0, b:   0}, RGB8{r: 240, g:   0, b:   0},
      RGB8{r: 238, g:   0, b:   0}, RGB8{r: 235, g:   0, b:   0}, RGB8{r: 232, g:   0, b:   0}, RGB8{r: 230, g:   0, b:   0},
      RGB8{r: 227, g:   0, b:   0}, RGB8{r: 225, g:   0, b:   0}, RGB8{r: 222, g:   0, b:   0}, RGB8{r: 220, g:   0, b:   0},
      RGB8{r: 218, g:   0, b:   0}, RGB8{r: 215, g:   0, b:   0}, RGB8{r: 212, g:   0, b:   0}, RGB8{r: 210, g:   0, b:   0},
      RGB8{r: 208, g:   0, b:   0}, RGB8{r: 205, g:   0, b:   0}, RGB8{r: 203, g:   0, b:   0}, RGB8{r: 200, g:   0, b:   0},
      RGB8{r: 198, g:   0, b:   0}, RGB8{r: 195, g:   0, b:   0}, RGB8{r: 192, g:   0, b:   0}, RGB8{r: 190, g:   0, b:   0},
      RGB8{r: 187, g:   0, b:   0}, RGB8{r: 185, g:   0, b:   0}, RGB8{r: 182, g:   0, b:   0}, RGB8{r: 180, g:   0, b:   0},
      RGB8{r: 178, g:   0, b:   0}, RGB8{r: 175, g:   0, b:   0}, RGB8{r: 172, g:   0, b:   0}, RGB8{r: 170, g:   0, b:   0},
      RGB8{r: 168, g:   0, b:   0}, RGB8{r: 165, g:   0, b:   0}, RGB8{r: 163, g:   0, b:   0}, RGB8{r: 160, g:   0, b:   0},
      RGB8{r: 158, g:   0, b:   0}, RGB8{r: 155, g:   0, b:   0}, RGB8{r: 153, g:   0, b:   0}, RGB8{r: 150, g:   0, b:   0},
      RGB8{r: 147, g:   0, b:   0}, RGB8{r: 145, g:   0, b:   0}, RGB8{r: 143, g:   0, b:   0}, RGB8{r: 140, g:   0, b:   0},
      RGB8{r: 138, g:   0, b:   0}, RGB8{r: 135, g:   0, b:   0}, RGB8{r: 133, g:   0, b:   0}, RGB8{r: 130, g:   0, b:   0},
      RGB8{r: 128, g:   0, b:   0}, RGB8{r: 125, g:   0, b:   0}, RGB8{r: 123, g:   0, b:   0}, RGB8{r: 120, g:   0, b:   0},
      RGB8{r: 118, g:   0, b:   0}, RGB8{r: 115, g:   0, b:   0}, RGB8{r: 113, g:   0, b:   0}, RGB8{r: 110, g:   0, b:   0},
      RGB8{r: 108, g:   0, b:   0}, RGB8{r: 105, g:   0, b:   0}, RGB8{r: 103, g:   0, b:   0}, RGB8{r: 100, g:   0, b:   0},
      RGB8{r:  98, g:   0, b:   0}, RGB8{r:  95, g:   0, b:   0}, RGB8{r:  93, g:   0, b:   0}, RGB8{r:  90, g:   0, b:   0},
      RGB8{r:  88, g:   0, b:   0}, RGB8{r:  85, g:   0, b:   0}, RGB8{r:  83, g:   0, b:   0}, RGB8{r:  80, g:   0, b:   0},
      RGB8{r:  78, g:   0, b:   0}, RGB8{r:  75, g:   0, b:   0}, RGB8{r:  73, g:   0, b:   0}, RGB8{r:  70, g:   0, b:   0},
      RGB8{r:  68, g:   0, b:   0}, RGB8{r:  65, g:   0, b:   0}, RGB8{r:  63, g:   0, b:   0}, RGB8{r:  60, g:   0, b:   0},
      RGB8{r:  57, g:   0, b:   0}, RGB8{r:  55, g:   0, b:   0}, RGB8{r:  53, g:   0, b:   0}, RGB8{r:  50, g:   0, b:   0},
      RGB8{r:  47, g:   0, b:   0}, RGB8{r:  45, g:   0, b:   0}, RGB8{r:  43, g:   0, b:   0}, RGB8{r:  40, g:   0, b:   0},
      RGB8{r:  37, g:   0, b:   0}, RGB8{r:  35, g:   0, b:   0}, RGB8{r:  33, g:   0, b:   0}, RGB8{r:  30, g:   0, b:   0},
      RGB8{r:  27, g:   0, b:   0}, RGB8{r:  25, g:   0, b:   0}, RGB8{r:  22, g:   0, b:   0}, RGB8{r:  20, g:   0, b:   0},
      RGB8{r:  17, g:   0, b:   0}, RGB8{r:  15, g:   0, b:   0}, RGB8{r:  13, g:   0, b:   0}, RGB8{r:  10, g:   0, b:   0},
      RGB8{r:   8, g:   0, b:   0}, RGB8{r:   5, g:   0, b:   0}, RGB8{r:   3, g:   0, b:   0}, RGB8{r:   0, g:   0, b:   0},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref CUBEHLX: PaletteData = {
  PaletteData {
    name: "cubehlx",
    rgb: vec![
      RGB8{r: 255, g: 255, b: 255}, RGB8{r: 253, g: 254, b: 254}, RGB8{r: 251, g: 254, b: 252}, RGB8{r: 250, g: 253, b: 251},
      RGB8{r: 248, g: 253, b: 250}, RGB8{r: 246, g: 252, b: 248}, RGB8{r: 244, g: 252, b: 247}, RGB8{r: 242, g: 251, b: 246},
      RGB8{r: 240, g: 251, b: 245}, RGB8{r: 239, g: 250, b: 244}, RGB8{r: 237, g: 250, b: 244}, RGB8{r: 235, g: 249, b: 243},
      RGB8{r: 233, g: 248, b: 242}, RGB8{r: 231, g: 248, b: 241}, RGB8{r: 229, g: 247, b: 241}, RGB8{r: 227, g: 246, b: 240},
      RGB8{r: 226, g: 246, b: 240}, RGB8{r: 224, g: 245, b: 240}, RGB8{r: 222, g: 244, b: 239}, RGB8{r: 220, g: 243, b: 239},
      RGB8{r: 219, g: 243, b: 239}, RGB8{r: 217, g: 242, b: 239}, RGB8{r: 215, g: 241, b: 239}, RGB8{r: 214, g: 240, b: 239},
      RGB8{r: 212, g: 239, b: 239}, RGB8{r: 211, g: 238, b: 239}, RGB8{r: 209, g: 237, b: 239}, RGB8{r: 208, g: 236, b: 239},
      RGB8{r: 207, g: 235, b: 239}, RGB8{r: 205, g: 234, b: 239}, RGB8{r: 204, g: 233, b: 239}, RGB8{r: 203, g: 232, b: 240},
      RGB8{r: 202, g: 231, b: 240}, RGB8{r: 201, g: 229, b: 240}, RGB8{r: 200, g: 228, b: 240}, RGB8{r: 199, g: 227, b: 241},
      RGB8{r: 198, g: 225, b: 241}, RGB8{r: 198, g: 224, b: 241}, RGB8{r: 197, g: 223, b: 242}, RGB8{r: 196, g: 221, b: 242},
      RGB8{r: 196, g: 220, b: 242}, RGB8{r: 195, g: 218, b: 242}, RGB8{r: 195, g: 217, b: 243}, RGB8{r: 194, g: 215, b: 243},
      RGB8{r: 194, g: 214, b: 243}, RGB8{r: 194, g: 212, b: 243}, RGB8{r: 194, g: 210, b: 243}, RGB8{r: 193, g: 209, b: 243},
      RGB8{r: 193, g: 207, b: 243}, RGB8{r: 193, g: 205, b: 243}, RGB8{r: 193, g: 204, b: 243}, RGB8{r: 193, g: 202, b: 243},
      RGB8{r: 194, g: 200, b: 243}, RGB8{r: 194, g: 198, b: 243}, RGB8{r: 194, g: 197, b: 243}, RGB8{r: 194, g: 195, b: 242},
      RGB8{r: 195, g: 193, b: 242}, RGB8{r: 195, g: 191, b: 242}, RGB8{r: 196, g: 189, b: 241}, RGB8{r: 196, g: 188, b: 241},
      RGB8{r: 197, g: 186, b: 240}, RGB8{r: 197, g: 184, b: 239}, RGB8{r: 198, g: 182, b: 238}, RGB8{r: 198, g: 180, b: 238},
      RGB8{r: 199, g: 178, b: 237}, RGB8{r: 200, g: 177, b: 236}, RGB8{r: 200, g: 175, b: 234}, RGB8{r: 201, g: 173, b: 233},
      RGB8{r: 202, g: 171, b: 232}, RGB8{r: 202, g: 169, b: 231}, RGB8{r: 203, g: 168, b: 229}, RGB8{r: 204, g: 166, b: 228},
      RGB8{r: 204, g: 164, b: 226}, RGB8{r: 205, g: 162, b: 224}, RGB8{r: 206, g: 161, b: 223}, RGB8{r: 207, g: 159, b: 221},
      RGB8{r: 207, g: 157, b: 219}, RGB8{r: 208, g: 156, b: 217}, RGB8{r: 208, g: 154, b: 215}, RGB8{r: 209, g: 152, b: 212},
      RGB8{r: 210, g: 151, b: 210}, RGB8{r: 210, g: 149, b: 208}, RGB8{r: 210, g: 148, b: 206}, RGB8{r: 211, g: 146, b: 203},
      RGB8{r: 211, g: 145, b: 201}, RGB8{r: 212, g: 144, b: 198}, RGB8{r: 212, g: 142, b: 195}, RGB8{r: 212, g: 141, b: 193},
      RGB8{r: 212, g: 140, b: 190}, RGB8{r: 212, g: 138, b: 187}, RGB8{r: 213, g: 137, b: 184}, RGB8{r: 213, g: 136, b: 181},
      RGB8{r: 212, g: 135, b: 178}, RGB8{r: 212, g: 134, b: 175}, RGB8{r: 212, g: 133, b: 172}, RGB8{r: 212, g: 132, b: 169},
      RGB8{r: 211, g: 131, b: 166}, RGB8{r: 211, g: 130, b: 163}, RGB8{r: 211, g: 129, b: 160}, RGB8{r: 210, g: 128, b: 156},
      RGB8{r: 209, g: 128, b: 153}, RGB8{r: 209, g: 127, b: 150}, RGB8{r: 208, g: 126, b: 147}, RGB8{r: 207, g: 126, b: 143},
      RGB8{r: 206, g: 125, b: 140}, RGB8{r: 205, g: 125, b: 137}, RGB8{r: 204, g: 124, b: 134}, RGB8{r: 202, g: 124, b: 131},
      RGB8{r: 201, g: 123, b: 127}, RGB8{r: 200, g: 123, b: 124}, RGB8{r: 198, g: 122, b: 121}, RGB8{r: 197, g: 122, b: 118},
      RGB8{r: 195, g: 122, b: 115}, RGB8{r: 193, g: 122, b: 112}, RGB8{r: 191, g: 121, b: 109}, RGB8{r: 190, g: 121, b: 106},
      RGB8{r: 188, g: 121, b: 103}, RGB8{r: 185, g: 121, b: 100}, RGB8{r: 183, g: 121, b:  97}, RGB8{r: 181, g: 121, b:  94},
      RGB8{r: 179, g: 121, b:  91}, RGB8{r: 177, g: 121, b:  89}, RGB8{r: 174, g: 121, b:  86}, RGB8{r: 172, g: 121, b:  84},
      RGB8{r: 169, g: 121, b:  81}, RGB8{r: 167, g: 121, b:  79}, RGB8{r: 164, g: 121, b:  76}, RGB8{r: 161, g: 121, b:  74},
      RGB8{r: 159, g: 121, b:  72}, RGB8{r: 156, g: 121, b:  70}, RGB8{r: 153, g: 121, b:  68}, RGB8{r: 150, g: 122, b:  66},
      RGB8{r: 147, g: 122, b:  64}, RGB8{r: 144, g: 122, b:  62}, RGB8{r: 141, g: 122, b:  61}, RGB8{r: 138, g: 122, b:  59},
      RGB8{r: 135, g: 122, b:  58}, RGB8{r: 132, g: 122, b:  56}, RGB8{r: 129, g: 122, b:  55}, RGB8{r: 126, g: 122, b:  54},
      RGB8{r: 123, g: 122, b:  53}, RGB8{r: 120, g: 123, b:  52}, RGB8{r: 117, g: 123, b:  51}, RGB8{r: 114, g: 123, b:  50},
      RGB8{r: 111, g: 123, b:  49}, RGB8{r: 108, g: 123, b:  49}, RGB8{r: 105, g: 123, b:  48}, RGB8{r: 102, g: 122, b:  48},
      RGB8{r:  99, g: 122, b:  47}, RGB8{r:  96, g: 122, b:  47}, RGB8{r:  93, g: 122, b:  47}, RGB8{r:  90, g: 122, b:  47},
      RGB8{r:  87, g: 122, b:  47}, RGB8{r:  84, g: 121, b:  47}, RGB8{r:  81, g: 121, b:  47}, RGB8{r:  78, g: 121, b:  47},
      RGB8{r:  76, g: 121, b:  47}, RGB8{r:  73, g: 120, b:  48}, RGB8{r:  70, g: 120, b:  48}, RGB8{r:  68, g: 119, b:  49},
      RGB8{r:  65, g: 119, b:  49}, RGB8{r:  63, g: 118, b:  50}, RGB8{r:  60, g: 118, b:  50}, RGB8{r:  58, g: 117, b:  51},
      RGB8{r:  56, g: 116, b:  52}, RGB8{r:  53, g: 116, b:  53}, RGB8{r:  51, g: 115, b:  53}, RGB8{r:  49, g: 114, b:  54},
      RGB8{r:  47, g: 113, b:  55}, RGB8{r:  45, g: 112, b:  56}, RGB8{r:  43, g: 111, b:  57}, RGB8{r:  42, g: 110, b:  58},
      RGB8{r:  40, g: 109, b:  59}, RGB8{r:  38, g: 108, b:  60}, RGB8{r:  37, g: 107, b:  61}, RGB8{r:  35, g: 106, b:  62},
      RGB8{r:  34, g: 105, b:  63}, RGB8{r:  32, g: 104, b:  64}, RGB8{r:  31, g: 103, b:  65}, RGB8{r:  30, g: 101, b:  66},
      RGB8{r:  29, g: 100, b:  67}, RGB8{r:  28, g:  99, b:  68}, RGB8{r:  27, g:  97, b:  69}, RGB8{r:  26, g:  96, b:  70},
      RGB8{r:  25, g:  94, b:  71}, RGB8{r:  25, g:  93, b:  72}, RGB8{r:  24, g:  91, b:  72}, RGB8{r:  23, g:  90, b:  73},
      RGB8{r:  23, g:  88, b:  74}, RGB8{r:  22, g:  87, b:  75}, RGB8{r:  22, g:  85, b:  75}, RGB8{r:  22, g:  83, b:  76},
      RGB8{r:  21, g:  82, b:  76}, RGB8{r:  21, g:  80, b:  77}, RGB8{r:  21, g:  78, b:  77}, RGB8{r:  21, g:  77, b:  78},
      RGB8{r:  21, g:  75, b:  78}, RGB8{r:  21, g:  73, b:  78}, RGB8{r:  21, g:  71, b:  78}, RGB8{r:  21, g:  70, b:  78},
      RGB8{r:  21, g:  68, b:  79}, RGB8{r:  21, g:  66, b:  78}, RGB8{r:  22, g:  64, b:  78}, RGB8{r:  22, g:  63, b:  78},
      RGB8{r:  22, g:  61, b:  78}, RGB8{r:  22, g:  59, b:  78}, RGB8{r:  22, g:  57, b:  77}, RGB8{r:  23, g:  55, b:  77},
      RGB8{r:  23, g:  54, b:  76}, RGB8{r:  23, g:  52, b:  76}, RGB8{r:  24, g:  50, b:  75}, RGB8{r:  24, g:  49, b:  74},
      RGB8{r:  24, g:  47, b:  73}, RGB8{r:  25, g:  45, b:  72}, RGB8{r:  25, g:  44, b:  71}, RGB8{r:  25, g:  42, b:  70},
      RGB8{r:  25, g:  40, b:  69}, RGB8{r:  26, g:  39, b:  68}, RGB8{r:  26, g:  37, b:  67}, RGB8{r:  26, g:  36, b:  65},
      RGB8{r:  26, g:  34, b:  64}, RGB8{r:  26, g:  33, b:  62}, RGB8{r:  27, g:  31, b:  61}, RGB8{r:  27, g:  30, b:  59},
      RGB8{r:  27, g:  28, b:  58}, RGB8{r:  27, g:  27, b:  56}, RGB8{r:  27, g:  26, b:  54}, RGB8{r:  26, g:  24, b:  53},
      RGB8{r:  26, g:  23, b:  51}, RGB8{r:  26, g:  22, b:  49}, RGB8{r:  26, g:  20, b:  47}, RGB8{r:  25, g:  19, b:  45},
      RGB8{r:  25, g:  18, b:  43}, RGB8{r:  25, g:  17, b:  41}, RGB8{r:  24, g:  16, b:  39}, RGB8{r:  24, g:  15, b:  37},
      RGB8{r:  23, g:  14, b:  35}, RGB8{r:  22, g:  13, b:  33}, RGB8{r:  22, g:  12, b:  31}, RGB8{r:  21, g:  11, b:  29},
      RGB8{r:  20, g:  10, b:  27}, RGB8{r:  19, g:   9, b:  25}, RGB8{r:  18, g:   8, b:  23}, RGB8{r:  17, g:   8, b:  21},
      RGB8{r:  16, g:   7, b:  19}, RGB8{r:  15, g:   6, b:  17}, RGB8{r:  14, g:   5, b:  15}, RGB8{r:  12, g:   5, b:  14},
      RGB8{r:  11, g:   4, b:  12}, RGB8{r:  10, g:   3, b:  10}, RGB8{r:   8, g:   3, b:   8}, RGB8{r:   7, g:   2, b:   6},
      RGB8{r:   5, g:   2, b:   5}, RGB8{r:   3, g:   1, b:   3}, RGB8{r:   2, g:   1, b:   2}, RGB8{r:   0, g:   0, b:   0},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref REGISTERED_TABLES: [&'static PaletteData; 4] = [
    &*RAINBOW, &*EOSB, &*FIRE, &*CUBEHLX];
}
