//! Hand-curated locations of the Utrecht parking facilities.
//!
//! The feed only reports facility names, so map placement relies on this table.
//! Feed names are loosely formatted ("Stationsplein Laag", "Fietsenstalling
//! Neude"), so a lookup falls back to the first key, in table order, that occurs
//! in the name.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

const fn at(lat: f64, lon: f64) -> Coordinate {
    Coordinate { lat, lon }
}

/// Ordered by lookup priority. Base names precede their "Hoog"/"Laag" levels.
pub static REGISTRY: &[(&str, Coordinate)] = &[
    ("House Modernes", at(52.093_301_722_731_89, 5.115_784_922_159_138)),
    ("House Modernes Laag", at(52.0930, 5.1165)),
    ("House Modernes Hoog", at(52.0936, 5.1140)),
    ("Keizerstraat", at(52.094_510_504_968_49, 5.124_924_939_429_88)),
    ("Keizerstraat Laag", at(52.0940, 5.1242)),
    ("Keizerstraat Hoog", at(52.0950, 5.1251)),
    ("Knoop", at(52.087_470_410_573_27, 5.109_601_439_351_618)),
    ("Knoop Laag", at(52.0879, 5.1097)),
    ("Knoop Hoog", at(52.0881, 5.1094)),
    ("Laag Catharijne", at(52.091_823_799_288_91, 5.112_747_784_926_727)),
    ("Laag Catharijne Laag", at(52.0912, 5.1130)),
    ("Laag Catharijne Hoog", at(52.0921, 5.1123)),
    ("Neude", at(52.093_027_995_553_06, 5.118_177_468_265_716)),
    ("Neude Hoog", at(52.0926, 5.1185)),
    ("Neude Laag", at(52.0924, 5.1180)),
    ("Pop Up Domplein", at(52.090_781_834_739_1, 5.121_926_516_147_517)),
    ("Pop Up Jacobskerkhof", at(52.094_948_406_933_234, 5.115_310_768_265_824)),
    ("Pop Up Janskerkhof", at(52.093_196_770_752_3, 5.122_067_744_983_529_5)),
    ("Pop Up Mariaplaats", at(52.089_938_368_592_17, 5.116_711_037_578_421)),
    ("Pop Up Neude", at(52.093_246_120_130_445, 5.119_277_375_670_654)),
    ("Pop Up Vredenburg", at(52.093_131_620_434_825, 5.113_901_508_208_987)),
    ("Stadhuis", at(52.092_410_808_910_99, 5.120_231_025_327_54)),
    ("Stadhuis Hoog", at(52.0920, 5.1203)),
    ("Stadhuis Laag", at(52.0926, 5.1200)),
    ("Stationsplein", at(52.091_510_784_356_88, 5.110_561_361_519_456)),
    ("Stationsplein Hoog", at(52.0910, 5.1109)),
    ("Stationsplein Laag", at(52.0912, 5.1104)),
    ("UB Plein", at(52.094_892_341_745_2, 5.125_667_553_706_052_5)),
    ("UB Plein Hoog", at(52.0943, 5.1258)),
    ("UB Plein Laag", at(52.0950, 5.1253)),
    ("Vredenburg", at(52.092_954_457_310_704, 5.114_044_671_892_185)),
    ("Vredenburg Hoog", at(52.0920, 5.1143)),
    ("Vredenburg Laag", at(52.0925, 5.1139)),
    ("Zadelstraat", at(52.090_060_949_159_63, 5.118_434_754_773_205)),
    ("Zadelstraat Hoog", at(52.0903, 5.1186)),
    ("Zadelstraat Laag", at(52.0900, 5.1182)),
    ("Jaarbeursplein", at(52.089_197_546_540_59, 5.107_650_198_418_884_5)),
    ("P+R Westraven", at(52.057_408_912_278_85, 5.105_377_768_263_674)),
    ("Pop Up Stationsplein", at(52.090_803_746_087_076, 5.111_336_931_491_021)),
    ("Pop Up Smakkelaarsveld", at(52.092_247_250_813_96, 5.110_307_854_697_101)),
    ("Pop Up Moreelsepark", at(52.088_245_637_200_544, 5.115_225_687_294_562)),
    ("Pop Up Catharijnesingel", at(52.086_832_559_604_666, 5.117_550_792_865_112)),
    ("Pop Up Springweg", at(52.087_216_936_162_38, 5.120_219_419_849_763_5)),
];

static EXACT: LazyLock<HashMap<&'static str, Coordinate>> =
    LazyLock::new(|| REGISTRY.iter().copied().collect());

static LOWERCASE_KEYS: LazyLock<Vec<(String, Coordinate)>> = LazyLock::new(|| {
    REGISTRY
        .iter()
        .map(|(name, coordinate)| (name.to_lowercase(), *coordinate))
        .collect()
});

/// Resolves a facility name to a location: exact key first, then the first key
/// (in [`REGISTRY`] order) contained case-insensitively in `name`.
pub fn lookup(name: &str) -> Option<Coordinate> {
    if let Some(coordinate) = EXACT.get(name) {
        return Some(*coordinate);
    }

    let name = name.to_lowercase();
    LOWERCASE_KEYS
        .iter()
        .find(|(key, _)| name.contains(key.as_str()))
        .map(|(_, coordinate)| *coordinate)
}
