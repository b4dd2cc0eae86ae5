/// One row of the built-in table. `leading_digits: None` allows 1-9.
#[derive(Debug, Clone, Copy)]
pub struct PlanRow {
    pub region: &'static str,
    pub calling_code: &'static str,
    pub trunk_prefix: Option<&'static str>,
    pub lengths: &'static [usize],
    pub leading_digits: Option<&'static str>,
}

const fn row(
    region: &'static str,
    calling_code: &'static str,
    trunk_prefix: Option<&'static str>,
    lengths: &'static [usize],
    leading_digits: Option<&'static str>,
) -> PlanRow {
    PlanRow {
        region,
        calling_code,
        trunk_prefix,
        lengths,
        leading_digits,
    }
}

const NANP_AREA_CODE: Option<&str> = Some("23456789");

// Order matters for shared calling codes: the first row is the main region.
pub const BUILTIN_PLANS: &[PlanRow] = &[
    // North American Numbering Plan
    row("US", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("CA", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("PR", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("DO", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("JM", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("TT", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("BS", "1", Some("1"), &[10], NANP_AREA_CODE),
    row("BB", "1", Some("1"), &[10], NANP_AREA_CODE),
    // Europe
    row("RU", "7", Some("8"), &[10], Some("3489")),
    row("KZ", "7", Some("8"), &[10], Some("67")),
    row("NL", "31", Some("0"), &[9], None),
    row("BE", "32", Some("0"), &[8, 9], None),
    row("FR", "33", Some("0"), &[9], None),
    row("ES", "34", None, &[9], Some("56789")),
    row("IT", "39", None, &[6, 7, 8, 9, 10, 11], Some("0123456789")),
    row("CH", "41", Some("0"), &[9], None),
    row("AT", "43", Some("0"), &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13], None),
    row("GB", "44", Some("0"), &[7, 9, 10], None),
    row("DK", "45", None, &[8], None),
    row("SE", "46", Some("0"), &[7, 8, 9], None),
    row("NO", "47", None, &[8], None),
    row("PL", "48", None, &[9], None),
    row("DE", "49", Some("0"), &[6, 7, 8, 9, 10, 11, 12, 13], None),
    row("PT", "351", None, &[9], Some("23456789")),
    row("IE", "353", Some("0"), &[7, 8, 9], None),
    row("GR", "30", None, &[10], Some("2689")),
    // Africa
    row("EG", "20", Some("0"), &[8, 9, 10], None),
    row("ZA", "27", Some("0"), &[9], None),
    row("NG", "234", Some("0"), &[8, 9, 10], None),
    row("KE", "254", Some("0"), &[9], None),
    // Latin America
    row("MX", "52", None, &[10], None),
    row("AR", "54", Some("0"), &[10, 11], None),
    row("BR", "55", Some("0"), &[10, 11], None),
    row("CO", "57", Some("0"), &[10], None),
    // Asia-Pacific
    row("AU", "61", Some("0"), &[9], None),
    row("PH", "63", Some("0"), &[8, 9, 10], None),
    row("NZ", "64", Some("0"), &[8, 9, 10], None),
    row("SG", "65", None, &[8], Some("3689")),
    row("JP", "81", Some("0"), &[9, 10], None),
    row("KR", "82", Some("0"), &[8, 9, 10], None),
    row("CN", "86", Some("0"), &[10, 11], None),
    row("HK", "852", None, &[8], Some("2345679")),
    row("TR", "90", Some("0"), &[10], None),
    row("IN", "91", Some("0"), &[10], None),
    row("PK", "92", Some("0"), &[9, 10], None),
    // Middle East
    row("AE", "971", Some("0"), &[8, 9], None),
    row("IL", "972", Some("0"), &[8, 9], None),
    row("SA", "966", Some("0"), &[9], None),
];
