//! Fixed vocabularies of the line notation.

/// Tags the crate reads or writes. Any other tag is accepted and ignored.
pub mod tags {
    pub const HEAD: &str = "HEAD";
    pub const TRLR: &str = "TRLR";
    pub const INDI: &str = "INDI";
    pub const FAM: &str = "FAM";
    pub const SUBM: &str = "SUBM";

    pub const NAME: &str = "NAME";
    pub const GIVN: &str = "GIVN";
    pub const SURN: &str = "SURN";
    pub const PRIM: &str = "_PRIM";
    pub const SEX: &str = "SEX";
    pub const BIRT: &str = "BIRT";
    pub const DEAT: &str = "DEAT";
    pub const DATE: &str = "DATE";
    pub const PLAC: &str = "PLAC";

    pub const HUSB: &str = "HUSB";
    pub const WIFE: &str = "WIFE";
    pub const CHIL: &str = "CHIL";

    pub const SOUR: &str = "SOUR";
    pub const CHAR: &str = "CHAR";
}

/// Month abbreviations, index 0 is January.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Value written for a `_PRIM` line set to true.
pub const PRIMARY_YES: &str = "Y";
/// Value written for a `_PRIM` line set to false.
pub const PRIMARY_NO: &str = "N";

/// Byte-order mark stripped from the first input line.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Look up a month number (1-12) by its abbreviation, ignoring case.
pub fn month_from_abbreviation(abbreviation: &str) -> Option<u8> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbreviation))
        .map(|index| index as u8 + 1)
}

/// Abbreviation for a month number (1-12).
pub fn month_abbreviation(month: u8) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index as usize))
        .copied()
}

/// Parse a `_PRIM` value. Anything other than `Y`/`N` is unrecognized.
pub fn primary_from_value(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case(PRIMARY_YES) {
        Some(true)
    } else if value.eq_ignore_ascii_case(PRIMARY_NO) {
        Some(false)
    } else {
        None
    }
}

/// `_PRIM` value for a flag.
pub fn primary_value(primary: bool) -> &'static str {
    if primary { PRIMARY_YES } else { PRIMARY_NO }
}
