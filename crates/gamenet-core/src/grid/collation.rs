//! Persian-aware, numeric-aware text collation
//!
//! Text is compared on a primary key built from NFKC-normalised, case-folded
//! characters. Persian letters follow the Persian alphabet, runs of digits
//! (ASCII, Persian or Arabic-Indic) compare by numeric value, everything else
//! by code point. Strings equal on the primary key fall back to a raw
//! code-point comparison so the ordering is total.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Persian alphabet, in collation order
const PERSIAN_ALPHABET: [char; 33] = [
    'آ', 'ا', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص',
    'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی',
];

/// Weight of the Persian letter block, just below the first Arabic letter
const PERSIAN_BLOCK: u32 = (0x0621 << 8) - 0x40;

/// Weight a run of digits is compared against when it meets a plain character
const DIGIT_WEIGHT: u32 = ('0' as u32) << 8;

/// Numeric value of an ASCII, Persian or Arabic-Indic digit
pub fn digit_value(c: char) -> Option<u8> {
    let base = match c {
        '0'..='9' => '0',
        '\u{06F0}'..='\u{06F9}' => '\u{06F0}',
        '\u{0660}'..='\u{0669}' => '\u{0660}',
        _ => return None,
    };
    u8::try_from(u32::from(c) - u32::from(base)).ok()
}

/// Map Arabic letter variants onto the Persian letters they are typed as
///
/// Returns `None` for characters that carry no weight (ZWNJ, ZWJ, tatweel).
pub fn fold_persian(c: char) -> Option<char> {
    match c {
        '\u{200C}' | '\u{200D}' | '\u{0640}' => None,
        'ي' | 'ى' | 'ئ' => Some('ی'),
        'ك' => Some('ک'),
        'ة' => Some('ه'),
        'أ' | 'إ' | 'ٱ' => Some('ا'),
        'ؤ' => Some('و'),
        other => Some(other),
    }
}

/// Normalise text for case-insensitive, Persian-aware substring search
///
/// Digits are folded to ASCII so a term typed with Persian digits finds
/// numbers stored as plain integers.
pub fn fold_for_search(text: &str) -> String {
    text.nfkc()
        .filter_map(fold_persian)
        .flat_map(char::to_lowercase)
        .map(|c| match digit_value(c) {
            Some(d) => char::from(b'0' + d),
            None => c,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Unit {
    Char(u32),
    /// Digits of a numeric run, leading zeros stripped
    Number(Vec<u8>),
}

impl Ord for Unit {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Char(a), Self::Char(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Number(_), Self::Char(w)) => DIGIT_WEIGHT.cmp(w),
            (Self::Char(w), Self::Number(_)) => w.cmp(&DIGIT_WEIGHT),
        }
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn char_weight(c: char) -> u32 {
    PERSIAN_ALPHABET
        .iter()
        .position(|&letter| letter == c)
        .and_then(|rank| u32::try_from(rank).ok())
        .map_or(u32::from(c) << 8, |rank| PERSIAN_BLOCK + rank)
}

/// Precomputed sort key for one string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    units: Vec<Unit>,
    raw: String,
}

impl CollationKey {
    /// Build the key for `text`
    pub fn new(text: &str) -> Self {
        let mut units = Vec::new();
        let mut digits: Option<Vec<u8>> = None;

        for c in text.nfkc().filter_map(fold_persian).flat_map(char::to_lowercase) {
            if let Some(d) = digit_value(c) {
                let run = digits.get_or_insert_with(Vec::new);
                if !(run.is_empty() && d == 0) {
                    run.push(d);
                }
                continue;
            }
            if let Some(run) = digits.take() {
                units.push(Unit::Number(run));
            }
            units.push(Unit::Char(char_weight(c)));
        }
        if let Some(run) = digits {
            units.push(Unit::Number(run));
        }

        Self {
            units,
            raw: text.to_string(),
        }
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.units
            .cmp(&other.units)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two strings under the Persian, numeric-aware collation
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
