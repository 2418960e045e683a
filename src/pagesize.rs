//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) in points,
//! where width ≤ height. Use the [`PageOrientation`] trait to convert between
//! portrait and landscape.
//!
//! # Example
//!
//! ```
//! use img2pdf::pagesize::{self, PageOrientation, A4, LETTER};
//!
//! // use a standard size
//! let page_size = LETTER;
//!
//! // convert to landscape
//! let landscape = A4.landscape();
//!
//! // or look one up by name
//! assert_eq!(pagesize::by_name("letter"), Some(LETTER));
//! ```

/// Page dimensions as (width, height) in points.
pub type PageSize = (f32, f32);

// north american sizes
pub const LETTER: PageSize = (8.5 * 72.0, 11.0 * 72.0);
pub const HALF_LETTER: PageSize = (5.5 * 72.0, 8.5 * 72.0);
pub const JUNIOR_LEGAL: PageSize = (5.0 * 72.0, 8.0 * 72.0);
pub const LEGAL: PageSize = (8.5 * 72.0, 13.0 * 72.0);
pub const TABLOID: PageSize = (11.0 * 72.0, 17.0 * 72.0);
pub const LEDGER: PageSize = (17.0 * 72.0, 11.0 * 72.0);

// iso a-series (converted from mm to points)
pub const A0: PageSize = (841.0 * 72.0 / 25.4, 1189.0 * 72.0 / 25.4);
pub const A1: PageSize = (594.0 * 72.0 / 25.4, 841.0 * 72.0 / 25.4);
pub const A2: PageSize = (420.0 * 72.0 / 25.4, 594.0 * 72.0 / 25.4);
pub const A3: PageSize = (297.0 * 72.0 / 25.4, 420.0 * 72.0 / 25.4);
pub const A4: PageSize = (210.0 * 72.0 / 25.4, 297.0 * 72.0 / 25.4);
pub const A5: PageSize = (148.0 * 72.0 / 25.4, 210.0 * 72.0 / 25.4);
pub const A6: PageSize = (105.0 * 72.0 / 25.4, 148.0 * 72.0 / 25.4);

/// Names accepted by [by_name], in the order they're listed in `--help`
pub const NAMES: &[&str] = &[
    "letter",
    "half-letter",
    "junior-legal",
    "legal",
    "tabloid",
    "ledger",
    "a0",
    "a1",
    "a2",
    "a3",
    "a4",
    "a5",
    "a6",
];

/// Look up a page size by its (case-insensitive) name, i.e. `"letter"` or `"A4"`.
/// Append `-landscape` to get the landscape orientation.
pub fn by_name(name: &str) -> Option<PageSize> {
    let name = name.trim().to_ascii_lowercase();
    let (base, landscape) = match name.strip_suffix("-landscape") {
        Some(base) => (base, true),
        None => (name.as_str(), false),
    };

    let size = match base {
        "letter" => LETTER,
        "half-letter" => HALF_LETTER,
        "junior-legal" => JUNIOR_LEGAL,
        "legal" => LEGAL,
        "tabloid" => TABLOID,
        "ledger" => LEDGER,
        "a0" => A0,
        "a1" => A1,
        "a2" => A2,
        "a3" => A3,
        "a4" => A4,
        "a5" => A5,
        "a6" => A6,
        _ => return None,
    };

    Some(if landscape { size.landscape() } else { size })
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_612_by_792() {
        assert_eq!(LETTER, (612.0, 792.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(by_name("A4"), Some(A4));
        assert_eq!(by_name(" Legal "), Some(LEGAL));
        assert_eq!(by_name("b5"), None);
    }

    #[test]
    fn landscape_suffix_swaps_axes() {
        let (w, h) = by_name("a4-landscape").unwrap();
        assert!(w > h);
        assert_eq!((h, w), A4);
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn ledger_portrait_is_tabloid() {
        assert_eq!(LEDGER.portrait(), TABLOID);
    }
}
