//! Parsing of user-entered dates.

use chrono::NaiveDate;

use crate::error::IncubatorError;

/// Formats accepted by [`parse_date`], in the order they are tried.
pub const ACCEPTED_FORMATS: [&str; 5] =
    ["YYYY-MM-DD", "MM-DD-YYYY", "MM/DD/YYYY", "MM-DD", "MM/DD"];

/// Inclusive digit-count range of one date field.
type Width = (usize, usize);

const YEAR: Width = (4, 4);
const PART: Width = (1, 2);

/// One literal date layout: the chrono format plus the digit groups the input
/// must have. chrono's `%Y` takes any number of digits; years here are exactly
/// four.
struct Layout {
    format: &'static str,
    sep: char,
    fields: &'static [Width],
}

impl Layout {
    fn fits(&self, input: &str) -> bool {
        let parts: Vec<&str> = input.split(self.sep).collect();
        parts.len() == self.fields.len()
            && parts.iter().zip(self.fields).all(|(part, &(min, max))| {
                (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
            })
    }
}

const FULL_LAYOUTS: [Layout; 3] = [
    Layout {
        format: "%Y-%m-%d",
        sep: '-',
        fields: &[YEAR, PART, PART],
    },
    Layout {
        format: "%m-%d-%Y",
        sep: '-',
        fields: &[PART, PART, YEAR],
    },
    Layout {
        format: "%m/%d/%Y",
        sep: '/',
        fields: &[PART, PART, YEAR],
    },
];

/// Year-less layouts; `format` describes the input once the year is appended.
const YEARLESS_LAYOUTS: [Layout; 2] = [
    Layout {
        format: "%m-%d-%Y",
        sep: '-',
        fields: &[PART, PART],
    },
    Layout {
        format: "%m/%d/%Y",
        sep: '/',
        fields: &[PART, PART],
    },
];

/// Parse a date in one of the [`ACCEPTED_FORMATS`]. The first format that
/// matches wins; year-less input is placed in `current_year`.
pub fn parse_date(input: &str, current_year: i32) -> Result<NaiveDate, IncubatorError> {
    let input = input.trim();

    for layout in FULL_LAYOUTS.iter().filter(|l| l.fits(input)) {
        if let Ok(date) = NaiveDate::parse_from_str(input, layout.format) {
            return Ok(date);
        }
    }

    // chrono needs a year to build a date, so supply it explicitly
    for layout in YEARLESS_LAYOUTS.iter().filter(|l| l.fits(input)) {
        let with_year = format!("{input}{}{current_year}", layout.sep);
        if let Ok(date) = NaiveDate::parse_from_str(&with_year, layout.format) {
            return Ok(date);
        }
    }

    tracing::debug!(input, "rejected date input");
    Err(IncubatorError::InvalidDateFormat {
        input: input.to_string(),
    })
}
