//! English vocabulary fragments shared by the pattern tables.
//!
//! Templates reference fragments as `{NAME}`; [`expand`] substitutes them.
//! Fragments never contain named groups, so a template may use one several
//! times without producing duplicate group names.

pub const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Months without the bare "may", which is far more often the verb.
pub const MONTH_NO_MAY: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

pub const DAY: &str = r"(?:[12]\d|3[01]|0?[1-9])";

pub const ORD: &str = r"(?:st|nd|rd|th)?";

pub const YEAR: &str = r"(?:(?:1\d|20)\d{2}|2100)";

pub const RELATIVE: &str = r"(?:this|next|last|past|previous|coming|upcoming|current|following)";

pub const TILL: &str = r"(?:\b(?:to|(?:un)?till?|thru|through)\b|--|-|—|–|~)";

pub const CONNECTOR: &str = r"(?:\b(?:and|through|to)\b|--|-|—|–|~)";

pub const NUM: &str = r"(?:\d+(?:\.\d+)?|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|few|several|couple\s+of)";

pub const WEEKDAY: &str = r"(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)";

pub const RELATIVE_DAY: &str = r"(?:today|tomorrow|tmr|yesterday|now)";

const FRAGMENTS: &[(&str, &str)] = &[
    ("{MONTH}", MONTH),
    ("{MONTH_NO_MAY}", MONTH_NO_MAY),
    ("{DAY}", DAY),
    ("{ORD}", ORD),
    ("{YEAR}", YEAR),
    ("{RELATIVE}", RELATIVE),
    ("{TILL}", TILL),
    ("{CONNECTOR}", CONNECTOR),
    ("{NUM}", NUM),
    ("{WEEKDAY}", WEEKDAY),
    ("{RELATIVE_DAY}", RELATIVE_DAY),
];

/// Substitute `{NAME}` fragment references in a pattern template.
#[must_use]
pub fn expand(template: &str) -> String {
    FRAGMENTS
        .iter()
        .fold(template.to_string(), |acc, (name, fragment)| {
            acc.replace(name, fragment)
        })
}
