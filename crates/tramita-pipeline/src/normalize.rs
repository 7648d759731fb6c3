//! Pure field normalization
//!
//! Stateless transforms applied to raw scraped values. Every function here
//! is deterministic and total: date normalization in particular never
//! fails, it degrades to an explicit passthrough.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;
use tramita_domain::{Author, DateValue};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sentinel document key when number or year is unknown
pub const UNNAMED_DOCUMENT_KEY: &str = "arquivo-sem-nome";

fn non_word_re() -> &'static Regex {
    static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();
    NON_WORD_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid non-word regex"))
}

fn party_re() -> &'static Regex {
    static PARTY_RE: OnceLock<Regex> = OnceLock::new();
    PARTY_RE.get_or_init(|| Regex::new(r"\((.*?)\)").expect("valid party regex"))
}

fn honorific_re() -> &'static Regex {
    static HONORIFIC_RE: OnceLock<Regex> = OnceLock::new();
    HONORIFIC_RE
        .get_or_init(|| Regex::new(r"^\s*(?:Ver\.|Vereadora?\b)\s*").expect("valid honorific regex"))
}

fn long_date_re() -> &'static Regex {
    static LONG_DATE_RE: OnceLock<Regex> = OnceLock::new();
    LONG_DATE_RE.get_or_init(|| {
        Regex::new(r"(?i)(\d{1,2})\s+de\s+(\p{L}+)\s+de\s+(\d{4})").expect("valid long date regex")
    })
}

fn whitespace_re() -> &'static Regex {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Portuguese month names in calendar order
const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// Convert a text like "São Paulo" into "sao-paulo"
///
/// Compatibility-decomposes and strips combining marks, lowercases, then
/// collapses any run of whitespace/non-word characters into one hyphen.
pub fn slugify(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lower = stripped.to_lowercase();
    let hyphened = non_word_re().replace_all(&lower, "-");
    hyphened.trim_matches('-').to_string()
}

/// Split a raw author string into name and party
///
/// A parenthesized token is the party (upper-cased); the remainder, with a
/// leading "Ver."/"Vereador(a)" honorific stripped, is the name. Without a
/// parenthesized token the whole trimmed string is the name and the party
/// is unknown.
pub fn split_author(raw: &str) -> Author {
    if let Some(caps) = party_re().captures(raw) {
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let party = inner.trim().to_uppercase();
        let without_honorific = honorific_re().replace(raw, "");
        let name = without_honorific
            .replace(&format!("({})", inner), "")
            .trim()
            .to_string();
        Author {
            name,
            party: (!party.is_empty()).then_some(party),
        }
    } else {
        Author {
            name: raw.trim().to_string(),
            party: None,
        }
    }
}

/// Normalize a raw date string from any supported source format
///
/// Tries, in order: `dd/mm/yyyy hh:mm:ss`, `dd/mm/yyyy hh:mm`,
/// `dd/mm/yyyy`, ISO `yyyy-mm-dd`, US `mm/dd/yyyy`, then the Portuguese
/// long form `"<dia> de <mês> de <ano>"`. When nothing matches the original
/// string is kept as [`DateValue::Unparsed`] rather than signalling an
/// error.
pub fn parse_date(raw: Option<&str>) -> DateValue {
    let Some(raw) = raw else {
        return DateValue::Missing;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateValue::Missing;
    }

    for fmt in ["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return DateValue::Parsed(dt.date());
        }
    }
    for fmt in ["%d/%m/%Y", "%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return DateValue::Parsed(d);
        }
    }
    if let Some(d) = parse_long_form(trimmed) {
        return DateValue::Parsed(d);
    }
    DateValue::Unparsed(raw.to_string())
}

fn parse_long_form(text: &str) -> Option<NaiveDate> {
    let caps = long_date_re().captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month_name = caps[2].to_lowercase();
    let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build the filesystem-safe base name for a document's artifacts
///
/// `slugify(type)-number-year` when both number and year are known,
/// otherwise the fixed sentinel [`UNNAMED_DOCUMENT_KEY`].
pub fn document_key(doc_type: Option<&str>, number: Option<&str>, year: Option<&str>) -> String {
    let number = number.map(str::trim).unwrap_or("");
    let year = year.map(str::trim).unwrap_or("");
    if number.is_empty() || year.is_empty() {
        return UNNAMED_DOCUMENT_KEY.to_string();
    }

    let parts = [
        slugify(doc_type.unwrap_or("")),
        slugify(number),
        slugify(year),
    ];
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("-")
}

/// Tidy a procedural-status description
///
/// Truncates at the portal's "=>" continuation marker and collapses
/// internal whitespace runs.
pub fn tidy_status_description(raw: &str) -> String {
    let head = raw.split("=>").next().unwrap_or(raw);
    whitespace_re().replace_all(head.trim(), " ").to_string()
}
