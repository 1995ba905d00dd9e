//! Extraction of event metadata from fetched HTML.
//!
//! DESIGN
//! ======
//! The page is parsed into a DOM with `scraper` (html5ever), so entities,
//! comments, raw-text elements and implied `<head>`/`<body>` placement
//! follow the HTML5 parsing rules. The title comes from the first `<h1>` or
//! `<title>`, the visible text from the text nodes under `<body>` outside
//! `<script>` and `<style>`. Date ranges and locations are then matched
//! against that text with regexes. All patterns use ASCII digit classes so
//! that other Unicode digits never count as dates.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node};

const FALLBACK_TITLE: &str = "Event";

/// Elements whose text never renders as page content.
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| regex(r"\s+"));

static LONG_DATE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)([0-9]{1,2})\s*(january|february|march|april|may|june|july|august|september|october|november|december)\s*([0-9]{4})",
    )
});
// The gap stays on one line, matching the line rule for long-form ranges.
static NUMERIC_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"([0-9]{4})[-/]([0-9]{1,2})[-/]([0-9]{1,2})[^\n\r\x{2028}\x{2029}]*?([0-9]{4})[-/]([0-9]{1,2})[-/]([0-9]{1,2})",
    )
});
static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)Johannesburg|South\s*Africa|Pretoria|Cape\s*Town"));
static YEAR: LazyLock<Regex> = LazyLock::new(|| regex(r"[0-9]{4}"));
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| regex(r"[^a-z0-9]+"));

// =============================================================================
// TEXT
// =============================================================================

/// First element named `name` in document order.
fn first_element<'a>(doc: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    doc.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}

/// Event title: first `<h1>` text, else the document `<title>`, else `"Event"`.
#[must_use]
pub fn page_title(html: &str) -> String {
    let doc = Html::parse_document(html);

    let heading = first_element(&doc, "h1")
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());
    if let Some(heading) = heading {
        return heading;
    }

    first_element(&doc, "title")
        .map(|title| collapse_whitespace(&title.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Text content of the document body, without scripts, styles or comments.
#[must_use]
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Some(body) = first_element(&doc, "body") else {
        return String::new();
    };

    body.descendants()
        .filter(|node| !node.ancestors().any(|a| is_hidden(a.value())))
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        })
        .collect()
}

fn is_hidden(node: &Node) -> bool {
    node.as_element().is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

// =============================================================================
// DATES
// =============================================================================

/// Inclusive calendar range as ISO dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Renders as `<start>--<end>`.
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.start, self.end)
    }
}

/// First date range in `text`: long form (`12 March 2026 … 14 March 2026`)
/// first, then numeric (`2026-03-12 … 2026/03/14`). Both ends must sit on
/// the same line.
#[must_use]
pub fn date_range(text: &str) -> Option<DateRange> {
    long_form_range(text).or_else(|| numeric_range(text))
}

struct LongDate<'a> {
    start: usize,
    end: usize,
    day: &'a str,
    month: usize,
    year: &'a str,
}

fn long_form_range(text: &str) -> Option<DateRange> {
    let dates: Vec<LongDate<'_>> = LONG_DATE
        .captures_iter(text)
        .filter_map(|c| {
            let whole = c.get(0)?;
            let month = MONTHS.iter().position(|m| m.eq_ignore_ascii_case(&c[2]))? + 1;
            Some(LongDate {
                start: whole.start(),
                end: whole.end(),
                day: c.get(1)?.as_str(),
                month,
                year: c.get(3)?.as_str(),
            })
        })
        .collect();

    for (i, first) in dates.iter().enumerate() {
        for second in &dates[i + 1..] {
            if crosses_line(&text[first.end..second.start]) {
                break;
            }
            if second.month == first.month && second.year == first.year {
                return Some(DateRange {
                    start: format!("{}-{:02}-{:0>2}", first.year, first.month, first.day),
                    end: format!("{}-{:02}-{:0>2}", first.year, first.month, second.day),
                });
            }
        }
    }
    None
}

fn numeric_range(text: &str) -> Option<DateRange> {
    let c = NUMERIC_RANGE.captures(text)?;
    let iso = |y: usize, m: usize, d: usize| -> Option<String> {
        let month: u32 = c[m].parse().ok()?;
        let day: u32 = c[d].parse().ok()?;
        Some(format!("{}-{month:02}-{day:02}", &c[y]))
    };
    Some(DateRange { start: iso(1, 2, 3)?, end: iso(4, 5, 6)? })
}

fn crosses_line(gap: &str) -> bool {
    gap.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}

// =============================================================================
// LOCATION / SLUG
// =============================================================================

/// First whitelisted location mentioned in `text`, whitespace-normalized.
#[must_use]
pub fn location(text: &str) -> Option<String> {
    LOCATION.find(text).map(|m| collapse_whitespace(m.as_str()))
}

/// Lowercase, hyphen-separated, alphanumeric-only form of `text`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_SLUG.replace_all(&lower, "-").trim_matches('-').to_string()
}

/// Slug for an event title, ignoring the first four-digit run (usually the year).
#[must_use]
pub fn title_slug(title: &str) -> String {
    slugify(YEAR.replace(title, "").trim())
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
