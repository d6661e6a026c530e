//! Page resolution for the employee listing
//!
//! Takes an untrusted page identifier and always produces a valid page.
//! Two anomalies are recognised and recovered here, never surfaced:
//!
//! - the identifier is not an integer: serve the first page
//! - the identifier is an integer outside `1..=total_pages`: serve the last page
//!
//! An empty collection still has one (empty) page, so "page 1 of 1" is
//! always a valid state.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Employees shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Fixed, positive number of records per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Create a page size. Zero is rejected.
    pub fn new(size: u32) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::NotPositive {
                field: "page size",
                value: 0,
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ValidationError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

/// Raw page identifier exactly as it arrived (query string, CLI argument)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    raw: Option<String>,
}

/// Outcome of reading a [`PageRequest`] as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedPage {
    Number(i64),
    NotAnInteger,
}

impl PageRequest {
    /// No page given; resolves to page 1.
    pub fn absent() -> Self {
        Self { raw: None }
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            raw: Some(value.into()),
        }
    }

    pub fn number(page: i64) -> Self {
        Self::raw(page.to_string())
    }

    pub fn as_raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Read the identifier as an integer.
    ///
    /// Surrounding whitespace, a leading sign, and single underscores
    /// between digits (`"1_0"`) are accepted. Only ASCII digits count;
    /// other Unicode decimal digits are not integers here. A digit string
    /// too large for `i64` is still an integer and saturates, so it lands
    /// out of range rather than being mistaken for garbage.
    pub fn parse(&self) -> ParsedPage {
        match &self.raw {
            None => ParsedPage::Number(1),
            Some(raw) => parse_integer(raw).map_or(ParsedPage::NotAnInteger, ParsedPage::Number),
        }
    }
}

impl From<Option<String>> for PageRequest {
    fn from(raw: Option<String>) -> Self {
        Self { raw }
    }
}

impl From<&str> for PageRequest {
    fn from(raw: &str) -> Self {
        Self::raw(raw)
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_')
    {
        return None;
    }

    let digits: String = digits.chars().filter(|&c| c != '_').collect();

    Some(match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    })
}

/// How the requested page became the served page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Requested page (or the default page 1) was valid
    Exact,
    /// Identifier was not an integer; first page served
    NotAnInteger,
    /// Integer outside `1..=total_pages`; last page served
    OutOfRange { requested: i64 },
}

/// Resolved page position, before any rows are fetched
///
/// Lets a store compute `LIMIT`/`OFFSET` from a count without loading the
/// whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page (1-indexed, always within `1..=total_pages`)
    pub page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    pub page_size: PageSize,
    pub resolution: Resolution,
}

impl PageWindow {
    /// Number of pages needed for `total_records`, never less than 1.
    pub fn total_pages(total_records: u64, page_size: PageSize) -> u32 {
        if total_records == 0 {
            return 1;
        }
        let pages = total_records.div_ceil(u64::from(page_size.get()));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Resolve a raw request against a collection of `total_records`.
    pub fn locate(total_records: u64, page_size: PageSize, request: &PageRequest) -> Self {
        let total_pages = Self::total_pages(total_records, page_size);

        let (page, resolution) = match request.parse() {
            ParsedPage::NotAnInteger => (1, Resolution::NotAnInteger),
            ParsedPage::Number(n) if (1..=i64::from(total_pages)).contains(&n) => {
                (n as u32, Resolution::Exact)
            }
            ParsedPage::Number(n) => (total_pages, Resolution::OutOfRange { requested: n }),
        };

        if resolution != Resolution::Exact {
            tracing::debug!(
                raw = ?request.as_raw(),
                page,
                total_pages,
                ?resolution,
                "page request normalized"
            );
        }

        Self {
            page,
            total_pages,
            total_records,
            page_size,
            resolution,
        }
    }

    /// Zero-based offset of the first record on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size.get())
    }

    pub fn limit(&self) -> u32 {
        self.page_size.get()
    }

    /// Attach the fetched rows for this window.
    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        debug_assert!(items.len() <= self.limit() as usize);

        Page {
            items,
            number: self.page,
            total_pages: self.total_pages,
            total_records: self.total_records,
            page_size: self.page_size.get(),
            has_previous: self.page > 1,
            has_next: self.page < self.total_pages,
            resolution: self.resolution,
        }
    }
}

/// One page of records plus what a renderer needs for navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page, in collection order
    pub items: Vec<T>,
    /// Current page number (1-indexed)
    pub number: u32,
    pub total_pages: u32,
    pub total_records: u64,
    pub page_size: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub resolution: Resolution,
}

impl<T> Page<T> {
    pub fn previous_page_number(&self) -> Option<u32> {
        self.has_previous.then(|| self.number - 1)
    }

    pub fn next_page_number(&self) -> Option<u32> {
        self.has_next.then(|| self.number + 1)
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_previous || self.has_next
    }

    /// 1-based position of the first record on this page (0 when empty).
    pub fn start_index(&self) -> u64 {
        if self.total_records == 0 {
            return 0;
        }
        u64::from(self.page_size) * u64::from(self.number - 1) + 1
    }

    /// 1-based position of the last record on this page (0 when empty).
    pub fn end_index(&self) -> u64 {
        if self.number == self.total_pages {
            return self.total_records;
        }
        u64::from(self.number) * u64::from(self.page_size)
    }
}

/// Resolve a page against an in-memory collection.
///
/// Pure: the same collection and request always give the same page.
pub fn resolve<T: Clone>(collection: &[T], page_size: PageSize, request: &PageRequest) -> Page<T> {
    let window = PageWindow::locate(collection.len() as u64, page_size, request);

    let start = usize::try_from(window.offset())
        .unwrap_or(usize::MAX)
        .min(collection.len());
    let end = start
        .saturating_add(window.limit() as usize)
        .min(collection.len());

    window.into_page(collection[start..end].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u32) -> PageSize {
        PageSize::new(n).unwrap()
    }

    fn records(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = PageSize::new(0).unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { .. }));
        assert_eq!(PageSize::default().get(), 6);
    }

    #[test]
    fn parse_accepts_whitespace_and_sign() {
        assert_eq!(PageRequest::raw(" 3 ").parse(), ParsedPage::Number(3));
        assert_eq!(PageRequest::raw("+4").parse(), ParsedPage::Number(4));
        assert_eq!(PageRequest::raw("-2").parse(), ParsedPage::Number(-2));
        assert_eq!(PageRequest::absent().parse(), ParsedPage::Number(1));
    }

    #[test]
    fn parse_rejects_non_integers() {
        for raw in ["abc", "", "  ", "2.0", "1e3", "3a", "+", "--1", "0x10"] {
            assert_eq!(
                PageRequest::raw(raw).parse(),
                ParsedPage::NotAnInteger,
                "raw {raw:?}"
            );
        }
    }

    #[test]
    fn parse_accepts_digit_separators() {
        assert_eq!(PageRequest::raw("1_0").parse(), ParsedPage::Number(10));
        assert_eq!(PageRequest::raw(" +1_000 ").parse(), ParsedPage::Number(1000));
        assert_eq!(PageRequest::raw("-2_5").parse(), ParsedPage::Number(-25));

        for raw in ["_1", "1_", "1__0", "+_1", "_"] {
            assert_eq!(
                PageRequest::raw(raw).parse(),
                ParsedPage::NotAnInteger,
                "raw {raw:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_non_ascii_digits() {
        assert_eq!(PageRequest::raw("\u{0663}").parse(), ParsedPage::NotAnInteger);
    }

    #[test]
    fn separated_digits_resolve_like_plain_digits() {
        let all = records(102);
        let separated = resolve(&all, size(6), &PageRequest::raw("1_0"));
        let plain = resolve(&all, size(6), &PageRequest::number(10));
        assert_eq!(separated, plain);
        assert_eq!(separated.resolution, Resolution::Exact);
    }

    #[test]
    fn parse_saturates_huge_integers() {
        assert_eq!(
            PageRequest::raw("99999999999999999999999").parse(),
            ParsedPage::Number(i64::MAX)
        );
        assert_eq!(
            PageRequest::raw("-99999999999999999999999").parse(),
            ParsedPage::Number(i64::MIN)
        );
    }

    #[test]
    fn total_pages() {
        assert_eq!(PageWindow::total_pages(0, size(6)), 1);
        assert_eq!(PageWindow::total_pages(1, size(6)), 1);
        assert_eq!(PageWindow::total_pages(6, size(6)), 1);
        assert_eq!(PageWindow::total_pages(7, size(6)), 2);
        assert_eq!(PageWindow::total_pages(102, size(6)), 17);
        assert_eq!(PageWindow::total_pages(100, size(10)), 10);
    }

    #[test]
    fn offset_calculation() {
        let w = PageWindow::locate(102, size(6), &PageRequest::number(1));
        assert_eq!(w.offset(), 0);
        assert_eq!(w.limit(), 6);

        let w = PageWindow::locate(102, size(6), &PageRequest::number(3));
        assert_eq!(w.offset(), 12);

        let w = PageWindow::locate(102, size(6), &PageRequest::number(17));
        assert_eq!(w.offset(), 96);
    }

    #[test]
    fn first_page_of_102() {
        let page = resolve(&records(102), size(6), &PageRequest::number(1));

        assert_eq!(page.items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 17);
        assert!(!page.has_previous);
        assert!(page.has_next);
        assert_eq!(page.resolution, Resolution::Exact);
    }

    #[test]
    fn last_page_of_102() {
        let page = resolve(&records(102), size(6), &PageRequest::number(17));

        assert_eq!(page.items, vec![97, 98, 99, 100, 101, 102]);
        assert!(page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn short_last_page() {
        let page = resolve(&records(10), size(4), &PageRequest::number(3));
        assert_eq!(page.items, vec![9, 10]);
        assert_eq!(page.start_index(), 9);
        assert_eq!(page.end_index(), 10);
    }

    #[test]
    fn not_an_integer_serves_first_page() {
        let all = records(102);
        let page = resolve(&all, size(6), &PageRequest::raw("abc"));
        let first = resolve(&all, size(6), &PageRequest::number(1));

        assert_eq!(page.items, first.items);
        assert_eq!(page.number, 1);
        assert_eq!(page.resolution, Resolution::NotAnInteger);
    }

    #[test]
    fn out_of_range_serves_last_page() {
        let all = records(102);
        let page = resolve(&all, size(6), &PageRequest::number(99));
        let last = resolve(&all, size(6), &PageRequest::number(17));

        assert_eq!(page.items, last.items);
        assert_eq!(page.number, 17);
        assert_eq!(page.resolution, Resolution::OutOfRange { requested: 99 });
    }

    #[test]
    fn zero_and_negative_serve_last_page() {
        let all = records(102);
        for raw in ["0", "-1", "-99999999999999999999"] {
            let page = resolve(&all, size(6), &PageRequest::raw(raw));
            assert_eq!(page.number, 17, "raw {raw:?}");
            assert!(matches!(page.resolution, Resolution::OutOfRange { .. }));
        }
    }

    #[test]
    fn absent_is_page_one() {
        let all = records(102);
        let page = resolve(&all, size(6), &PageRequest::absent());
        assert_eq!(page, resolve(&all, size(6), &PageRequest::raw("1")));
    }

    #[test]
    fn empty_collection() {
        let empty: Vec<u32> = Vec::new();
        let page = resolve(&empty, size(6), &PageRequest::number(1));

        assert!(page.items.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.resolution, Resolution::Exact);
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);

        let page = resolve(&empty, size(6), &PageRequest::number(2));
        assert_eq!(page.number, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn neighbour_page_numbers() {
        let all = records(30);
        let page = resolve(&all, size(10), &PageRequest::number(2));
        assert_eq!(page.previous_page_number(), Some(1));
        assert_eq!(page.next_page_number(), Some(3));
        assert!(page.has_other_pages());

        let page = resolve(&all, size(10), &PageRequest::number(1));
        assert_eq!(page.previous_page_number(), None);

        let single = resolve(&records(3), size(10), &PageRequest::absent());
        assert!(!single.has_other_pages());
    }
}
