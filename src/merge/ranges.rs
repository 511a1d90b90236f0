//! Page-range parsing and per-file range lookup.
//!
//! A `--range` flag has the form `FILE=PAGES`. The FILE half is indexed
//! under three keys so a later lookup succeeds however the input file was
//! spelled on the command line: the absolute path, the token exactly as
//! typed, and the bare filename. The PAGES half is a comma-separated list
//! of 1-based page numbers and inclusive `start-end` ranges.
//!
//! Range resolution is tolerant:
//! - Reversed ranges (`9-7`) are normalized to ascending order
//! - Out-of-range bounds are clamped to the document
//! - Segments that fail to parse are skipped silently
//!
//! A range that yields no pages at all is the caller's signal to fall
//! back to every page of the file.
//!
//! # Examples
//!
//! ```
//! use pdfzus::merge::ranges::resolve_page_range;
//!
//! // 1-based input, 0-based output
//! let pages = resolve_page_range("1-3,5", 10);
//! assert_eq!(pages, vec![0, 1, 2, 4]);
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{PdfzusError, Result};

/// One lookup key for a `--range` flag, with its page-range string.
///
/// Every parsed flag produces three entries sharing the same range
/// string, one per key form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    /// Lookup key: absolute path, the token as typed, or the bare filename.
    pub key: String,
    /// The page-range string, e.g. `"1-3,5"`.
    pub range: String,
}

/// Parse a single `FILE=PAGES` token into its three lookup entries.
///
/// The token is split on the first `=`. The FILE half is never checked
/// against the filesystem; the absolute-path key is derived lexically.
///
/// # Errors
///
/// Returns [`PdfzusError::InvalidRangeSpec`] if the token has no `=` or
/// either half is missing, and [`PdfzusError::EmptyRange`] if the PAGES
/// half contains only whitespace.
///
/// # Examples
///
/// ```
/// use pdfzus::merge::ranges::parse_range_spec;
///
/// let entries = parse_range_spec("report.pdf=1-3,5")?;
/// assert_eq!(entries.len(), 3);
/// assert!(entries.iter().all(|e| e.range == "1-3,5"));
/// # Ok::<(), pdfzus::error::PdfzusError>(())
/// ```
pub fn parse_range_spec(token: &str) -> Result<Vec<RangeEntry>> {
    let (file, range) = match token.split_once('=') {
        Some(parts) => parts,
        None => return Err(PdfzusError::invalid_range_spec(token)),
    };

    if file.is_empty() || range.is_empty() {
        return Err(PdfzusError::invalid_range_spec(token));
    }

    if range.trim().is_empty() {
        return Err(PdfzusError::empty_range(token));
    }

    Ok(vec![
        RangeEntry {
            key: path_key(Path::new(file)),
            range: range.to_string(),
        },
        RangeEntry {
            key: file.to_string(),
            range: range.to_string(),
        },
        RangeEntry {
            key: base_name(file),
            range: range.to_string(),
        },
    ])
}

/// Parse all `--range` flag values into a flat entry list.
///
/// Entries keep command-line order, three per flag. Lookup scans this
/// list front to back, so earlier flags win on key collisions.
///
/// # Errors
///
/// Fails on the first malformed token, see [`parse_range_spec`].
pub fn parse_range_specs(tokens: &[String]) -> Result<Vec<RangeEntry>> {
    let mut entries = Vec::with_capacity(tokens.len() * 3);
    for token in tokens {
        entries.extend(parse_range_spec(token)?);
    }
    Ok(entries)
}

/// Resolve a page-range string to ascending, deduplicated 0-based indices.
///
/// The string is split on `,`. Each trimmed segment is either a single
/// 1-based page number, kept only if it lies within the document, or a
/// `start-end` range whose bounds are clamped to `[1, total_pages]` after
/// normalizing the order. Only the first two `-`-separated tokens of a
/// segment count; anything beyond them is ignored. Segments that fail to
/// parse contribute nothing.
///
/// An empty or fully unparsable string resolves to an empty list, never
/// to an error.
///
/// # Examples
///
/// ```
/// use pdfzus::merge::ranges::resolve_page_range;
///
/// assert_eq!(resolve_page_range("3-1", 5), vec![0, 1, 2]);
/// assert_eq!(resolve_page_range("1-100", 5), vec![0, 1, 2, 3, 4]);
/// assert_eq!(resolve_page_range("abc", 5), Vec::<usize>::new());
/// ```
pub fn resolve_page_range(range: &str, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let total = total_pages as i64;
    let mut pages = BTreeSet::new();

    for segment in range.split(',') {
        let segment = segment.trim();

        if segment.contains('-') {
            let mut bounds = segment.split('-');
            let start = bounds.next().and_then(parse_page_number);
            let end = bounds.next().and_then(parse_page_number);

            if let (Some(start), Some(end)) = (start, end) {
                let lower = start.min(end).clamp(1, total);
                let upper = start.max(end).clamp(1, total);
                for page in lower..=upper {
                    pages.insert((page - 1) as usize);
                }
            }
        } else if let Some(page) = parse_page_number(segment)
            && page >= 1
            && page <= total
        {
            pages.insert((page - 1) as usize);
        }
    }

    pages.into_iter().collect()
}

/// Find the page range that applies to one input file.
///
/// The file is looked up under three candidate keys: its absolute path,
/// the path exactly as given on the command line, and its bare filename.
/// The first entry (in flag order) whose key equals any candidate wins.
///
/// When two flags share a bare filename, the earlier flag wins for every
/// file matching by that filename, even if a later flag names the file
/// exactly. Spell ranges with distinct paths to avoid the collision.
pub fn find_range_for_file<'a>(
    entries: &'a [RangeEntry],
    resolved_path: &str,
    raw_token: &str,
) -> Option<&'a str> {
    let base = base_name(raw_token);
    let candidates = [resolved_path, raw_token, base.as_str()];

    entries
        .iter()
        .find(|entry| candidates.contains(&entry.key.as_str()))
        .map(|entry| entry.range.as_str())
}

/// Absolute-path lookup key for a path as spelled.
///
/// Purely lexical: the working directory is prepended to relative paths
/// and no symlinks are followed. Falls back to the path as given if the
/// working directory is unavailable.
pub(crate) fn path_key(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// Bare filename of a path token, or the token itself if it has none.
fn base_name(token: &str) -> String {
    Path::new(token)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| token.to_string())
}

fn parse_page_number(token: &str) -> Option<i64> {
    token.trim().parse().ok()
}
