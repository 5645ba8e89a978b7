//! Sibling ordering: directories by name, files in natural order

use std::cmp::Ordering;

use super::entry::Entry;

/// Sort key for natural file ordering.
///
/// A name like `Report10.TXT` splits into the lower-cased base text `report`,
/// the trailing number `10` and the lower-cased extension `.txt`. Names
/// without a trailing number compare as if the number were zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalKey {
    text: String,
    number: DigitRun,
    extension: String,
}

impl NaturalKey {
    pub fn new(name: &str) -> Self {
        let (base, extension) = split_extension(name);
        let text = base.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &base[text.len()..];
        Self {
            text: text.to_lowercase(),
            number: DigitRun::new(digits),
            extension: extension.to_lowercase(),
        }
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text
            .cmp(&other.text)
            .then_with(|| self.number.cmp(&other.number))
            .then_with(|| self.extension.cmp(&other.extension))
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A run of ASCII digits compared by numeric value, without a width limit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DigitRun(String);

impl DigitRun {
    fn new(digits: &str) -> Self {
        Self(digits.trim_start_matches('0').to_string())
    }
}

impl Ord for DigitRun {
    fn cmp(&self, other: &Self) -> Ordering {
        // Leading zeros are stripped, so a longer run is a larger number
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DigitRun {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a file name into base and extension, keeping the dot on the extension.
///
/// Leading dots never start an extension: `.bashrc` has none, while
/// `archive.tar.gz` splits into `archive.tar` and `.gz`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let stripped = name.trim_start_matches('.');
    let leading = name.len() - stripped.len();
    match stripped.rfind('.') {
        Some(dot) => name.split_at(leading + dot),
        None => (name, ""),
    }
}

/// Tie-break key: the whole name split into text and digit runs.
///
/// Text runs are lower-cased and digit runs compare by value, so
/// `file0.txt` sorts before `file.txt` even though both share the
/// [`NaturalKey`] of `file.txt`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SegmentKey(Vec<Segment>);

/// Segments alternate text, digits, text, so equal positions hold equal kinds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Text(String),
    Digits(DigitRun),
}

impl SegmentKey {
    fn new(name: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = name;
        loop {
            let text_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
            segments.push(Segment::Text(rest[..text_len].to_lowercase()));
            rest = &rest[text_len..];
            if rest.is_empty() {
                break;
            }
            let after = rest.trim_start_matches(|c: char| c.is_ascii_digit());
            segments.push(Segment::Digits(DigitRun::new(&rest[..rest.len() - after.len()])));
            rest = after;
        }
        Self(segments)
    }
}

/// Full ordering key for a file name: natural key, then segment key, then
/// the raw name.
fn file_key(name: &str) -> (NaturalKey, SegmentKey, String) {
    (NaturalKey::new(name), SegmentKey::new(name), name.to_string())
}

/// Compare two file names in natural order.
///
/// Names with equal natural keys fall back to a comparison of all their
/// digit runs, then to the raw names.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    file_key(a).cmp(&file_key(b))
}

/// Order one directory's children: directories by name, then files naturally.
pub fn order_entries(entries: Vec<Entry>) -> Vec<Entry> {
    let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) =
        entries.into_iter().partition(|entry| entry.is_dir);

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by_cached_key(|entry| file_key(&entry.name));

    dirs.extend(files);
    dirs
}
