//! Pipe-delimited catalog loading.
//!
//! The first line holds the field names. Every later line is one record,
//! unless it is blank or rejected by the [`LineFilter`]. Fields are looked up
//! by header name, so column order does not matter, and a row that stops
//! early simply leaves its trailing fields empty.

use std::collections::HashMap;
use std::path::Path;

use crate::card::Card;
use crate::error::CatalogError;
use crate::sort::sort_baseline;

/// How data lines that are not real records get recognized and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    /// Skip lines whose trimmed length is at most this many characters.
    MaxIgnoredLength(usize),
    /// Skip rows that split into fewer than this many fields.
    MinFields(usize),
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::MaxIgnoredLength(14)
    }
}

/// Options for turning catalog text into cards.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub line_filter: LineFilter,
    /// Localized word that replaces `Number C`/`Numero S` prefixes in the
    /// baseline name sort.
    pub number_word: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            line_filter: LineFilter::default(),
            number_word: "Number".to_string(),
        }
    }
}

/// One data row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a field, or `""` when the header is absent.
    pub fn get(&self, header: &str) -> &str {
        self.fields.get(header).map(String::as_str).unwrap_or("")
    }
}

/// Split catalog text into header-keyed records, in file order.
///
/// Text with at most one line has no data rows and yields an empty list. A
/// leading byte-order mark is ignored.
pub fn parse_records(text: &str, options: &LoadOptions) -> Vec<Record> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n');
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line
        .split('|')
        .map(|h| h.trim().to_string())
        .collect();

    let body: Vec<&str> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| match options.line_filter {
            LineFilter::MaxIgnoredLength(max) => line.chars().count() > max,
            LineFilter::MinFields(_) => true,
        })
        .collect();
    if body.is_empty() {
        return Vec::new();
    }

    let joined = body.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(joined.as_bytes());

    let mut records = Vec::with_capacity(body.len());
    for result in reader.records() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed catalog row: {e}");
                continue;
            }
        };
        if let LineFilter::MinFields(min) = options.line_filter
            && row.len() < min
        {
            log::debug!("Skipping row with {} of {} fields", row.len(), min);
            continue;
        }
        // Duplicate headers resolve to the last column with that name.
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, h)| (h.clone(), row.get(idx).unwrap_or("").trim().to_string()))
            .collect();
        records.push(Record { fields });
    }
    records
}

/// Build cards from records without sorting them.
pub fn cards_from_records(records: &[Record]) -> Vec<Card> {
    records.iter().map(Card::from_record).collect()
}

/// Load catalog text with default options.
pub fn load_catalog(text: &str) -> Vec<Card> {
    load_catalog_with(text, &LoadOptions::default())
}

/// Load catalog text and apply the baseline name sort.
pub fn load_catalog_with(text: &str, options: &LoadOptions) -> Vec<Card> {
    let records = parse_records(text, options);
    let mut cards = cards_from_records(&records);
    sort_baseline(&mut cards, &options.number_word);
    log::debug!("Loaded {} cards", cards.len());
    cards
}

/// Read a catalog file from disk and load it.
pub fn load_catalog_file(path: &Path, options: &LoadOptions) -> Result<Vec<Card>, CatalogError> {
    let text = read_catalog_text(path)?;
    Ok(load_catalog_with(&text, options))
}

/// Read a catalog file as text.
pub fn read_catalog_text(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_header_only_text_yield_nothing() {
        let opts = LoadOptions::default();
        assert!(parse_records("", &opts).is_empty());
        assert!(parse_records("Name|Type|Rarity", &opts).is_empty());
    }

    #[test]
    fn short_lines_are_skipped_by_default() {
        let text = "Name|Type\nA|Monster\nLong Card Name|Monster (Effect)\n";
        let records = parse_records(text, &LoadOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Name"), "Long Card Name");
    }

    #[test]
    fn min_fields_filter_keeps_short_rows() {
        let opts = LoadOptions {
            line_filter: LineFilter::MinFields(2),
            ..LoadOptions::default()
        };
        let text = "Name|Type\nA|Monster\n----\n";
        let records = parse_records(text, &opts);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Type"), "Monster");
    }

    #[test]
    fn missing_headers_read_as_empty() {
        let record = Record::from_pairs([("Name", "X")]);
        assert_eq!(record.get("Name"), "X");
        assert_eq!(record.get("Rarity"), "");
    }
}
