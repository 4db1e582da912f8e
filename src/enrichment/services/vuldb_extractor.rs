//! VulDB page extraction
//!
//! VulDB pages carry no stable element IDs. The detail page is read by
//! anchoring on a couple of class names and then splitting the raw markup of
//! the content block on headings and line breaks. This is deliberately kept
//! behind [`VulDbExtractor`] so a stricter tree query can replace it if the
//! markup ever stabilises.

use crate::enrichment::domain::{SourceEndpoints, VulDbRecord};
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{debug, warn};

/// Detail links in the search results start with this prefix
const DETAIL_LINK_PREFIX: &str = "?id.";
/// Cells of the summary table; the second one holds the exploit price
const SUMMARY_CELLS: &str = "table.vultop > tbody > tr > td";
const CONTENT_BLOCK: &str = r#"[class="vuln"]"#;
const SECTION_BOUNDARY: &str = "<h2";
const LINE_BREAK: &str = "<br>";
const LINK_BOUNDARY: &str = "<a href=";
const CPE_MARKER: &str = "cpe:";
const VALUE_SEPARATOR: &str = ": ";
/// Present in a section that still contains the summary table
const SUMMARY_MARKER: &str = "vultop";

/// Reasons a detail page could not be read
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("summary table has no price cell")]
    MissingPriceCell,

    #[error("content block {0} not found")]
    MissingContentBlock(String),

    #[error("no ': ' separator in line '{0}'")]
    MissingSeparator(String),
}

/// Sections of the content block the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Countermeasures,
    Cvss,
    Cpe,
    Other,
}

impl Section {
    /// First matching rule wins
    fn classify(section: &str) -> Self {
        if section.contains("Countermeasures") {
            Section::Countermeasures
        } else if section.to_lowercase().contains("cvss") && !section.contains(SUMMARY_MARKER) {
            Section::Cvss
        } else if section.contains("CPE") {
            Section::Cpe
        } else {
            Section::Other
        }
    }
}

/// Stateless extractor for VulDB search and detail pages
pub struct VulDbExtractor;

impl VulDbExtractor {
    /// Stage 1: finds the detail page link in a search result page
    ///
    /// # Returns
    /// The absolute URL of the first `?id.` link, or `None` when VulDB does
    /// not track the identifier.
    pub fn find_detail_url(
        page: &str,
        endpoints: &SourceEndpoints,
    ) -> Result<Option<String>, ExtractError> {
        let document = Html::parse_document(page);
        let anchors = selector("a[href]")?;

        Ok(document
            .select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| href.starts_with(DETAIL_LINK_PREFIX))
            .map(|href| endpoints.vuldb_detail_url(href)))
    }

    /// Stage 2: extracts the metadata of a detail page
    ///
    /// A page without summary table is valid and yields an empty record.
    ///
    /// # Errors
    /// Returns an [`ExtractError`] when the markup does not have the expected
    /// shape (missing price cell, missing content block, a matched line
    /// without `": "`).
    pub fn extract_detail(page: &str, detail_url: &str) -> Result<VulDbRecord, ExtractError> {
        let document = Html::parse_document(page);
        let mut record = VulDbRecord::empty(detail_url);

        let cells: Vec<_> = document.select(&selector(SUMMARY_CELLS)?).collect();
        if cells.is_empty() {
            debug!(detail_url, "detail page has no summary table");
            return Ok(record);
        }

        let price_cell = cells.get(1).ok_or(ExtractError::MissingPriceCell)?;
        record.price = normalize_text(&price_cell.text().collect::<String>());

        let block = document
            .select(&selector(CONTENT_BLOCK)?)
            .next()
            .ok_or_else(|| ExtractError::MissingContentBlock(CONTENT_BLOCK.to_string()))?;
        let markup = block.inner_html();

        let mut cpes: Vec<String> = Vec::new();
        for section in markup.split(SECTION_BOUNDARY) {
            match Section::classify(section) {
                Section::Countermeasures => {
                    Self::read_countermeasures(section, detail_url, &mut record)?
                }
                Section::Cvss => Self::read_cvss(section, &mut record)?,
                Section::Cpe => cpes.extend(Self::read_cpes(section)),
                Section::Other => {}
            }
        }
        record.cpe_list = cpes.join(" ");

        Ok(record)
    }

    /// Stage 2 without error reporting to the caller.
    ///
    /// Extraction errors are logged and produce the same empty record as a
    /// page that has nothing to offer.
    pub fn extract_detail_or_empty(page: &str, detail_url: &str) -> VulDbRecord {
        Self::extract_detail(page, detail_url).unwrap_or_else(|e| {
            warn!(detail_url, error = %e, "unexpected VulDB detail page markup");
            VulDbRecord::empty(detail_url)
        })
    }

    fn read_countermeasures(
        section: &str,
        detail_url: &str,
        record: &mut VulDbRecord,
    ) -> Result<(), ExtractError> {
        for line in section.split(LINE_BREAK) {
            if line.contains("Recommended") {
                record.recommendation = value_after_separator(line)?.to_string();
            } else if line.contains("Status") {
                record.status = value_after_separator(line)?.to_string();
            } else if line.contains("Upgrade") || line.contains("Patch") {
                let info = value_after_separator(line)?;
                if info.contains("href=") {
                    if let Some(link) = quoted_href(info) {
                        debug!(detail_url, link, "countermeasure links to an upgrade or patch");
                    }
                } else if !info.contains("Patch") {
                    record.recommendation.push_str(&format!(" [{}]", info));
                }
            }
        }
        Ok(())
    }

    fn read_cvss(section: &str, record: &mut VulDbRecord) -> Result<(), ExtractError> {
        for line in section.split(LINE_BREAK) {
            if line.contains("Base Score") {
                record.cvss_base = score_with_vector(line)?;
            } else if line.contains("Temp Score") {
                record.cvss_temp = score_with_vector(line)?;
            }
        }
        Ok(())
    }

    fn read_cpes(section: &str) -> Vec<String> {
        section
            .split(LINK_BOUNDARY)
            .filter_map(|fragment| {
                let start = fragment.find(CPE_MARKER)? + CPE_MARKER.len();
                let rest = &fragment[start..];
                let end = rest.find('<')?;
                Some(format!("{}{}", CPE_MARKER, rest[..end].trim()))
            })
            .collect()
    }
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::InvalidSelector(css.to_string()))
}

/// Collapses runs of whitespace the way rendered text reads
pub(crate) fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed text after the first `": "` of a line
fn value_after_separator(line: &str) -> Result<&str, ExtractError> {
    line.split_once(VALUE_SEPARATOR)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| ExtractError::MissingSeparator(line.trim().to_string()))
}

/// Score followed by its vector, e.g. `7.5 (CVSS2#AV:N/...)`; anything after
/// the first closing parenthesis is dropped
fn score_with_vector(line: &str) -> Result<String, ExtractError> {
    let value = value_after_separator(line)?;
    Ok(match value.find(')') {
        Some(end) => value[..=end].to_string(),
        None => value.to_string(),
    })
}

fn quoted_href(fragment: &str) -> Option<&str> {
    let start = fragment.find("href=\"")? + "href=\"".len();
    let rest = &fragment[start..];
    rest.find('"').map(|end| &rest[..end])
}
