//! Red Hat advisory and Bugzilla tracker extraction

use super::vuldb_extractor::{normalize_text, ExtractError};
use scraper::{Html, Selector};

/// Tracker links on the advisory page contain this marker
const TRACKER_MARKER: &str = "bugzilla";
const BUG_STATUS_ID: &str = "static_bug_status";
const FIXED_IN_ID: &str = "field_container_cf_fixed_in";

/// Bug status and "fixed in" text read from a tracker page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerFields {
    pub bug_status: String,
    pub fixed_in: String,
}

/// Stateless extractor for Red Hat advisory and Bugzilla pages
pub struct RedHatExtractor;

impl RedHatExtractor {
    /// Stage 1: first link on the advisory page pointing at Bugzilla
    pub fn find_tracker_url(page: &str) -> Result<Option<String>, ExtractError> {
        let document = Html::parse_document(page);
        let anchors = parse_selector("a[href]")?;

        Ok(document
            .select(&anchors)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| href.contains(TRACKER_MARKER))
            .map(|href| href.trim().to_string()))
    }

    /// Stage 2: reads bug status and "fixed in" text from a tracker page
    ///
    /// # Errors
    /// Returns [`ExtractError::MissingContentBlock`] when either element is
    /// absent.
    pub fn extract_tracker(page: &str) -> Result<TrackerFields, ExtractError> {
        let document = Html::parse_document(page);
        Ok(TrackerFields {
            bug_status: element_text(&document, BUG_STATUS_ID)?,
            fixed_in: element_text(&document, FIXED_IN_ID)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::InvalidSelector(css.to_string()))
}

fn element_text(document: &Html, id: &str) -> Result<String, ExtractError> {
    let css = format!("#{}", id);
    let element = document
        .select(&parse_selector(&css)?)
        .next()
        .ok_or(ExtractError::MissingContentBlock(css))?;
    Ok(normalize_text(&element.text().collect::<String>()))
}
