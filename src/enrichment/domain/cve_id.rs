use crate::shared::error::CrawlError;
use crate::shared::Result;

/// Maximum length for identifiers (security limit)
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// NewType wrapper for a vulnerability identifier (e.g. `CVE-2014-3596`)
///
/// The identifier is the merge key across runs and is embedded into source
/// URLs, so construction rejects anything that could alter a URL path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CveId(String);

impl CveId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let raw: String = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(invalid(&raw, "identifier cannot be empty"));
        }

        if trimmed.len() > MAX_IDENTIFIER_LENGTH {
            return Err(invalid(
                &raw,
                &format!(
                    "identifier is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_IDENTIFIER_LENGTH
                ),
            ));
        }

        // Security: the identifier becomes a URL path segment
        if let Some(c) = trimmed
            .chars()
            .find(|c| matches!(c, '/' | '\\' | '?' | '#' | '@') || c.is_whitespace())
        {
            return Err(invalid(&raw, &format!("contains '{}'", c)));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(value: &str, reason: &str) -> anyhow::Error {
    CrawlError::InvalidIdentifier {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl std::fmt::Display for CveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
