//! Company-identifier extraction from store hyperlinks.
//!
//! Company pages are linked in three shapes across the store:
//! ```text
//! https://store.example.com/developer/giantssoftware?snr=1_5_9__408
//! https://store.example.com/search/?developer=Playground%20Games&snr=1_5_9__408
//! https://store.example.com/curator/33975870?snr=1_5_9__400
//! ```
//! The first yields `giantssoftware`, the second `Playground%20Games`, the
//! third `curator_33975870`. The three rules are tried in that order and the
//! first match wins, so a link matching several shapes always resolves the
//! same way.

use std::fmt;

use thiserror::Error;

/// Which relationship a company link was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyCategory {
    Developer,
    Publisher,
}

impl CompanyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Publisher => "publisher",
        }
    }

    /// Classify a row label as scraped from the page, e.g. `"Developer:"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().trim_end_matches(':').to_lowercase().as_str() {
            "developer" => Some(Self::Developer),
            "publisher" => Some(Self::Publisher),
            _ => None,
        }
    }
}

impl fmt::Display for CompanyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// None of the three link shapes is present.
    #[error("no recognized company link form: {0}")]
    UnrecognizedForm(String),
    /// A shape matched but the identifier segment was empty.
    #[error("empty company identifier in link: {0}")]
    EmptyIdentifier(String),
}

/// Extract a company identifier from a raw hyperlink.
///
/// The token is returned verbatim (case and URL escapes preserved);
/// lowercasing happens where ids are inserted into entity sets. Callers
/// treat any error as "no identifier, skip this relation".
pub fn parse_company_link(url: &str, category: CompanyCategory) -> Result<String, LinkError> {
    let path_marker = format!("{}/", category.as_str());
    let query_marker = format!("{}=", category.as_str());

    let id = if let Some(rest) = split_after(url, &path_marker) {
        segment_until(rest, '?')
    } else if let Some(rest) = split_after(url, &query_marker) {
        segment_until(rest, '&')
    } else if let Some(rest) = split_after(url, ".com/") {
        // Generic path segment, e.g. curator pages: keep the whole segment
        // but flatten path separators so it stays a single token.
        segment_until(rest, '?').replace('/', "_")
    } else {
        return Err(LinkError::UnrecognizedForm(url.to_string()));
    };

    if id.is_empty() {
        return Err(LinkError::EmptyIdentifier(url.to_string()));
    }
    Ok(id)
}

fn split_after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    haystack
        .find(marker)
        .map(|pos| &haystack[pos + marker.len()..])
}

/// Take the text up to the first `stop` character or whitespace.
fn segment_until(s: &str, stop: char) -> String {
    s.split(|c: char| c == stop || c.is_whitespace())
        .next()
        .unwrap_or("")
        .to_string()
}
