// ── Device import ids ──
//
// Accepted forms: a bare controller id, a MAC, or either of those prefixed
// with `site:`. A colon count of exactly 1 (`site:id`) or 6 (`site:` plus
// a colon-separated MAC) selects the prefixed form.

use crate::model::mac::{clean_mac, is_mac};

/// What an import id refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportTarget {
    /// Controller object id.
    Id(String),
    /// MAC to look up, already cleaned (bare lowercase hex).
    Mac(String),
}

/// A parsed import id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportId {
    /// Explicit site, when the id carried one.
    pub site: Option<String>,
    pub target: ImportTarget,
}

impl ImportId {
    pub fn parse(raw: &str) -> Self {
        let colons = raw.matches(':').count();
        let (site, rest) = match raw.split_once(':') {
            Some((site, rest)) if colons == 1 || colons == 6 => (Some(site.to_owned()), rest),
            _ => (None, raw),
        };

        let target = if is_mac(rest) {
            ImportTarget::Mac(clean_mac(rest))
        } else {
            ImportTarget::Id(rest.to_owned())
        };

        Self { site, target }
    }

    /// The explicit site, or `default_site`.
    pub fn site_or<'a>(&'a self, default_site: &'a str) -> &'a str {
        self.site.as_deref().unwrap_or(default_site)
    }
}
