use serde::{Deserialize, Serialize};

/// One `<url>` record of a sitemap page.
///
/// Only `loc` is produced by providers; the optional fields are for enrichment callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

impl SitemapEntry {
    #[must_use]
    pub fn new(loc: impl Into<String>) -> Self {
        Self { loc: loc.into(), lastmod: None, changefreq: None, priority: None }
    }

    #[must_use]
    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    #[must_use]
    pub const fn with_changefreq(mut self, changefreq: ChangeFrequency) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    /// Sitemap priorities live in `0.0..=1.0`; out-of-range values are clamped.
    #[must_use]
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority.clamp(0.0, 1.0));
        self
    }
}

/// Hint about how often the page at `loc` changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

/// One `<sitemap>` record of the sitemap index: where a page of a provider lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub loc: String,
}

/// Page count of one provider subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypePages {
    /// Subtype name; empty for providers without subtypes.
    pub name: String,
    pub pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loc_is_serialized_by_default() {
        let entry = SitemapEntry::new("https://example.org/hello-world/");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"loc":"https://example.org/hello-world/"}"#);
    }

    #[test]
    fn enrichment_fields_are_serialized_when_present() {
        let entry = SitemapEntry::new("https://example.org/")
            .with_lastmod("2024-01-02T03:04:05+00:00")
            .with_changefreq(ChangeFrequency::Weekly)
            .with_priority(1.5);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["changefreq"], "weekly");
        assert_eq!(json["priority"], 1.0);
        assert_eq!(json["lastmod"], "2024-01-02T03:04:05+00:00");
    }
}
