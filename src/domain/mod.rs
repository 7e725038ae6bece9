//! Strongly-typed domain structures for the dashboard.

use crate::models::config::PageConfig;

/// A navigable dashboard page, immutable once derived from configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    name: String,
    slug: String,
}

impl Page {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Display name shown in the page title and heading.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route key; empty for the default page.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl From<&PageConfig> for Page {
    fn from(config: &PageConfig) -> Self {
        Self::new(config.name.clone(), config.slug.clone())
    }
}

/// Ordered collection of pages. Slugs are assumed unique but not enforced;
/// lookup takes the first match in configuration order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageSet(Vec<Page>);

impl PageSet {
    /// Build from configuration. An empty list becomes a single default
    /// dashboard page with an empty slug, so the set is never empty.
    pub fn from_configs(configs: &[PageConfig]) -> Self {
        if configs.is_empty() {
            return Self(vec![Page::new("Dashboard", "")]);
        }
        Self(configs.iter().map(Page::from).collect())
    }

    /// First page whose slug matches exactly; an empty slug selects the
    /// first page in configuration order.
    pub fn resolve(&self, slug: &str) -> Option<&Page> {
        if slug.is_empty() {
            return self.0.first();
        }
        self.0.iter().find(|page| page.slug() == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A renderable dashboard content block. Each kind carries its own typed
/// data; no kind is implemented yet, so the type cannot currently be
/// constructed and the registry stays empty.
#[derive(Clone, Debug)]
pub enum Widget {}

impl Widget {
    /// Stable identifier for the widget kind.
    pub fn kind(&self) -> &'static str {
        match *self {}
    }

    /// Render the widget body for inclusion in a page.
    pub fn render(&self) -> String {
        match *self {}
    }
}
