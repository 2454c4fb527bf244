use std::collections::BTreeMap;

pub const GITHUB_USERNAME: &str = "ghostintheshell-192";
pub const FEATURED_TOPICS: [&str; 2] = ["featured", "portfolio"];

/// Manual curation for one repository, keyed by its name in [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOverride {
    pub homepage: Option<String>,
    pub featured: bool,
}

/// Read-only lookup data for a load pass: whose repositories to fetch, which
/// topics qualify a repository, and per-repository overrides.
#[derive(Debug, Clone)]
pub struct Catalog {
    username: String,
    featured_topics: Vec<String>,
    overrides: BTreeMap<String, ProjectOverride>,
}

impl Catalog {
    pub fn new<I, S>(username: impl Into<String>, featured_topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            featured_topics: featured_topics.into_iter().map(Into::into).collect(),
            overrides: BTreeMap::new(),
        }
    }

    /// The catalog the portfolio site ships with.
    pub fn portfolio() -> Self {
        Self::new(GITHUB_USERNAME, FEATURED_TOPICS)
            .with_override(
                "sheet-atlas",
                ProjectOverride {
                    homepage: Some("https://ghostintheshell-192.github.io/sheet-atlas/".to_string()),
                    featured: true,
                },
            )
            .with_override(
                "government-feed",
                ProjectOverride {
                    homepage: None,
                    featured: true,
                },
            )
    }

    pub fn with_override(mut self, name: impl Into<String>, entry: ProjectOverride) -> Self {
        self.overrides.insert(name.into(), entry);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn featured_topics(&self) -> impl Iterator<Item = &str> {
        self.featured_topics.iter().map(String::as_str)
    }

    pub fn override_for(&self, name: &str) -> Option<&ProjectOverride> {
        self.overrides.get(name)
    }
}
