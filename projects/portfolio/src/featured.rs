use std::cmp::Ordering;

use interfaces_github_repos::models::Repository;
use tracing::debug;

use crate::catalog::Catalog;

/// A repository selected for the page, with its override already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedProject {
    pub repository: Repository,
    homepage: Option<String>,
}

impl FeaturedProject {
    fn merge(repository: Repository, catalog: &Catalog) -> Self {
        let homepage = catalog
            .override_for(&repository.name)
            .and_then(|entry| entry.homepage.as_deref())
            .filter(|url| !url.is_empty())
            .or_else(|| repository.homepage())
            .map(str::to_owned);

        Self {
            repository,
            homepage,
        }
    }

    /// Link target for "Site": the override homepage, else the repository's.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }
}

/// Overridden as featured, or tagged with one of the catalog's topics.
pub fn is_featured(catalog: &Catalog, repository: &Repository) -> bool {
    let overridden = catalog
        .override_for(&repository.name)
        .is_some_and(|entry| entry.featured);

    overridden || catalog.featured_topics().any(|topic| repository.has_topic(topic))
}

/// Keeps the featured repositories and orders them for display.
pub fn select_featured(catalog: &Catalog, repositories: Vec<Repository>) -> Vec<FeaturedProject> {
    let mut projects: Vec<FeaturedProject> = repositories
        .into_iter()
        .filter(|repository| {
            let keep = is_featured(catalog, repository);
            debug!(name = %repository.name, keep, "featured filter");
            keep
        })
        .map(|repository| FeaturedProject::merge(repository, catalog))
        .collect();

    sort_projects(&mut projects);
    projects
}

/// Most stars first, then most recently updated. `sort_by` is stable, so
/// full ties keep API order.
pub fn sort_projects(projects: &mut [FeaturedProject]) {
    projects.sort_by(|a, b| display_order(&a.repository, &b.repository));
}

pub fn display_order(a: &Repository, b: &Repository) -> Ordering {
    b.stargazers_count
        .cmp(&a.stargazers_count)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectOverride;
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, stars: u64, day: u32, topics: &[&str]) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            homepage: None,
            language: None,
            stargazers_count: stars,
            updated_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            html_url: format!("https://github.com/u/{name}"),
        }
    }

    fn names(projects: &[FeaturedProject]) -> Vec<&str> {
        projects.iter().map(|p| p.repository.name.as_str()).collect()
    }

    #[test]
    fn keeps_exactly_override_featured_and_topic_tagged() {
        let catalog = Catalog::new("u", ["featured", "portfolio"])
            .with_override("curated", ProjectOverride { homepage: None, featured: true })
            .with_override("hidden", ProjectOverride { homepage: None, featured: false });

        let repos = vec![
            repo("curated", 0, 1, &[]),
            repo("hidden", 0, 1, &[]),
            repo("tagged", 0, 1, &["portfolio"]),
            repo("other-topic", 0, 1, &["rust"]),
            repo("plain", 0, 1, &[]),
            repo("hidden-but-tagged", 0, 1, &["featured"]),
        ];

        let selected = select_featured(&catalog, repos);
        let mut kept = names(&selected);
        kept.sort();

        assert_eq!(kept, vec!["curated", "hidden-but-tagged", "tagged"]);
    }

    #[test]
    fn matching_both_rules_is_kept_once() {
        let catalog = Catalog::new("u", ["featured"])
            .with_override("both", ProjectOverride { homepage: None, featured: true });

        let selected = select_featured(&catalog, vec![repo("both", 1, 1, &["featured"])]);

        assert_eq!(names(&selected), vec!["both"]);
    }

    #[test]
    fn orders_by_stars_then_recency() {
        let catalog = Catalog::new("u", ["featured"]);
        let repos = vec![
            repo("old-zero", 0, 1, &["featured"]),
            repo("new-zero", 0, 20, &["featured"]),
            repo("five", 5, 2, &["featured"]),
            repo("one-old", 1, 3, &["featured"]),
            repo("one-new", 1, 9, &["featured"]),
        ];

        let selected = select_featured(&catalog, repos);

        assert_eq!(
            names(&selected),
            vec!["five", "one-new", "one-old", "new-zero", "old-zero"]
        );
    }

    #[test]
    fn full_ties_keep_input_order() {
        let catalog = Catalog::new("u", ["featured"]);
        let repos = vec![
            repo("first", 2, 5, &["featured"]),
            repo("second", 2, 5, &["featured"]),
            repo("third", 2, 5, &["featured"]),
        ];

        let selected = select_featured(&catalog, repos);

        assert_eq!(names(&selected), vec!["first", "second", "third"]);
    }

    #[test]
    fn override_homepage_wins_over_api_homepage() {
        let catalog = Catalog::portfolio();
        let mut atlas = repo("sheet-atlas", 0, 1, &[]);
        atlas.homepage = Some("https://example.com/elsewhere".to_string());

        let selected = select_featured(&catalog, vec![atlas]);

        assert_eq!(
            selected[0].homepage(),
            Some("https://ghostintheshell-192.github.io/sheet-atlas/")
        );
    }

    #[test]
    fn falls_back_to_api_homepage_and_drops_empty_one() {
        let catalog = Catalog::portfolio();
        let mut feed = repo("government-feed", 0, 1, &[]);
        feed.homepage = Some("https://feed.example.org".to_string());
        let mut tagged = repo("tagged", 0, 1, &["featured"]);
        tagged.homepage = Some(String::new());

        let selected = select_featured(&catalog, vec![feed, tagged]);

        assert_eq!(selected[0].homepage(), Some("https://feed.example.org"));
        assert_eq!(selected[1].homepage(), None);
    }

    #[test]
    fn nothing_featured_yields_empty_selection() {
        let catalog = Catalog::portfolio();
        let repos = vec![repo("a", 10, 1, &["rust"]), repo("b", 0, 2, &[])];

        assert!(select_featured(&catalog, repos).is_empty());
    }
}
