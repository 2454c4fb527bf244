use interfaces_github_repos::index::{fetch_user_repos, FetchUserReposError};
use thiserror::Error;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::container::Container;
use crate::featured::select_featured;
use crate::render::{ProjectRenderer, RenderProjectsError, LOAD_FAILED_MESSAGE, NO_PROJECTS_MESSAGE};

/// How a load pass ended. Each is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { count: usize },
    Empty,
    Failed,
}

#[derive(Debug, Error)]
pub enum LoadProjectsError {
    #[error("FetchUserRepos: {source}")]
    Fetch {
        #[from]
        source: FetchUserReposError,
    },

    #[error("RenderProjects: {source}")]
    Render {
        #[from]
        source: RenderProjectsError,
    },
}

impl LoadProjectsError {
    /// Which step failed: "fetch" (transport or HTTP status), "parse", or "render".
    pub fn kind(&self) -> &'static str {
        match self {
            LoadProjectsError::Fetch { source } if source.is_parse_error() => "parse",
            LoadProjectsError::Fetch { .. } => "fetch",
            LoadProjectsError::Render { .. } => "render",
        }
    }
}

enum Loaded {
    Projects { markup: String, count: usize },
    Nothing,
}

/// One fetch → filter → sort → render pass over a [`Catalog`].
pub struct ProjectLoader<'a> {
    catalog: &'a Catalog,
    api_base_url: String,
}

impl<'a> ProjectLoader<'a> {
    pub fn new(catalog: &'a Catalog, api_base_url: impl Into<String>) -> Self {
        Self {
            catalog,
            api_base_url: api_base_url.into(),
        }
    }

    /// Runs the pass and writes its result into `container`. Errors end here:
    /// they are logged and the container gets [`LOAD_FAILED_MESSAGE`].
    pub async fn run<C: Container>(self, container: &mut C) -> LoadOutcome {
        info!(username = self.catalog.username(), "loading projects");

        match self.load().await {
            Ok(Loaded::Projects { markup, count }) => {
                container.replace_contents(&markup);
                info!(count, "rendered featured projects");
                LoadOutcome::Rendered { count }
            }
            Ok(Loaded::Nothing) => {
                container.replace_contents(NO_PROJECTS_MESSAGE);
                info!("no featured projects");
                LoadOutcome::Empty
            }
            Err(err) => {
                error!(error = %err, kind = err.kind(), "Error loading projects");
                container.replace_contents(LOAD_FAILED_MESSAGE);
                LoadOutcome::Failed
            }
        }
    }

    async fn load(&self) -> Result<Loaded, LoadProjectsError> {
        let repositories = fetch_user_repos(&self.api_base_url, self.catalog.username()).await?;
        let fetched = repositories.len();

        let projects = select_featured(self.catalog, repositories);
        info!(fetched, featured = projects.len(), "filtered repositories");

        if projects.is_empty() {
            return Ok(Loaded::Nothing);
        }

        let markup = ProjectRenderer::new()?.render_all(&projects)?;
        Ok(Loaded::Projects {
            markup,
            count: projects.len(),
        })
    }
}
