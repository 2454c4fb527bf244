pub mod name;

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

use crate::featured::FeaturedProject;
pub use name::format_project_name;

pub const NO_PROJECTS_MESSAGE: &str = r#"<p class="no-projects">No featured projects yet.</p>"#;
pub const LOAD_FAILED_MESSAGE: &str =
    r#"<p class="error">Failed to load projects. Please try again later.</p>"#;

const PROJECT_TEMPLATE_NAME: &str = "project";
const PROJECT_TEMPLATE: &str = r#"
<div class="project">
    <h3 class="project-name">{{title}}</h3>
    {{#if description}}<p class="project-description">{{description}}</p>{{/if}}
    <div class="project-meta">
        {{#if language}}<span class="project-language">{{language}}</span>{{/if}}
        {{#if stars}}<span class="project-stars">★ {{stars}}</span>{{/if}}
    </div>
    <div class="project-links">
        {{#if homepage}}<a href="{{homepage}}" target="_blank" rel="noopener noreferrer">Site</a>{{/if}}
        <a href="{{repository_url}}" target="_blank" rel="noopener noreferrer">Repository</a>
    </div>
</div>
"#;

#[derive(Debug, Error)]
pub enum RenderProjectsError {
    #[error("RegisterTemplate: {source}")]
    RegisterTemplate {
        #[from]
        source: handlebars::TemplateError,
    },

    #[error("RenderProject {name}: {source}")]
    RenderProject {
        name: String,
        source: handlebars::RenderError,
    },
}

/// Values handed to the project template. Absent optionals are `null`, which
/// the template's `#if` blocks treat as "omit".
#[derive(Debug, Serialize)]
struct ProjectView<'a> {
    title: String,
    description: Option<&'a str>,
    language: Option<&'a str>,
    stars: Option<u64>,
    homepage: Option<&'a str>,
    repository_url: &'a str,
}

impl<'a> From<&'a FeaturedProject> for ProjectView<'a> {
    fn from(project: &'a FeaturedProject) -> Self {
        let repository = &project.repository;
        Self {
            title: format_project_name(&repository.name),
            description: repository.description(),
            language: repository.language(),
            stars: Some(repository.stargazers_count).filter(|&count| count > 0),
            homepage: project.homepage(),
            repository_url: &repository.html_url,
        }
    }
}

/// Turns featured projects into the markup placed in the page container.
/// Interpolated values are HTML-escaped.
pub struct ProjectRenderer {
    handlebars: Handlebars<'static>,
}

impl ProjectRenderer {
    pub fn new() -> Result<Self, RenderProjectsError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(PROJECT_TEMPLATE_NAME, PROJECT_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    pub fn render_project(&self, project: &FeaturedProject) -> Result<String, RenderProjectsError> {
        self.handlebars
            .render(PROJECT_TEMPLATE_NAME, &ProjectView::from(project))
            .map_err(|source| RenderProjectsError::RenderProject {
                name: project.repository.name.clone(),
                source,
            })
    }

    /// All fragments concatenated in order.
    pub fn render_all(&self, projects: &[FeaturedProject]) -> Result<String, RenderProjectsError> {
        projects
            .iter()
            .map(|project| self.render_project(project))
            .collect()
    }
}
