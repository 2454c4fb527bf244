use std::path::PathBuf;

use clap::Parser;
use projects_portfolio::{
	catalog::Catalog,
	config::Settings,
	container::{ContainerError, MemoryContainer, PageDocument, CONTAINER_ID},
	loader::ProjectLoader,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MainError {
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("ReadPage {path}: {source}")]
	ReadPage {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("Container: {source}")]
	Container {
		#[source]
		source: ContainerError,
	},
	#[error("WritePage {path}: {source}")]
	WritePage {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	dotenvy::dotenv().ok();
	let settings = Settings::parse();

	utils_trace::init(&settings.log_level)
		.map_err(|source| MainError::TracingInit { source })?;

	let catalog = Catalog::portfolio();
	let loader = ProjectLoader::new(&catalog, settings.api_base_url.as_str());

	match settings.page {
		Some(path) => {
			let html = tokio::fs::read_to_string(&path)
				.await
				.map_err(|source| MainError::ReadPage { path: path.clone(), source })?;
			let mut page = PageDocument::parse(html, CONTAINER_ID)
				.map_err(|source| MainError::Container { source })?;

			let outcome = loader.run(&mut page).await;

			let html = page
				.into_html()
				.map_err(|source| MainError::Container { source })?;
			tokio::fs::write(&path, html)
				.await
				.map_err(|source| MainError::WritePage { path: path.clone(), source })?;

			info!(?outcome, path = %path.display(), "page updated");
		}
		None => {
			let mut container = MemoryContainer::default();
			loader.run(&mut container).await;
			println!("{}", container.contents());
		}
	}

	Ok(())
}
