//! `walrus check` command implementation.

use std::path::PathBuf;

use clap::Args;
use walrus_config::CliSettings;
use walrus_site::Site;
use walrus_storage::{ContentSource, StorageError};

use super::{content_source, load_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Configuration file or URL (default: auto-discover walrus.json).
    #[arg(short, long)]
    config: Option<String>,

    /// Serve article files from this directory instead of over HTTP.
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Fetch every article and report the ones that fail.
    #[arg(long)]
    fetch: bool,
}

/// An article whose text could not be fetched.
#[derive(Debug)]
struct Missing {
    path: String,
    error: StorageError,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(self.config.as_deref(), &CliSettings::default())?;
        let source = content_source(self.root.as_deref(), &config);
        let site = Site::new(config);

        output.highlight(&site.config().title);
        output.separator();
        for (path, title) in routes(&site) {
            output.route(&path, &title);
        }
        output.separator();

        if !self.fetch {
            output.success("Configuration is valid");
            return Ok(());
        }

        let missing = fetch_articles(&site, source.as_ref());
        for item in &missing {
            output.warning(&format!("{}: {}", item.path, item.error));
        }
        if missing.is_empty() {
            output.success("All articles fetched");
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} article(s) could not be fetched",
                missing.len()
            )))
        }
    }
}

/// Every page path in the site with its title, index first.
fn routes(site: &Site) -> Vec<(String, String)> {
    let mut routes = vec![(String::from("/"), site.config().title.clone())];
    for subject in &site.config().subjects {
        routes.push((format!("/{}", subject.slug), subject.title.clone()));
        for article in &subject.articles {
            routes.push((
                format!("/{}/{}", subject.slug, article.slug),
                article.title.clone(),
            ));
        }
    }
    routes
}

fn fetch_articles(site: &Site, source: &dyn ContentSource) -> Vec<Missing> {
    site.articles()
        .filter_map(|entry| {
            let url = site.config().article_url(entry.article);
            tracing::info!(%url, "checking article");
            source.fetch(&url).err().map(|error| Missing {
                path: format!("{}/{}", entry.subject.slug, entry.article.slug),
                error,
            })
        })
        .collect()
}
