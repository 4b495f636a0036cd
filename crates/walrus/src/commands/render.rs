//! `walrus render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use walrus_config::{CliSettings, Protocol};
use walrus_reader::{HtmlView, MemoryHistory, Outcome, Reader};
use walrus_site::Site;

use super::{content_source, load_config, preferences};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page URL to open, e.g. `http://example.com/notes/Algebra/Groups`.
    url: String,

    /// Configuration file or URL (default: auto-discover walrus.json).
    #[arg(short, long)]
    config: Option<String>,

    /// Serve article files from this directory instead of over HTTP.
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding persisted preferences.
    #[arg(long, env = "WALRUS_STATE_DIR")]
    state: Option<PathBuf>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// URL scheme: http or https (overrides config).
    #[arg(long)]
    protocol: Option<Protocol>,

    /// Resolve in-app links to full page loads (overrides config).
    #[arg(long)]
    reload: Option<bool>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            base_url: self.base_url,
            protocol: self.protocol,
            reload: self.reload,
        };
        let config = load_config(self.config.as_deref(), &settings)?;
        output.info(&format!("Site: {} ({})", config.title, config.page_url("")));
        let source = content_source(self.root.as_deref(), &config);
        let prefs = preferences(self.state.as_deref())?;

        let view = HtmlView::new(&config);
        let mut reader = Reader::new(
            Site::new(config),
            source,
            prefs,
            view,
            MemoryHistory::starting_at(&self.url),
        );

        match reader.navigate(&self.url) {
            Outcome::NotFound => output.warning(&format!("No page at {}", self.url)),
            Outcome::LoadFailed(kind) => {
                output.warning(&format!("Article text could not be loaded: {kind:?}"));
            }
            outcome => tracing::info!(?outcome, "rendered"),
        }

        let document = reader.view().render();
        match self.output {
            Some(path) => {
                std::fs::write(&path, document)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(document.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
