//! docsearch - search the documentation corpus from the terminal.
//!
//! # Usage
//!
//! ```bash
//! docsearch "button"
//! docsearch "button" --category components --type ts --page-size 10 --page 2
//! docsearch --url "/search?search=date%20picker" --json
//! docsearch --interactive
//! ```

mod output;
mod session;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docsearch_core::config::Config;
use docsearch_core::corpus::CorpusLoader;
use docsearch_core::layout::Density;
use docsearch_core::{route, FacetKind, QueryController, SearchIndex};
use docsearch_text::TantivyIndex;

/// Faceted full-text search over the generated documentation corpus.
#[derive(Parser)]
#[command(name = "docsearch", version, about)]
struct Cli {
    /// Search text
    query: Option<String>,

    /// Only show these categories (repeatable; default: all)
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Also show documents of these types (repeatable)
    #[arg(long = "type", value_name = "NAME")]
    types: Vec<String>,

    /// Results per page: 5, 10 or 20 (default from config)
    #[arg(long)]
    page_size: Option<usize>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Take the search text from a page URL's `search` parameter
    #[arg(long)]
    url: Option<String>,

    /// Corpus file or directory (default from config)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Include facet counts
    #[arg(long)]
    facets: bool,

    /// Viewport width in pixels; narrow widths get compact output
    #[arg(long, default_value_t = 1024)]
    viewport_width: u32,

    /// Read queries and facet commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::load()?;
    let settings = config.settings()?;
    let corpus_path = match &cli.corpus {
        Some(path) => path.clone(),
        None => config.corpus_path()?,
    };

    let documents = CorpusLoader::new().load(&corpus_path)?;
    let index = TantivyIndex::build(&documents, &settings.search)?;

    let initial_text = match (&cli.query, &cli.url) {
        (Some(query), _) => Some(query.clone()),
        (None, Some(url)) => route::initial_query(url)?,
        (None, None) => None,
    };
    info!(query = ?initial_text, corpus = %corpus_path.display(), "Starting search");

    let mut controller =
        QueryController::new(index, settings.filter_state(), settings.page_size()?).with_initial_text(initial_text)?;
    apply_facet_flags(&mut controller, &cli)?;
    if cli.page_size.is_some() || cli.page != 1 {
        let size = cli.page_size.unwrap_or_else(|| controller.page_view().page_size().get());
        controller.on_page_change(size, cli.page)?;
    }

    let density = Density::for_width(cli.viewport_width);
    if cli.interactive {
        return session::run(&mut controller, density, cli.facets);
    }

    if controller.query_state().searchable_text().is_none() {
        eprintln!("No search text provided. Use --help for usage information.");
        std::process::exit(1);
    }
    let rendered = if cli.json {
        output::format_json(&controller, cli.facets)?
    } else {
        output::format_human(&controller, density, cli.facets)
    };
    println!("{}", rendered);
    Ok(())
}

fn apply_facet_flags<I: SearchIndex>(controller: &mut QueryController<I>, cli: &Cli) -> Result<()> {
    if !cli.categories.is_empty() {
        let categories = controller.filter_state().group(FacetKind::Category).clone();
        for name in &cli.categories {
            if categories.is_on(name).is_none() {
                bail!("unknown category '{}'", name);
            }
        }
        for (name, _) in categories.flags() {
            controller.on_facet_toggle(FacetKind::Category, name, cli.categories.iter().any(|c| c == name))?;
        }
    }
    for name in &cli.types {
        controller.on_facet_toggle(FacetKind::Type, name, true)?;
    }
    Ok(())
}
