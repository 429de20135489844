use anyhow::{Context, Result};
use hoalog_core::query::{Query, QueryParams};
use hoalog_core::site_config::SiteConfig;
use hoalog_core::store::EventStore;
use hoalog_core::timeline::TimelineLayout;

use crate::render::{Render, render_header};

pub fn run(config: &SiteConfig, params: &QueryParams) -> Result<()> {
    // Validate arguments before touching the data file
    let query = Query::from_params(params)?;
    let store = EventStore::from_config(config).context("Could not load timeline data")?;
    let layout = TimelineLayout::for_query(&store, &query);
    tracing::debug!(shown = layout.len(), total = store.len(), "timeline selected");

    println!("{}", render_header(config, &query));
    println!();
    println!("{}", layout.render());

    Ok(())
}
