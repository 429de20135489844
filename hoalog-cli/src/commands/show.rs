use std::process::ExitCode;

use anyhow::{Context, Result};
use hoalog_core::site_config::SiteConfig;
use hoalog_core::store::{EventStore, Lookup};

use crate::render::{Render, render_not_found};

pub fn run(config: &SiteConfig, id: &str) -> Result<ExitCode> {
    let store = EventStore::from_config(config).context("Could not load timeline data")?;

    match store.lookup(id) {
        Lookup::Found(event) => {
            println!("{}", event.render());
            Ok(ExitCode::SUCCESS)
        }
        Lookup::NotFound => {
            tracing::debug!(id, events = store.len(), "no such event");
            eprintln!("{}", render_not_found(id));
            Ok(ExitCode::FAILURE)
        }
    }
}
