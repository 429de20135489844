use std::process::ExitCode;

use chrono::NaiveDate;
use hoalog_core::site_config::SiteConfig;
use hoalog_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(config: &SiteConfig) -> ExitCode {
    let source = match config.data_path() {
        Some(path) => path.display().to_string(),
        None => "bundled timeline".to_string(),
    };

    match EventStore::from_config(config) {
        Ok(store) => {
            println!("{} {} ({})", "✓".green(), source, summary(&store));
            for (event_type, count) in store.counts_by_type() {
                println!("   {} {}", event_type.render(), count);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red(), source);
            eprintln!("   {}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn summary(store: &EventStore) -> String {
    let count = match store.len() {
        1 => "1 event".to_string(),
        n => format!("{n} events"),
    };

    match span(store) {
        Some((first, last)) => format!(
            "{count}, {} to {}",
            first.format("%d.%m.%Y"),
            last.format("%d.%m.%Y")
        ),
        None => count,
    }
}

/// Earliest and latest event date.
fn span(store: &EventStore) -> Option<(NaiveDate, NaiveDate)> {
    let dates = store.events().iter().map(|e| e.date.naive());
    let first = dates.clone().min()?;
    let last = dates.max()?;
    Some((first, last))
}
