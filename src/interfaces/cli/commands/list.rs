//! List links command

use colored::Colorize;

use crate::client::LinkApi;
use crate::config::get_config;
use crate::console::FetchController;
use crate::directory::{DirectoryStore, DirectoryView, FilterUpdate, SortField};
use crate::interfaces::cli::CliError;

pub async fn list_links(
    api: &dyn LinkApi,
    short: Option<String>,
    dest: Option<String>,
    sort: SortField,
    descending: bool,
) -> Result<(), CliError> {
    let mut store = DirectoryStore::new();
    store.set_filter(FilterUpdate {
        short_url: short,
        destination: dest,
    });
    if store.sort().field != sort {
        store.set_sort(sort);
    }
    if descending {
        // selecting the active column again flips it
        store.set_sort(sort);
    }

    let mut fetch = FetchController::new();
    fetch.load_all(api, &mut store).await;
    if let Some(message) = fetch.error_message() {
        return Err(CliError::CommandError(format!("Error: {}", message)));
    }

    if store.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    let derived = store.derive();
    if derived.is_empty() {
        println!("{} No links match the current filters", "ℹ".bold().blue());
        return Ok(());
    }

    let view = DirectoryView::project(&derived, store.sort(), get_config().ui.destination_width);
    for line in format_table(&view) {
        println!("{}", line);
    }
    println!();
    println!(
        "{} Showing {} of {} short links",
        "ℹ".bold().blue(),
        derived.len().to_string().green(),
        store.len().to_string().green()
    );
    Ok(())
}

/// Lay out the projected view as aligned text lines (header first).
pub fn format_table(view: &DirectoryView) -> Vec<String> {
    let titles: Vec<String> = view.headers.iter().map(|h| h.title()).collect();

    let short_w = column_width(&titles[0], view.rows.iter().map(|r| r.short_url.as_str()));
    let dest_w = column_width(&titles[1], view.rows.iter().map(|r| r.destination.as_str()));
    let clicks_w = column_width(&titles[2], view.rows.iter().map(|r| r.clicks.as_str()));

    let mut lines = Vec::with_capacity(view.rows.len() + 1);
    let header = format!(
        "{:<short_w$}  {:<dest_w$}  {:>clicks_w$}",
        titles[0], titles[1], titles[2]
    );
    lines.push(header.bold().yellow().to_string());

    for row in &view.rows {
        lines.push(format!(
            "{}  {}  {}",
            pad_right(&row.short_url, short_w).cyan(),
            pad_right(&row.destination, dest_w).blue(),
            pad_left(&row.clicks, clicks_w).green()
        ));
    }
    lines
}

fn column_width<'a>(title: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad_right(value: &str, width: usize) -> String {
    format!("{:<width$}", value)
}

fn pad_left(value: &str, width: usize) -> String {
    format!("{:>width$}", value)
}
