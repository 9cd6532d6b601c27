//! Shorten command

use colored::Colorize;

use crate::client::LinkApi;
use crate::console::SubmissionWorkflow;
use crate::interfaces::cli::CliError;

pub async fn shorten_url(api: &dyn LinkApi, url: String) -> Result<(), CliError> {
    let mut workflow = SubmissionWorkflow::new();
    workflow.set_input(url);

    workflow.submit(api).await?;

    if let Some(text) = workflow.result_text() {
        println!("{} {}", "✓".bold().green(), text.cyan());
    }
    Ok(())
}
