use std::{process::ExitCode, sync::Arc, time::Duration};

use clap::Parser;
use log::{debug, info};
use tokio::sync::watch;

use github_repos::{
    FetchState, FetchStateController, GITHUB_API_ENDPOINT, GithubRestFetcher, ReqwestTransport,
    StdResult,
};

/// Command line arguments for the GitHub repositories viewer
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub user whose public repositories are listed
    #[arg(env = "GITHUB_USERNAME")]
    username: String,

    /// GitHub REST API endpoint
    #[arg(short, long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_API_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds, none by default
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Print the repositories as JSON instead of a list
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> StdResult<ExitCode> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");
    info!("Starting repositories fetch for user '{}'", args.username);

    let controller = build_controller(&args)?;
    let view = tokio::spawn(render_states(
        args.username.clone(),
        args.json,
        controller.subscribe(),
    ));
    controller.fetch_repositories(&args.username).await;
    let final_state = controller.state();
    drop(controller);
    view.await??;

    Ok(exit_code(final_state.error_message()))
}

/// The error itself is already rendered by the view.
fn exit_code(error_message: Option<&str>) -> ExitCode {
    match error_message {
        Some(_) => ExitCode::FAILURE,
        None => ExitCode::SUCCESS,
    }
}

fn build_controller(args: &Args) -> StdResult<FetchStateController> {
    let transport = Arc::new(ReqwestTransport::try_new(
        args.timeout_secs.map(Duration::from_secs),
    )?);
    let fetcher = Arc::new(GithubRestFetcher::new(transport, &args.endpoint));

    Ok(FetchStateController::new(fetcher))
}

/// Renders every published state until the controller is dropped.
async fn render_states(
    username: String,
    json: bool,
    mut receiver: watch::Receiver<FetchState>,
) -> StdResult<()> {
    if !json {
        println!("{username}\n\nRepositories\n");
    }
    while receiver.changed().await.is_ok() {
        let state = receiver.borrow_and_update().clone();
        render_state(&state, json)?;
    }

    Ok(())
}

fn render_state(state: &FetchState, json: bool) -> StdResult<()> {
    if state.is_loading() {
        eprintln!("Loading...");
        return Ok(());
    }
    if let Some(message) = state.error_message() {
        eprintln!("Error: {message}");
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(state.results())?);
        return Ok(());
    }
    for repository in state.results() {
        println!("{}", repository.name());
        if let Some(description) = repository.description() {
            println!("    {description}");
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_reflects_final_error() {
        assert_eq!(ExitCode::SUCCESS, exit_code(None));
        assert_eq!(ExitCode::FAILURE, exit_code(Some("The request timed out.")));
    }
}
