// Basearch - GitHub repository browser core
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::Context;
use basearch_core::api::client::{ClientConfig, GithubClient};
use basearch_core::data::{PullRequestRepositoryImpl, RepoRepositoryImpl};
use basearch_core::domain::usecases::{GetReposUseCase, ListPullRequestsUseCase};
use basearch_core::presentation::{PullRequestListViewModel, RepoListViewModel, ViewState};
use basearch_core::storage::Database;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basearch-cli")]
#[command(about = "Basearch CLI - browse GitHub repositories from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List Kotlin repositories, most starred first
    Repos {
        /// Fetch from the API instead of the local cache
        #[arg(short, long)]
        force_sync: bool,
        /// Cache database path
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// List pull requests of a repository
    Pulls {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = GithubClient::with_config(ClientConfig::from_env()).context("Invalid client configuration")?;

    match cli.command {
        Commands::Repos { force_sync, db } => {
            let path = db.unwrap_or_else(Database::get_default_path);
            let db = Database::new(&path)
                .await
                .with_context(|| format!("Failed to open cache at {}", path.display()))?;

            let repository = Arc::new(RepoRepositoryImpl::new(client, db));
            let view_model = RepoListViewModel::new(Arc::new(GetReposUseCase::new(repository)));

            let states = view_model.subscribe();
            let handle = view_model.load_repos(force_sync);
            print_states(states, |repo| {
                format!("{:>7} ★  {}  {}", repo.stargazers_count, repo.full_name, repo.html_url)
            })
            .await?;
            handle.await?;
        }
        Commands::Pulls { owner, repo } => {
            let repository = Arc::new(PullRequestRepositoryImpl::new(client));
            let view_model = PullRequestListViewModel::new(Arc::new(ListPullRequestsUseCase::new(repository)));

            let states = view_model.subscribe();
            let handle = view_model.load_pull_request_list(&owner, &repo);
            print_states(states, |pull| {
                format!("#{:<6} {}  ({}, {})", pull.number, pull.title, pull.user.login, pull.state)
            })
            .await?;
            handle.await?;
        }
    }

    Ok(())
}

/// Print states until the terminal one
async fn print_states<T, F>(mut states: broadcast::Receiver<ViewState<T>>, line: F) -> anyhow::Result<()>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    loop {
        match states.recv().await? {
            ViewState::Loading => println!("Loading..."),
            ViewState::Empty => {
                println!("Nothing to show");
                return Ok(());
            }
            ViewState::Success { data } => {
                for item in &data {
                    println!("{}", line(item));
                }
                return Ok(());
            }
            ViewState::Error { message, status } => {
                anyhow::bail!("{} ({:?})", message, status);
            }
        }
    }
}
