use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};

use gh_followers::{
    FavoritesStore, FileStorage, FollowerPager, FollowerService, GITHUB_API_ENDPOINT,
    GitHubFetcher, PageOutcome, ReqwestHttpClient, RestGitHubFetcher, ServiceEvent, StdResult,
};

/// Command line arguments for the GitHub followers browser
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub REST API endpoint
    #[arg(long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_API_ENDPOINT)]
    endpoint: String,

    /// GitHub API token, requests are anonymous without it
    #[arg(long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Directory where favorites are stored (defaults to the platform data directory)
    #[arg(long, env = "GH_FOLLOWERS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the followers of a user
    Followers {
        /// The GitHub username
        username: String,

        /// Only show followers whose login contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Load every page instead of the first one
        #[arg(short, long)]
        all: bool,
    },

    /// Show the profile of a user
    User {
        /// The GitHub username
        username: String,
    },

    /// Manage favorite users
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesCommand {
    /// List favorite users
    List,

    /// Add a user to the favorites
    Add {
        /// The GitHub username
        username: String,
    },

    /// Remove a user from the favorites
    Remove {
        /// The GitHub username
        username: String,
    },
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let fetcher = build_fetcher(&args)?;
    let store = Arc::new(build_store(&args).await?);
    match &args.command {
        Command::Followers {
            username,
            search,
            all,
        } => list_followers(fetcher, username, search, *all).await,
        Command::User { username } => {
            let (service, events, _) = FollowerService::start(fetcher, store);
            service.fetch_user(username)?;
            drop(service);
            render_events(events).await
        }
        Command::Favorites { command } => run_favorites_command(fetcher, store, command).await,
    }
}

fn build_fetcher(args: &Args) -> StdResult<Arc<dyn GitHubFetcher>> {
    let http_client = ReqwestHttpClient::try_new(args.token.as_deref())?;

    Ok(Arc::new(RestGitHubFetcher::new(
        Arc::new(http_client),
        &args.endpoint,
    )))
}

async fn build_store(args: &Args) -> StdResult<FavoritesStore> {
    let data_dir = match &args.data_dir {
        Some(data_dir) => data_dir.to_owned(),
        None => dirs::data_dir()
            .with_context(|| "No data directory on this platform, use --data-dir")?
            .join("gh-followers"),
    };
    info!("Using data directory {}", data_dir.display());
    let storage = FileStorage::try_new(&data_dir).await?;

    Ok(FavoritesStore::new(Arc::new(storage)))
}

async fn list_followers(
    fetcher: Arc<dyn GitHubFetcher>,
    username: &str,
    search: &str,
    all: bool,
) -> StdResult<()> {
    let mut pager = FollowerPager::try_new(fetcher, username)?;
    let has_no_followers = if all {
        pager.load_all().await?.is_empty()
    } else {
        pager.load().await? == PageOutcome::NoFollowers
    };
    if has_no_followers {
        println!("This user doesn't have any followers. Go follow them!");
        return Ok(());
    }
    for follower in pager.visible_followers(search) {
        println!("{}\t{}", follower.login(), follower.avatar_url());
    }
    if pager.cursor().has_more() {
        println!("... more followers available, use --all to load every page");
    }

    Ok(())
}

async fn run_favorites_command(
    fetcher: Arc<dyn GitHubFetcher>,
    store: Arc<FavoritesStore>,
    command: &FavoritesCommand,
) -> StdResult<()> {
    match command {
        FavoritesCommand::List => {
            for favorite in store.load_all().await? {
                println!("{}\t{}", favorite.login(), favorite.avatar_url());
            }

            Ok(())
        }
        FavoritesCommand::Add { username } => {
            let (service, events, _) = FollowerService::start(fetcher, store);
            service.favorite_user(username)?;
            drop(service);
            render_events(events).await
        }
        FavoritesCommand::Remove { username } => {
            let favorite = store
                .load_all()
                .await?
                .into_iter()
                .find(|favorite| favorite.login() == username);
            let Some(favorite) = favorite else {
                println!("{username} is not in your favorites");
                return Ok(());
            };
            let (service, events, _) = FollowerService::start(fetcher, store);
            service.remove_favorite(&favorite)?;
            drop(service);
            render_events(events).await
        }
    }
}

async fn render_events(
    mut events: tokio::sync::mpsc::UnboundedReceiver<ServiceEvent>,
) -> StdResult<()> {
    while let Some(event) = events.recv().await {
        match event {
            ServiceEvent::FollowersPage { result, .. } => {
                for follower in result? {
                    println!("{}\t{}", follower.login(), follower.avatar_url());
                }
            }
            ServiceEvent::UserProfile(result) => {
                let profile = result?;
                println!("{}", profile.login());
                if let Some(name) = profile.name() {
                    println!("{name}");
                }
                if let Some(location) = profile.location() {
                    println!("{location}");
                }
                println!("{}", profile.bio().unwrap_or("No bio available"));
                println!(
                    "Public repos: {}, Public gists: {}",
                    profile.public_repos(),
                    profile.public_gists()
                );
                println!(
                    "Followers: {}, Following: {}",
                    profile.followers(),
                    profile.following()
                );
                match profile.profile_url() {
                    Ok(url) => println!("{url}"),
                    Err(e) => println!("{e}"),
                }
                println!("{}", profile.member_since());
            }
            ServiceEvent::FavoriteAdded(result) => {
                result?;
                println!("You have successfully favorited this user!");
            }
            ServiceEvent::FavoriteRemoved(result) => {
                result?;
                println!("Removed from your favorites");
            }
        }
    }

    Ok(())
}
