use std::sync::Arc;

use anyhow::anyhow;
use log::{debug, info};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{
    FavoritesStore, Follower, GitHubFetcher, NetworkError, PersistenceError, StdResult,
    UserProfile,
};

/// A command sent by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCommand {
    /// Fetch one page of a user's followers.
    FetchFollowers { username: String, page: u32 },

    /// Fetch a user's profile.
    FetchUser { username: String },

    /// Add a follower to the favorites.
    AddFavorite(Follower),

    /// Remove a follower from the favorites.
    RemoveFavorite(Follower),

    /// Fetch a user's profile, then add it to the favorites.
    FavoriteUser { username: String },
}

/// A result delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    /// A page of followers was fetched, or failed to.
    FollowersPage {
        username: String,
        page: u32,
        result: Result<Vec<Follower>, NetworkError>,
    },

    /// A profile was fetched, or failed to.
    UserProfile(Result<UserProfile, NetworkError>),

    /// A favorite was added, or failed to.
    FavoriteAdded(Result<(), PersistenceError>),

    /// A favorite was removed, or failed to.
    FavoriteRemoved(Result<(), PersistenceError>),
}

/// Processes commands one at a time and reports each result as an event.
pub struct ServiceWorker {
    fetcher: Arc<dyn GitHubFetcher>,
    store: Arc<FavoritesStore>,
    commands: UnboundedReceiver<ServiceCommand>,
    events: UnboundedSender<ServiceEvent>,
}

impl ServiceWorker {
    /// Creates a new `ServiceWorker` instance.
    pub fn new(
        fetcher: Arc<dyn GitHubFetcher>,
        store: Arc<FavoritesStore>,
        commands: UnboundedReceiver<ServiceCommand>,
        events: UnboundedSender<ServiceEvent>,
    ) -> Self {
        Self {
            fetcher,
            store,
            commands,
            events,
        }
    }

    /// Runs until every command sender is dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            debug!("Processing command: {command:?}");
            let event = self.process(command).await;
            if self.events.send(event).is_err() {
                debug!("Event receiver dropped, discarding result");
            }
        }
        info!("Follower service stopped");
    }

    async fn process(&self, command: ServiceCommand) -> ServiceEvent {
        match command {
            ServiceCommand::FetchFollowers { username, page } => {
                let result = self.fetcher.fetch_followers(&username, page).await;
                ServiceEvent::FollowersPage {
                    username,
                    page,
                    result,
                }
            }
            ServiceCommand::FetchUser { username } => {
                ServiceEvent::UserProfile(self.fetcher.fetch_user(&username).await)
            }
            ServiceCommand::AddFavorite(follower) => {
                ServiceEvent::FavoriteAdded(self.store.add(&follower).await)
            }
            ServiceCommand::RemoveFavorite(follower) => {
                ServiceEvent::FavoriteRemoved(self.store.remove(&follower).await)
            }
            ServiceCommand::FavoriteUser { username } => {
                match self.fetcher.fetch_user(&username).await {
                    Ok(profile) => {
                        ServiceEvent::FavoriteAdded(self.store.add(&profile.as_follower()).await)
                    }
                    Err(e) => ServiceEvent::UserProfile(Err(e)),
                }
            }
        }
    }
}

/// A handle for sending commands to a running `ServiceWorker`.
#[derive(Clone)]
pub struct FollowerService {
    commands: UnboundedSender<ServiceCommand>,
}

impl FollowerService {
    /// Spawns a worker and returns a handle, the event receiver and the worker task.
    pub fn start(
        fetcher: Arc<dyn GitHubFetcher>,
        store: Arc<FavoritesStore>,
    ) -> (Self, UnboundedReceiver<ServiceEvent>, JoinHandle<()>) {
        let (commands_sender, commands_receiver) = mpsc::unbounded_channel();
        let (events_sender, events_receiver) = mpsc::unbounded_channel();
        let worker = ServiceWorker::new(fetcher, store, commands_receiver, events_sender);
        let handle = tokio::spawn(worker.run());

        (
            Self {
                commands: commands_sender,
            },
            events_receiver,
            handle,
        )
    }

    /// Sends a command to the worker.
    pub fn send(&self, command: ServiceCommand) -> StdResult<()> {
        self.commands
            .send(command)
            .map_err(|_| anyhow!("Follower service worker has stopped"))
    }

    /// Requests one page of a user's followers.
    pub fn fetch_followers(&self, username: &str, page: u32) -> StdResult<()> {
        self.send(ServiceCommand::FetchFollowers {
            username: username.to_string(),
            page,
        })
    }

    /// Requests a user's profile.
    pub fn fetch_user(&self, username: &str) -> StdResult<()> {
        self.send(ServiceCommand::FetchUser {
            username: username.to_string(),
        })
    }

    /// Requests a follower be added to the favorites.
    pub fn add_favorite(&self, follower: &Follower) -> StdResult<()> {
        self.send(ServiceCommand::AddFavorite(follower.to_owned()))
    }

    /// Requests a follower be removed from the favorites.
    pub fn remove_favorite(&self, follower: &Follower) -> StdResult<()> {
        self.send(ServiceCommand::RemoveFavorite(follower.to_owned()))
    }

    /// Requests a user be looked up and added to the favorites.
    pub fn favorite_user(&self, username: &str) -> StdResult<()> {
        self.send(ServiceCommand::FavoriteUser {
            username: username.to_string(),
        })
    }
}
