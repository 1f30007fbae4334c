use std::sync::Arc;

use log::{error, info};

use crate::{FavoritesStorage, Follower, PersistenceError};

/// The key under which the favorites list is stored.
pub const FAVORITES_KEY: &str = "gh-followers.favorites";

/// An ordered list of favorite users, unique by login.
///
/// The whole list is read and rewritten on every change. The store doesn't lock:
/// concurrent `add`/`remove` calls must be serialized by the caller.
pub struct FavoritesStore {
    storage: Arc<dyn FavoritesStorage>,
}

impl FavoritesStore {
    /// Creates a new `FavoritesStore` over the given storage.
    pub fn new(storage: Arc<dyn FavoritesStorage>) -> Self {
        Self { storage }
    }

    /// Loads every favorite in insertion order.
    pub async fn load_all(&self) -> Result<Vec<Follower>, PersistenceError> {
        let data = self.storage.read(FAVORITES_KEY).await.map_err(|e| {
            error!("Failed to read favorites: {e}");
            PersistenceError::InvalidData
        })?;
        match data {
            None => Ok(vec![]),
            Some(data) => serde_json::from_slice(&data).map_err(|e| {
                error!("Failed to decode favorites: {e}");
                PersistenceError::InvalidData
            }),
        }
    }

    /// Checks whether a login is among the favorites.
    pub async fn contains(&self, login: &str) -> Result<bool, PersistenceError> {
        Ok(self
            .load_all()
            .await?
            .iter()
            .any(|favorite| favorite.login() == login))
    }

    /// Appends a follower to the favorites.
    pub async fn add(&self, follower: &Follower) -> Result<(), PersistenceError> {
        let mut favorites = self.load_all().await?;
        if favorites.contains(follower) {
            info!("Already in favorites: {follower}");
            return Err(PersistenceError::AlreadyInFavorites);
        }
        favorites.push(follower.to_owned());
        self.save(&favorites, PersistenceError::UnableToFavorite)
            .await?;
        info!("Added to favorites: {follower}");

        Ok(())
    }

    /// Removes a follower from the favorites, doing nothing if it isn't one.
    pub async fn remove(&self, follower: &Follower) -> Result<(), PersistenceError> {
        let mut favorites = self.load_all().await?;
        let total_favorites = favorites.len();
        favorites.retain(|favorite| favorite != follower);
        if favorites.len() == total_favorites {
            info!("Not in favorites: {follower}");
            return Ok(());
        }
        self.save(&favorites, PersistenceError::UnableToRemove)
            .await?;
        info!("Removed from favorites: {follower}");

        Ok(())
    }

    async fn save(
        &self,
        favorites: &[Follower],
        failure: PersistenceError,
    ) -> Result<(), PersistenceError> {
        let data = serde_json::to_vec(favorites).map_err(|e| {
            error!("Failed to encode favorites: {e}");
            failure
        })?;

        self.storage
            .write(FAVORITES_KEY, &data)
            .await
            .map_err(|e| {
                error!("Failed to write favorites: {e}");
                failure
            })
    }
}
