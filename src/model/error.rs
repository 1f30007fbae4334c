use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Failures of a request to the GitHub API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// The username can't be turned into a request
    #[error("This username created an invalid request. Please try again.")]
    InvalidUsername,
    /// The request never got a response
    #[error("Unable to complete your request. Please check your internet connection.")]
    UnableToComplete,
    /// The server answered with something else than a success
    #[error("Invalid response from the server. Please try again.")]
    InvalidResponse,
    /// The response body couldn't be read or decoded
    #[error("The data received from the server was invalid. Please try again.")]
    InvalidData,
}

/// Failures of the favorites store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceError {
    /// The login is already in the favorites
    #[error("You've already favorited this user. You must REALLY like them!")]
    AlreadyInFavorites,
    /// The updated favorites couldn't be saved
    #[error("There was an error favoriting this user. Please try again.")]
    UnableToFavorite,
    /// The updated favorites couldn't be saved after a removal
    #[error("There was an error removing this user from favorites. Please try again.")]
    UnableToRemove,
    /// The stored favorites couldn't be decoded
    #[error("The favorites stored on this device are invalid.")]
    InvalidData,
}

/// Failures when using a fetched profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The profile link can't be opened
    #[error("The url attached to this user was invalid: {0}")]
    InvalidUrl(String),
}
