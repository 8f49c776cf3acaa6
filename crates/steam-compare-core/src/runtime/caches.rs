// crates/steam-compare-core/src/runtime/caches.rs
// ============================================================================
// Module: Steam Compare Name Caches
// Description: Per-run display-name caches for users and games.
// Purpose: Resolve identifiers to names when rendering the report.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The two caches deliberately use different update policies:
//! - [`UserNameCache`] is last-write-wins: a later library for the same user
//!   replaces the stored display name.
//! - [`GameNameCache`] is first-write-wins: the earliest observed name for a
//!   game is kept for the rest of the run.
//!
//! Caches are owned by one [`crate::LibraryComparison`] and live for one run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use thiserror::Error;

use crate::core::GameId;
use crate::core::UserId;
use crate::core::UserLibrary;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A display name was requested for an identifier that was never cached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No display name cached for the user.
    #[error("no cached display name for user {0}")]
    UnknownUser(UserId),
    /// No display name cached for the game.
    #[error("no cached name for game {0}")]
    UnknownGame(GameId),
}

// ============================================================================
// SECTION: User Names
// ============================================================================

/// Last-write-wins cache from user id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserNameCache {
    /// Cached names keyed by user id.
    names: HashMap<UserId, String>,
}

impl UserNameCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `name` for `user_id`, returning the replaced value if any.
    pub fn record(&mut self, user_id: UserId, name: impl Into<String>) -> Option<String> {
        self.names.insert(user_id, name.into())
    }

    /// Returns the cached display name for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownUser`] when nothing was cached.
    pub fn get(&self, user_id: &UserId) -> Result<&str, LookupError> {
        self.names
            .get(user_id)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownUser(user_id.clone()))
    }

    /// Returns the number of cached users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when no users are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ============================================================================
// SECTION: Game Names
// ============================================================================

/// First-write-wins cache from game id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameNameCache {
    /// Cached names keyed by game id.
    names: HashMap<GameId, String>,
}

impl GameNameCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `name` unless `game_id` is already cached; returns true when stored.
    pub fn record(&mut self, game_id: &GameId, name: &str) -> bool {
        if self.names.contains_key(game_id) {
            return false;
        }
        self.names.insert(game_id.clone(), name.to_string());
        true
    }

    /// Returns the cached display name for `game_id`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownGame`] when nothing was cached.
    pub fn get(&self, game_id: &GameId) -> Result<&str, LookupError> {
        self.names
            .get(game_id)
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownGame(game_id.clone()))
    }

    /// Returns the number of cached games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when no games are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ============================================================================
// SECTION: Combined Caches
// ============================================================================

/// User and game name caches for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCaches {
    /// User display names.
    pub users: UserNameCache,
    /// Game display names.
    pub games: GameNameCache,
}

impl NameCaches {
    /// Creates empty caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the user name and every not-yet-seen game name of `library`.
    pub fn register(&mut self, library: &UserLibrary) {
        self.users.record(library.user_id().clone(), library.display_name());
        for (game_id, entry) in library.games() {
            self.games.record(game_id, &entry.name);
        }
    }

    /// Resolves a user display name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownUser`] when the user was never registered.
    pub fn user_name(&self, user_id: &UserId) -> Result<&str, LookupError> {
        self.users.get(user_id)
    }

    /// Resolves a game display name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownGame`] when the game was never registered.
    pub fn game_name(&self, game_id: &GameId) -> Result<&str, LookupError> {
        self.games.get(game_id)
    }
}
