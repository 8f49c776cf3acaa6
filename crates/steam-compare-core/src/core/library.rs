// crates/steam-compare-core/src/core/library.rs
// ============================================================================
// Module: Steam Compare Library Records
// Description: Parsed per-user game library records.
// Purpose: Hold one user's identity and owned games in document order.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`UserLibrary`] is built once from a parsed document and is read-only
//! afterwards. Games keep the order in which they first appeared in the source
//! document; a repeated game id replaces the earlier entry in place.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::GameId;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Game Entry
// ============================================================================

/// Metadata for one owned game.
///
/// # Invariants
/// - `hours_on_record` is the raw document text and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Display name of the game (empty when absent).
    pub name: String,
    /// Raw hours-played text (empty when absent).
    pub hours_on_record: String,
}

impl GameEntry {
    /// Creates a game entry from its name and raw hours text.
    #[must_use]
    pub fn new(name: impl Into<String>, hours_on_record: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours_on_record: hours_on_record.into(),
        }
    }
}

// ============================================================================
// SECTION: User Library
// ============================================================================

/// One user's parsed game-ownership record.
///
/// # Invariants
/// - `games` holds each [`GameId`] at most once, in first-seen order.
/// - `positions` maps every key in `games` to its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLibrary {
    /// Identity of the owning user.
    user_id: UserId,
    /// Display name reported by the document.
    display_name: String,
    /// Owned games in document order.
    games: Vec<(GameId, GameEntry)>,
    /// Index of each game id within `games`.
    positions: HashMap<GameId, usize>,
}

impl UserLibrary {
    /// Builds a library from games in document order.
    ///
    /// A repeated game id overwrites the earlier entry but keeps its position.
    #[must_use]
    pub fn from_games<I>(user_id: UserId, display_name: impl Into<String>, games: I) -> Self
    where
        I: IntoIterator<Item = (GameId, GameEntry)>,
    {
        let mut library = Self {
            user_id,
            display_name: display_name.into(),
            games: Vec::new(),
            positions: HashMap::new(),
        };
        for (game_id, entry) in games {
            library.insert(game_id, entry);
        }
        library
    }

    /// Inserts or replaces a game entry.
    fn insert(&mut self, game_id: GameId, entry: GameEntry) {
        if let Some(index) = self.positions.get(&game_id).copied() {
            if let Some(slot) = self.games.get_mut(index) {
                slot.1 = entry;
            }
            return;
        }
        self.positions.insert(game_id.clone(), self.games.len());
        self.games.push((game_id, entry));
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the display name reported by the document.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Iterates owned games in document order.
    pub fn games(&self) -> impl Iterator<Item = (&GameId, &GameEntry)> + '_ {
        self.games.iter().map(|(id, entry)| (id, entry))
    }

    /// Looks up a single game entry.
    #[must_use]
    pub fn game(&self, game_id: &GameId) -> Option<&GameEntry> {
        self.positions.get(game_id).and_then(|index| self.games.get(*index)).map(|(_, entry)| entry)
    }

    /// Returns the number of distinct games in the library.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
