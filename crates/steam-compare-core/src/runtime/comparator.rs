// crates/steam-compare-core/src/runtime/comparator.rs
// ============================================================================
// Module: Steam Compare Comparator
// Description: Aggregates user libraries into a game-to-owners index.
// Purpose: Record which users own each game, in deterministic order.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! [`compare`] walks libraries in the order supplied and each library's games
//! in document order. The resulting [`OwnershipIndex`] keeps games in
//! first-seen order and owners in library-input order. Owners are appended
//! as-is: supplying the same library twice lists its user twice.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::core::GameId;
use crate::core::UserId;
use crate::core::UserLibrary;

// ============================================================================
// SECTION: Ownership Index
// ============================================================================

/// Insertion-ordered mapping from game id to owning users.
///
/// # Invariants
/// - Each [`GameId`] appears once in `entries`, at the position it was first seen.
/// - `positions` maps every key in `entries` to its index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipIndex {
    /// Games with their owners, in first-seen order.
    entries: Vec<(GameId, Vec<UserId>)>,
    /// Index of each game id within `entries`.
    positions: HashMap<GameId, usize>,
}

impl OwnershipIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `owner` to the owner list of `game_id`, creating the entry if absent.
    pub fn add_owner(&mut self, game_id: &GameId, owner: &UserId) {
        let index = self.entry_index(game_id);
        if let Some((_, owners)) = self.entries.get_mut(index) {
            owners.push(owner.clone());
        }
    }

    /// Sets the owner list for `game_id`, keeping its position if already present.
    pub fn insert(&mut self, game_id: GameId, owners: Vec<UserId>) {
        if let Some(index) = self.positions.get(&game_id).copied() {
            if let Some(slot) = self.entries.get_mut(index) {
                slot.1 = owners;
            }
            return;
        }
        self.positions.insert(game_id.clone(), self.entries.len());
        self.entries.push((game_id, owners));
    }

    /// Returns the owners of `game_id`, if the game is indexed.
    #[must_use]
    pub fn owners(&self, game_id: &GameId) -> Option<&[UserId]> {
        self.positions
            .get(game_id)
            .and_then(|index| self.entries.get(*index))
            .map(|(_, owners)| owners.as_slice())
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&GameId, &[UserId])> + '_ {
        self.entries.iter().map(|(game_id, owners)| (game_id, owners.as_slice()))
    }

    /// Returns the number of indexed games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no games are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the index, returning entries in first-seen order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(GameId, Vec<UserId>)> {
        self.entries
    }

    /// Returns the entry index for `game_id`, creating an empty entry if needed.
    fn entry_index(&mut self, game_id: &GameId) -> usize {
        if let Some(index) = self.positions.get(game_id) {
            return *index;
        }
        let index = self.entries.len();
        self.positions.insert(game_id.clone(), index);
        self.entries.push((game_id.clone(), Vec::new()));
        index
    }
}

impl FromIterator<(GameId, Vec<UserId>)> for OwnershipIndex {
    fn from_iter<I: IntoIterator<Item = (GameId, Vec<UserId>)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (game_id, owners) in iter {
            index.insert(game_id, owners);
        }
        index
    }
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Builds the ownership index for `libraries`.
#[must_use]
pub fn compare(libraries: &[UserLibrary]) -> OwnershipIndex {
    let mut index = OwnershipIndex::new();
    for library in libraries {
        for (game_id, _) in library.games() {
            index.add_owner(game_id, library.user_id());
        }
    }
    index
}
