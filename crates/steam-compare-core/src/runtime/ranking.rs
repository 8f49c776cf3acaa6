// crates/steam-compare-core/src/runtime/ranking.rs
// ============================================================================
// Module: Steam Compare Ranking
// Description: Singleton filtering and owner-count ordering of the index.
// Purpose: Select shared games and order them most-owned first.
// Dependencies: crate::core, crate::runtime::comparator
// ============================================================================

//! ## Overview
//! Both operations are pure. Sorting is stable: games with equal owner counts
//! keep the first-seen order produced by the comparator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::GameId;
use crate::core::UserId;
use crate::runtime::comparator::OwnershipIndex;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A game with its owners, as emitted by the ranker.
pub type RankedGame = (GameId, Vec<UserId>);

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Keeps only games with more than one owner, preserving order.
#[must_use]
pub fn remove_single_owners(index: OwnershipIndex) -> OwnershipIndex {
    index.into_entries().into_iter().filter(|(_, owners)| owners.len() > 1).collect()
}

/// Orders games by owner count, highest first; ties keep index order.
#[must_use]
pub fn sort_by_owner_count_descending(index: OwnershipIndex) -> Vec<RankedGame> {
    let mut entries = index.into_entries();
    entries.sort_by(|left, right| right.1.len().cmp(&left.1.len()));
    entries
}

/// Removes single-owner games, then sorts the remainder.
#[must_use]
pub fn rank(index: OwnershipIndex) -> Vec<RankedGame> {
    sort_by_owner_count_descending(remove_single_owners(index))
}
