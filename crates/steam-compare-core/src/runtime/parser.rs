// crates/steam-compare-core/src/runtime/parser.rs
// ============================================================================
// Module: Steam Compare Library Parser
// Description: Converts library documents into per-user library records.
// Purpose: Extract identity and owned games with permissive leaf handling.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! The parser reads a `gamesList` document:
//!
//! ```text
//! <gamesList>
//!   <steamID64>...</steamID64>
//!   <steamID>...</steamID>
//!   <games>
//!     <game><appID/><name/><hoursOnRecord/>...</game>
//!   </games>
//! </gamesList>
//! ```
//!
//! ## Invariants
//! - Missing leaf tags degrade to empty strings; they never fail the parse.
//! - A missing `games` container fails with [`ParseError`].
//! - Parsing is pure: name caches are fed by the caller, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::GameEntry;
use crate::core::GameId;
use crate::core::UserId;
use crate::core::UserLibrary;
use crate::interfaces::TaggedNode;
use crate::runtime::document::XmlDocument;

// ============================================================================
// SECTION: Tag Names
// ============================================================================

/// Tag carrying the numeric user id.
pub const STEAM_ID64_TAG: &str = "steamID64";
/// Tag carrying the user's display name.
pub const STEAM_ID_TAG: &str = "steamID";
/// Container tag holding every game entry.
pub const GAMES_TAG: &str = "games";
/// Per-game item tag.
pub const GAME_TAG: &str = "game";
/// Game identity tag.
pub const APP_ID_TAG: &str = "appID";
/// Game display name tag.
pub const NAME_TAG: &str = "name";
/// Hours-played tag.
pub const HOURS_TAG: &str = "hoursOnRecord";
/// Tag the platform uses to report private or unknown profiles.
pub const ERROR_TAG: &str = "error";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing a library document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not a well-formed tagged-element tree.
    #[error("malformed document: {0}")]
    Malformed(String),
    /// A required structural element is absent.
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),
    /// The platform answered with an error document instead of a library.
    #[error("profile error: {0}")]
    Profile(String),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses raw library document text into a [`UserLibrary`].
///
/// # Errors
///
/// Returns [`ParseError`] when the text is malformed or has no games container.
pub fn parse_library(raw: &str) -> Result<UserLibrary, ParseError> {
    let document = XmlDocument::parse(raw)?;
    read_library(&document.root())
}

/// Builds a [`UserLibrary`] from an already-parsed document root.
///
/// # Errors
///
/// Returns [`ParseError`] when the games container cannot be located.
pub fn read_library<N: TaggedNode>(root: &N) -> Result<UserLibrary, ParseError> {
    let user_id = UserId::new(root.first_text(STEAM_ID64_TAG).unwrap_or_default());
    let display_name = root.first_text(STEAM_ID_TAG).unwrap_or_default();
    let Some(container) = root.descendant(GAMES_TAG) else {
        return Err(missing_games(root));
    };
    let games = container.descendants_named(GAME_TAG).into_iter().map(|game| read_game(&game));
    Ok(UserLibrary::from_games(user_id, display_name, games))
}

/// Extracts one game entry; absent leaves become empty strings.
fn read_game<N: TaggedNode>(game: &N) -> (GameId, GameEntry) {
    let game_id = GameId::new(game.first_text(APP_ID_TAG).unwrap_or_default());
    let name = game.first_text(NAME_TAG).unwrap_or_default();
    let hours = game.first_text(HOURS_TAG).unwrap_or_default();
    (game_id, GameEntry::new(name, hours))
}

/// Classifies a document without a games container.
fn missing_games<N: TaggedNode>(root: &N) -> ParseError {
    if root.tag_name() == ERROR_TAG {
        return ParseError::Profile(root.text().unwrap_or_default().trim().to_string());
    }
    match root.first_text(ERROR_TAG) {
        Some(message) => ParseError::Profile(message.trim().to_string()),
        None => ParseError::MissingElement(GAMES_TAG),
    }
}
