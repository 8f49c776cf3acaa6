// crates/steam-compare-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Support
// Description: Shared fixtures for building library documents and records.
// ============================================================================

//! Shared helpers for core integration tests.

use std::cell::RefCell;
use std::collections::HashMap;

use steam_compare_core::FetchError;
use steam_compare_core::GameEntry;
use steam_compare_core::GameId;
use steam_compare_core::LibrarySource;
use steam_compare_core::Locator;
use steam_compare_core::UserId;
use steam_compare_core::UserLibrary;

/// Renders a `gamesList` document; each game is `(app_id, name, hours)`.
pub fn library_xml(user_id: &str, display_name: &str, games: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    xml.push_str("<gamesList>\n");
    xml.push_str(&format!("\t<steamID64>{user_id}</steamID64>\n"));
    xml.push_str(&format!("\t<steamID><![CDATA[{display_name}]]></steamID>\n"));
    xml.push_str("\t<games>\n");
    for (app_id, name, hours) in games {
        xml.push_str("\t\t<game>\n");
        xml.push_str(&format!("\t\t\t<appID>{app_id}</appID>\n"));
        xml.push_str(&format!("\t\t\t<name><![CDATA[{name}]]></name>\n"));
        if !hours.is_empty() {
            xml.push_str(&format!("\t\t\t<hoursOnRecord>{hours}</hoursOnRecord>\n"));
        }
        xml.push_str("\t\t</game>\n");
    }
    xml.push_str("\t</games>\n</gamesList>\n");
    xml
}

/// Builds a library record directly; each game is `(app_id, name)`.
pub fn library(user_id: &str, display_name: &str, games: &[(&str, &str)]) -> UserLibrary {
    UserLibrary::from_games(
        UserId::new(user_id),
        display_name,
        games.iter().map(|(app_id, name)| (GameId::new(*app_id), GameEntry::new(*name, ""))),
    )
}

/// Shorthand for a list of user ids.
pub fn users(ids: &[&str]) -> Vec<UserId> {
    ids.iter().map(|id| UserId::new(*id)).collect()
}

/// In-memory source keyed by raw locator id; records every request.
#[derive(Default)]
pub struct MapSource {
    /// Documents keyed by locator id.
    pub documents: HashMap<String, String>,
    /// Locators requested, in order.
    pub requests: RefCell<Vec<Locator>>,
}

impl MapSource {
    /// Adds a document for `id`.
    pub fn with(mut self, id: &str, document: String) -> Self {
        self.documents.insert(id.to_string(), document);
        self
    }
}

impl LibrarySource for MapSource {
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(locator.clone());
        self.documents
            .get(&locator.id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(locator.id.clone()))
    }
}
