// crates/steam-compare-cli/tests/common/mod.rs
// ============================================================================
// Module: CLI Test Support
// Description: Shared fixtures for CLI integration tests.
// Purpose: Build library documents and in-memory sources.
// ============================================================================

//! Shared CLI test helpers.

use std::collections::HashMap;
use std::fmt::Write;

use steam_compare_core::FetchError;
use steam_compare_core::LibrarySource;
use steam_compare_core::Locator;

/// Renders a `gamesList` document; each game is `(app_id, name)`.
pub fn library_xml(user_id: &str, display_name: &str, games: &[(&str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<gamesList>\n");
    let _ = writeln!(xml, "\t<steamID64>{user_id}</steamID64>");
    let _ = writeln!(xml, "\t<steamID><![CDATA[{display_name}]]></steamID>");
    xml.push_str("\t<games>\n");
    for (app_id, name) in games {
        let _ = writeln!(
            xml,
            "\t\t<game><appID>{app_id}</appID><name><![CDATA[{name}]]></name><hoursOnRecord>1.5</hoursOnRecord></game>"
        );
    }
    xml.push_str("\t</games>\n</gamesList>\n");
    xml
}

/// Three libraries keyed by the raw id each is requested under.
pub fn three_users() -> Vec<(&'static str, String)> {
    vec![
        (
            "76561198000000001",
            library_xml("76561198000000001", "Alice", &[("10", "Halo"), ("20", "Portal"), ("30", "Doom")]),
        ),
        ("bob", library_xml("76561198000000002", "O'Neil", &[("20", "Portal 2 Title"), ("10", "Halo")])),
        ("76561198000000003", library_xml("76561198000000003", "Carol", &[("10", "Halo")])),
    ]
}

/// Report expected for [`three_users`] compared in declaration order.
pub const THREE_USER_REPORT: &str =
    "Halo: ['Alice', \"O'Neil\", 'Carol']\nPortal: ['Alice', \"O'Neil\"]";

/// In-memory source keyed by raw locator id.
#[derive(Default)]
pub struct MapSource {
    /// Documents keyed by locator id.
    documents: HashMap<String, String>,
}

impl MapSource {
    /// Builds a source from `(id, document)` pairs.
    pub fn from_pairs(pairs: Vec<(&str, String)>) -> Self {
        Self {
            documents: pairs.into_iter().map(|(id, doc)| (id.to_string(), doc)).collect(),
        }
    }
}

impl LibrarySource for MapSource {
    fn fetch(&self, locator: &Locator) -> Result<String, FetchError> {
        self.documents.get(&locator.id).cloned().ok_or_else(|| FetchError::NotFound(locator.id.clone()))
    }
}
