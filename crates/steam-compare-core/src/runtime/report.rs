// crates/steam-compare-core/src/runtime/report.rs
// ============================================================================
// Module: Steam Compare Report Formatter
// Description: Renders ranked games as newline-joined report lines.
// Purpose: Produce the byte-exact `<game>: ['<owner>', ...]` report text.
// Dependencies: crate::runtime::{caches, ranking}, unicode-general-category
// ============================================================================

//! ## Overview
//! Each ranked game becomes one line: the cached game name, `": "`, and the
//! owners' cached display names rendered as a quoted list literal. Lines are
//! joined with `\n` and the report has no trailing newline.
//!
//! ## Quoting
//! A name is wrapped in single quotes unless it contains a single quote and
//! no double quote, in which case double quotes are used. Backslashes, the
//! chosen quote, and every non-printable character are escaped. Printable
//! means any code point outside the control, format, surrogate, private-use,
//! unassigned, and separator categories, plus the ASCII space. Escapes use
//! `\xNN` below U+0100, `\uNNNN` below U+10000, and `\UNNNNNNNN` above.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use unicode_general_category::GeneralCategory;
use unicode_general_category::get_general_category;

use crate::runtime::caches::LookupError;
use crate::runtime::caches::NameCaches;
use crate::runtime::ranking::RankedGame;

// ============================================================================
// SECTION: Report
// ============================================================================

/// Renders ranked games using names from `caches`.
///
/// # Errors
///
/// Returns [`LookupError`] when a game or owner has no cached name.
pub fn format_report(ranked: &[RankedGame], caches: &NameCaches) -> Result<String, LookupError> {
    let mut lines = Vec::with_capacity(ranked.len());
    for (game_id, owners) in ranked {
        let game_name = caches.game_name(game_id)?;
        let owner_names = owners
            .iter()
            .map(|owner| caches.user_name(owner))
            .collect::<Result<Vec<&str>, LookupError>>()?;
        lines.push(format!("{game_name}: {}", render_name_list(&owner_names)));
    }
    Ok(lines.join("\n"))
}

// ============================================================================
// SECTION: List Literal
// ============================================================================

/// Renders names as `['a', 'b']`: quoted, comma-space separated, bracketed.
#[must_use]
pub fn render_name_list(names: &[&str]) -> String {
    let mut out = String::from("[");
    for (position, name) in names.iter().enumerate() {
        if position > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, name);
    }
    out.push(']');
    out
}

/// Appends `name` as a quoted string literal.
fn push_quoted(out: &mut String, name: &str) {
    let quote = if name.contains('\'') && !name.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch == quote => {
                out.push('\\');
                out.push(ch);
            }
            ch if !is_printable(ch) => push_code_point_escape(out, ch),
            ch => out.push(ch),
        }
    }
    out.push(quote);
}

/// Appends the shortest `\x`, `\u`, or `\U` escape that holds `ch`.
fn push_code_point_escape(out: &mut String, ch: char) {
    let code = u32::from(ch);
    let _ = if code < 0x100 {
        write!(out, "\\x{code:02x}")
    } else if code < 0x1_0000 {
        write!(out, "\\u{code:04x}")
    } else {
        write!(out, "\\U{code:08x}")
    };
}

/// Returns false for characters a list literal must escape.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}
