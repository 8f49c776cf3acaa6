// crates/steam-compare-core/src/runtime/document.rs
// ============================================================================
// Module: Steam Compare XML Document Adapter
// Description: roxmltree-backed implementation of the tagged-node capability.
// Purpose: Parse raw XML once and expose only tag/text lookups to the parser.
// Dependencies: roxmltree
// ============================================================================

//! ## Overview
//! [`XmlDocument`] owns a parsed tree borrowed from the raw input text.
//! [`XmlNode`] implements [`TaggedNode`]; nothing else in the crate touches
//! `roxmltree` types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use roxmltree::Document;
use roxmltree::Node;

use crate::interfaces::TaggedNode;
use crate::runtime::parser::ParseError;

// ============================================================================
// SECTION: Document
// ============================================================================

/// Parsed XML document borrowing its source text.
pub struct XmlDocument<'input> {
    /// Underlying parsed tree.
    document: Document<'input>,
}

impl<'input> XmlDocument<'input> {
    /// Parses raw XML text into a document tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] when the text is not well-formed XML.
    pub fn parse(raw: &'input str) -> Result<Self, ParseError> {
        let document = Document::parse(raw).map_err(|err| ParseError::Malformed(err.to_string()))?;
        Ok(Self {
            document,
        })
    }

    /// Returns the document's root element.
    #[must_use]
    pub fn root(&self) -> XmlNode<'_, 'input> {
        XmlNode {
            node: self.document.root_element(),
        }
    }
}

// ============================================================================
// SECTION: Node
// ============================================================================

/// Element handle within an [`XmlDocument`].
#[derive(Clone, Copy)]
pub struct XmlNode<'a, 'input> {
    /// Underlying tree node (always an element).
    node: Node<'a, 'input>,
}

impl TaggedNode for XmlNode<'_, '_> {
    fn descendant(&self, tag: &str) -> Option<Self> {
        self.node
            .descendants()
            .skip(1)
            .find(|candidate| is_element_named(candidate, tag))
            .map(|node| Self {
                node,
            })
    }

    fn descendants_named(&self, tag: &str) -> Vec<Self> {
        self.node
            .descendants()
            .skip(1)
            .filter(|candidate| is_element_named(candidate, tag))
            .map(|node| Self {
                node,
            })
            .collect()
    }

    fn text(&self) -> Option<String> {
        self.node.text().map(str::to_string)
    }

    fn tag_name(&self) -> &str {
        self.node.tag_name().name()
    }
}

/// Returns true when `node` is an element whose local name is `tag`.
fn is_element_named(node: &Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag
}
