//! Smart playlist decoder
//!
//! Reads a `.dspl` file, parses it with `roxmltree`, and extracts the
//! playlist fields in a single pass.

use super::types::{DecodeResult, DecoderConfig, SmartPlaylist, ROOT_ELEMENT};
use crate::error::{Error, Result};
use crate::types::{Limit, LimitType, Rule};
use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Decoder for smart playlist definition files
#[derive(Debug, Clone, Default)]
pub struct SmartPlaylistDecoder {
    config: DecoderConfig,
}

impl SmartPlaylistDecoder {
    /// Create a decoder expecting the `.dspl` extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom config
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Check whether `path` carries the configured extension (case-insensitive)
    pub fn matches_extension(&self, path: &Path) -> bool {
        has_extension(path, &self.config.extension)
    }

    /// Decode a playlist file, folding every failure into `success = false`.
    ///
    /// An extension mismatch returns the default result without touching the
    /// filesystem or logging. Any other failure is logged at error level.
    pub fn decode(&self, path: impl AsRef<Path>) -> DecodeResult {
        let path = path.as_ref();

        if !self.matches_extension(path) {
            return DecodeResult::default();
        }

        let outcome = self.read_playlist(path);
        match &outcome {
            Ok(playlist) => debug!(
                "Decoded smart playlist '{}' with {} rule(s)",
                path.display(),
                playlist.rules.len()
            ),
            Err(e) => error!(
                "Could not decode smart playlist '{}'. Exception: {}",
                path.display(),
                e
            ),
        }

        DecodeResult::from_outcome(outcome)
    }

    /// Decode a playlist file, returning the specific failure
    pub fn try_decode(&self, path: impl AsRef<Path>) -> Result<SmartPlaylist> {
        let path = path.as_ref();

        if !self.matches_extension(path) {
            return Err(Error::unsupported_extension(
                path.display().to_string(),
                &self.config.extension,
            ));
        }

        self.read_playlist(path)
    }

    /// Decode a playlist from an in-memory XML document
    pub fn decode_str(&self, xml: &str) -> Result<SmartPlaylist> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let root = doc.root_element();

        if !is_named(root, ROOT_ELEMENT) {
            let tag = root.tag_name();
            let found = match tag.namespace() {
                Some(ns) => format!("{{{ns}}}{}", tag.name()),
                None => tag.name().to_string(),
            };
            return Err(Error::unexpected_root(ROOT_ELEMENT, found));
        }

        let name = child_text(root, "name");
        let match_mode = child_text(root, "match");
        let order = child_text(root, "order");
        let limit = parse_limit(root);
        let rules = parse_rules(root)?;

        Ok(SmartPlaylist {
            name,
            match_mode,
            order,
            limit,
            rules,
        })
    }

    fn read_playlist(&self, path: &Path) -> Result<SmartPlaylist> {
        let bytes = fs::read(path)?;
        let content = decode_text(&bytes)?;
        self.decode_str(&content)
    }
}

// ============================================================================
// Extraction Helpers
// ============================================================================

/// Compare the final path component's extension, dot included
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rfind('.').map(|pos| name[pos..].to_lowercase()))
        .is_some_and(|ext| ext == extension.to_lowercase())
}

/// Decode raw file bytes into text.
///
/// A BOM (UTF-8 or UTF-16) wins; otherwise the `encoding` of the XML
/// declaration is honoured, and UTF-8 is assumed when neither is present.
fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (declared_encoding(bytes).unwrap_or(UTF_8), bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| Error::encoding(encoding.name()))
}

/// Encoding label from an ASCII-compatible `<?xml ... encoding="..."?>`
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = bytes.strip_prefix(b"<?xml")?;
    let end = head.iter().position(|&b| b == b'>')?;
    let decl = std::str::from_utf8(&head[..end]).ok()?;

    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let label = &rest[1..][..rest[1..].find(quote)?];

    Encoding::for_label(label.as_bytes())
}

/// Element with local name `name` and no namespace
fn is_named(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace().is_none()
}

/// Direct child elements of `parent` named `name`, in document order
fn children_named<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    parent
        .children()
        .filter(move |n| is_named(*n, name))
}

/// Concatenated text of all descendant text nodes
fn element_text(node: Node) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

/// Text of the first child named `name`, or empty
fn child_text(parent: Node, name: &str) -> String {
    children_named(parent, name)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Read the `<limit>` element.
///
/// The `type` attribute drives both the unit lookup and the numeric value, so
/// a usable limit always resolves to `Songs`. Anything unparseable falls back
/// to `Limit(Songs, 0)`.
fn parse_limit(root: Node) -> Limit {
    let Some(type_attr) = children_named(root, "limit")
        .next()
        .and_then(|n| n.attribute("type"))
        .filter(|t| !t.is_empty())
    else {
        return Limit::default();
    };

    // ASCII whitespace only, as .NET integer parsing does
    match type_attr
        .trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '))
        .parse::<i32>()
    {
        Ok(value) => Limit::new(LimitType::from_unit(type_attr), value),
        Err(_) => Limit::default(),
    }
}

fn parse_rules(root: Node) -> Result<Vec<Rule>> {
    let elements: Vec<Node> = children_named(root, "rule").collect();

    if elements.is_empty() {
        return Err(Error::NoRules);
    }

    elements
        .into_iter()
        .map(|el| -> Result<Rule> {
            let field = required_attribute(el, "field")?;
            let operator = required_attribute(el, "operator")?;
            Ok(Rule::new(field, operator, element_text(el)))
        })
        .collect()
}

fn required_attribute<'a>(node: Node<'a, '_>, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| Error::missing_attribute(node.tag_name().name(), attribute))
}
