//! Loading message catalogs from `.properties` text.
//!
//! Grammar, per line:
//! ```text
//! line    = blank | comment | entry
//! comment = WS* ("#" | "!") REST_OF_LINE
//! entry   = WS* key WS* ("=" | ":") WS* template
//! key     = (any char except whitespace, "=", ":")+
//! ```
//!
//! Trailing whitespace of a template is dropped. A key that appears twice
//! keeps its last template.

use std::path::Path;
use std::sync::OnceLock;

use rovers_core::{Catalog, CatalogError};
use winnow::ascii::{space0, till_line_ending};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};
use winnow::ModalResult;

/// Resource name of the catalog shipped with this crate.
pub const CATALOG_NAME: &str = "ExceptionCodes.properties";

const BUNDLED: &str = include_str!("../resources/ExceptionCodes.properties");

fn key<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '=' && c != ':').parse_next(input)
}

fn entry<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    space0.parse_next(input)?;
    let k = key.parse_next(input)?;
    space0.parse_next(input)?;
    one_of(['=', ':']).parse_next(input)?;
    space0.parse_next(input)?;
    let template = till_line_ending.parse_next(input)?;
    Ok((k, template.trim_end()))
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!')
}

/// Parse catalog text.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] for the first line that is neither
/// blank, a comment, nor a `key=template` entry.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    for (index, line) in text.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let (k, template) = entry.parse(line).map_err(|_| CatalogError::Malformed {
            line: index + 1,
            content: line.to_string(),
        })?;
        catalog.insert(k, template);
    }
    Ok(catalog)
}

/// Read and parse the catalog file at `path`.
///
/// The file is read completely before parsing starts.
///
/// # Errors
///
/// [`CatalogError::MissingResource`] if the file cannot be read, otherwise
/// see [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::MissingResource {
        name: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let catalog = parse_catalog(&text)?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded message catalog");
    Ok(catalog)
}

/// The catalog shipped with this crate, parsed on first use.
///
/// Repeated calls return the same instance.
///
/// # Errors
///
/// Returns the error from the first parse attempt, if the bundled resource is
/// malformed or incomplete.
pub fn bundled_catalog() -> Result<&'static Catalog, CatalogError> {
    static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
    CATALOG
        .get_or_init(|| {
            tracing::debug!(name = CATALOG_NAME, "loading bundled message catalog");
            let catalog = parse_catalog(BUNDLED)?;
            catalog.ensure_complete()?;
            Ok(catalog)
        })
        .as_ref()
        .map_err(Clone::clone)
}
