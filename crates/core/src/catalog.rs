//! Code → message-template lookup.
//!
//! Templates use 0-based positional placeholders: `{0}`, `{1}`, ... are
//! replaced by the record's arguments in order, `{{` and `}}` produce literal
//! braces, and any other brace is copied through unchanged.
//!
//! Reading the catalog from text lives in the parser crate; this module only
//! holds the mapping and renders records against it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{Display, Formatter, Result as FmtResult};

use hashbrown::HashMap;

use crate::error::{Error, ErrorCode, ErrorRecord};

/// Failure to obtain or use a message catalog. Always a configuration
/// problem, never a property of the rover input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The named catalog resource could not be read.
    MissingResource { name: String, reason: String },
    /// A line of the catalog resource is not a `key=template` entry.
    Malformed { line: usize, content: String },
    /// No template is registered for the code.
    UnknownCode { code: String },
    /// A template refers to placeholder `{index}` but fewer arguments were given.
    MissingArgument { code: String, index: usize },
    /// The catalog lacks templates for these codes.
    Incomplete { missing: Vec<String> },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MissingResource { name, reason } => {
                write!(f, "cannot load message catalog {name}: {reason}")
            }
            Self::Malformed { line, content } => {
                write!(f, "malformed catalog entry at line {line}: {content:?}")
            }
            Self::UnknownCode { code } => write!(f, "no message template for {code}"),
            Self::MissingArgument { code, index } => {
                write!(f, "template {code} uses {{{index}}} but no such argument was given")
            }
            Self::Incomplete { missing } => {
                write!(f, "message catalog is missing {}", missing.join(", "))
            }
        }
    }
}

impl core::error::Error for CatalogError {}

/// Read-only mapping from catalog key to message template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: HashMap<String, String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `template` under `key`, replacing any earlier template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The raw template for `key`, if any.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, code: ErrorCode) -> Option<&str> {
        self.template(code.key())
    }

    /// All entries sorted by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .templates
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Check that every [`ErrorCode`] has a template.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Incomplete`] listing the absent keys.
    pub fn ensure_complete(&self) -> Result<(), CatalogError> {
        let missing: Vec<String> = ErrorCode::ALL
            .iter()
            .filter(|code| self.get(**code).is_none())
            .map(|code| code.key().to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Incomplete { missing })
        }
    }

    /// Fill the template registered under `key` with `arguments`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownCode`] if `key` has no template, or
    /// [`CatalogError::MissingArgument`] if the template needs more arguments.
    pub fn resolve<S: AsRef<str>>(&self, key: &str, arguments: &[S]) -> Result<String, CatalogError> {
        let template = self.template(key).ok_or_else(|| CatalogError::UnknownCode {
            code: key.to_string(),
        })?;
        fill(template, arguments).map_err(|index| CatalogError::MissingArgument {
            code: key.to_string(),
            index,
        })
    }

    /// Render a record to its final message.
    ///
    /// # Errors
    ///
    /// See [`Catalog::resolve`].
    pub fn render(&self, record: &ErrorRecord) -> Result<String, CatalogError> {
        self.resolve(record.code.key(), record.arguments.as_slice())
    }

    /// Render either error kind to its final message.
    ///
    /// # Errors
    ///
    /// See [`Catalog::resolve`].
    pub fn render_error(&self, error: &Error) -> Result<String, CatalogError> {
        self.render(error.record())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (key, template) in iter {
            catalog.insert(key, template);
        }
        catalog
    }
}

/// Substitute placeholders. On failure returns the first placeholder index
/// without a matching argument.
fn fill<S: AsRef<str>>(template: &str, arguments: &[S]) -> Result<String, usize> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(['{', '}']) {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            output.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if let Some((index, len)) = placeholder(tail) {
            let argument = arguments.get(index).ok_or(index)?;
            output.push_str(argument.as_ref());
            rest = &tail[len..];
        } else {
            output.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }
    output.push_str(rest);
    Ok(output)
}

/// Parse `{digits}` at the start of `s`, returning the index and byte length.
fn placeholder(s: &str) -> Option<(usize, usize)> {
    let body = s.strip_prefix('{')?;
    let digits = body.find(|c: char| !c.is_ascii_digit())?;
    if digits == 0 || !body[digits..].starts_with('}') {
        return None;
    }
    let index = body[..digits].parse().ok()?;
    Some((index, digits + 2))
}
