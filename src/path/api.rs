use pest::Parser;
use pest_derive::Parser;

use crate::registry::error::RegistryError;

#[derive(Parser)]
#[grammar = "path/path_grammar.pest"] // relative to src
pub struct PathParser;

/// Split a dotted path into its identifier segments.
///
/// A valid path is a non-empty sequence of identifiers
/// (`[A-Za-z_][A-Za-z0-9_]*`) separated by single dots, with no
/// surrounding or embedded whitespace. Anything else fails with
/// [`RegistryError::InvalidPath`] carrying pest's rendered error.
pub fn parse_path(path: &str) -> Result<Vec<String>, RegistryError> {
    let pairs = PathParser::parse(Rule::path, path).map_err(|e| RegistryError::InvalidPath {
        message: e.to_string(),
    })?;

    let mut segments = Vec::new();
    for pair in pairs {
        for inner in pair.into_inner() {
            if inner.as_rule() == Rule::identifier {
                segments.push(inner.as_str().to_string());
            }
        }
    }
    Ok(segments)
}
