//! Import Scanner
//!
//! Finds `import { a, b } from "maic/<variant>"` statements in a source text.
//! This is a lexical scan, not a parse: comments and strings are not skipped,
//! and only the single-statement shape below is recognized.

use crate::PACKAGE_NAME;
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;
use std::ops::Range;

/// Aggregate import of the virtual package, with the package token and the
/// optional variant captured separately.
static IMPORT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"import\s+\{{(?P<content>[^{{}}]*)\}}\s+from\s+["'](?P<package>{})(?:/(?P<variant>[A-Za-z0-9_]+))?["'];?"#,
        regex::escape(PACKAGE_NAME)
    ))
    .unwrap()
});

/// Leading identifier of one import list item (`ic_home as Home` -> `ic_home`).
static IMPORT_IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_$]+").unwrap());

/// One matched statement. All ranges are byte offsets into the scanned source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMatch<'s> {
    pub range: Range<usize>,
    pub package: Range<usize>,
    pub content: &'s str,
    pub variant: Option<&'s str>,
}

impl<'s> ImportMatch<'s> {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}

/// Non-overlapping matches, left to right.
pub fn scan(source: &str) -> impl Iterator<Item = ImportMatch<'_>> {
    IMPORT_STATEMENT.captures_iter(source).filter_map(|caps| {
        let whole = caps.get(0)?;
        let package = caps.name("package")?;
        Some(ImportMatch {
            range: whole.range(),
            package: package.range(),
            content: caps.name("content").map_or("", |m| m.as_str()),
            variant: caps.name("variant").map(|m| m.as_str()),
        })
    })
}

/// Split the brace contents into imported names.
///
/// Empty items (from a trailing comma) are dropped. An item that does not start
/// with an identifier is returned as the error.
pub fn parse_import_list(content: &str) -> Result<SmallVec<[&str; 8]>, &str> {
    let mut names = SmallVec::new();
    for piece in content.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match IMPORT_IDENTIFIER.find(piece) {
            Some(name) => names.push(name.as_str()),
            None => return Err(piece),
        }
    }
    Ok(names)
}
