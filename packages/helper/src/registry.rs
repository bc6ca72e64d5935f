//! Registry
//!
//! Maps the short identifiers spliced into rewritten sources back to the import
//! statement they replaced. Entries are append-only: an identifier is never
//! reused and its entry never changes, which is what makes `load` idempotent.

use crate::error::{Result, TransformError};
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;

/// Width of every identifier, in characters.
pub const ID_WIDTH: usize = 4;

const ID_PAD: char = '0';
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of identifiers that fit in `ID_WIDTH` base-36 digits.
pub const ID_CAPACITY: usize = 36 * 36 * 36 * 36;

/// Identifier allocated for one rewritten import statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(String);

impl ModuleId {
    /// Encode `index` in base 36, left-padded to `ID_WIDTH`.
    fn from_index(index: usize) -> Option<Self> {
        if index >= ID_CAPACITY {
            return None;
        }
        let mut digits = Vec::with_capacity(ID_WIDTH);
        let mut rest = index;
        loop {
            digits.push(DIGITS[rest % 36] as char);
            rest /= 36;
            if rest == 0 {
                break;
            }
        }
        let mut id = String::with_capacity(ID_WIDTH);
        for _ in digits.len()..ID_WIDTH {
            id.push(ID_PAD);
        }
        id.extend(digits.iter().rev());
        Some(ModuleId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the re-exported icons live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `from "maic/<variant>"`
    Variant(String),
    /// `from "maic"`
    Bare,
}

impl Target {
    pub fn from_variant(variant: Option<&str>) -> Self {
        match variant {
            Some(name) if !name.is_empty() => Target::Variant(name.to_string()),
            _ => Target::Bare,
        }
    }

    pub fn variant(&self) -> Option<&str> {
        match self {
            Target::Variant(name) => Some(name),
            Target::Bare => None,
        }
    }
}

/// What one import statement asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub target: Target,
    pub imports: Vec<String>,
}

impl Entry {
    pub fn new(target: Target, imports: Vec<String>) -> Self {
        Self { target, imports }
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: IndexMap<ModuleId, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Entries in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModuleId, &Entry)> {
        self.entries.iter()
    }

    /// Fails unless `additional` more entries can still get an identifier.
    pub fn ensure_capacity(&self, additional: usize) -> Result<()> {
        if self.entries.len() + additional > ID_CAPACITY {
            return Err(TransformError::IdSpaceExhausted {
                capacity: ID_CAPACITY,
            });
        }
        Ok(())
    }

    /// Store `entry` under the next free identifier.
    pub fn register(&mut self, entry: Entry) -> Result<ModuleId> {
        let id = ModuleId::from_index(self.entries.len()).ok_or(TransformError::IdSpaceExhausted {
            capacity: ID_CAPACITY,
        })?;
        self.entries.insert(id.clone(), entry);
        Ok(id)
    }
}
