//! Synthetic module source for a registry entry.

use crate::registry::{Entry, Target};
use crate::PACKAGE_NAME;

/// Re-export source served by `load`, one line per import, no trailing newline.
pub fn module_source(entry: &Entry) -> String {
    entry
        .imports
        .iter()
        .map(|name| reexport_line(&entry.target, name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reexport_line(target: &Target, name: &str) -> String {
    match target {
        Target::Variant(variant) => format!(
            "export {{ default as {} }} from '{}/{}/{}.js';",
            name, PACKAGE_NAME, variant, name
        ),
        // Bare imports name a whole variant directory.
        Target::Bare => format!("export * from '{}/{}/index.js';", PACKAGE_NAME, name),
    }
}
