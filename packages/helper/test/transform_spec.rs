//! Transform Tests
//!
//! Rewriting of aggregate `maic` imports and the registry entries it leaves behind.

use maic_helper::logging::{LogLevel, Logger};
use maic_helper::{DevHelper, HelperOptions, Target, TransformError, PACKAGE_NAME};
use std::cell::RefCell;
use std::rc::Rc;

fn helper() -> DevHelper {
    DevHelper::new(HelperOptions::default()).expect("enabled by default")
}

/// Put the package name back in place of every id the helper handed out.
fn restore(helper: &DevHelper, rewritten: &str) -> String {
    let mut restored = rewritten.to_string();
    for (id, _) in helper.registry().iter() {
        for quote in ['"', '\''] {
            restored = restored.replace(
                &format!("{}{}", quote, id),
                &format!("{}{}", quote, PACKAGE_NAME),
            );
        }
    }
    restored
}

#[test]
fn should_return_none_without_matches() {
    let mut h = helper();
    let src = "import { ic_home } from 'other';\nconst maic = 1;\n";

    assert_eq!(h.transform(src, "a.js"), Ok(None));
    assert!(h.registry().is_empty());
}

#[test]
fn should_return_none_for_empty_source() {
    let mut h = helper();
    assert_eq!(h.transform("", "empty.js"), Ok(None));
}

#[test]
fn should_rewrite_package_with_variant() {
    let mut h = helper();
    let out = h
        .transform(r#"import { ic_home, ic_search } from "maic/outlined";"#, "a.js")
        .unwrap();

    assert_eq!(
        out.as_deref(),
        Some(r#"import { ic_home, ic_search } from "0000/outlined";"#)
    );
    let entry = h.registry().get("0000").unwrap();
    assert_eq!(entry.target, Target::Variant("outlined".to_string()));
    assert_eq!(entry.imports, vec!["ic_home", "ic_search"]);
}

#[test]
fn should_rewrite_package_without_variant() {
    let mut h = helper();
    let out = h.transform(r#"import { filled } from "maic";"#, "a.js").unwrap();

    assert_eq!(out.as_deref(), Some(r#"import { filled } from "0000";"#));
    let entry = h.registry().get("0000").unwrap();
    assert_eq!(entry.target, Target::Bare);
    assert_eq!(entry.imports, vec!["filled"]);
}

#[test]
fn should_rewrite_even_when_result_equals_input_length() {
    // Still a rewrite: "maic" and "0000" have the same length.
    let mut h = helper();
    let src = "import {a} from 'maic'";
    let out = h.transform(src, "a.js").unwrap().unwrap();

    assert_eq!(out.len(), src.len());
    assert_eq!(out, "import {a} from '0000'");
}

#[test]
fn should_allocate_sequential_ids_across_statements() {
    let mut h = helper();
    let src = concat!(
        "import { ic_home } from 'maic/outlined';\n",
        "import { ic_star } from \"maic/round\"\n",
        "import { filled } from 'maic';\n",
    );
    let out = h.transform(src, "a.js").unwrap().unwrap();

    assert_eq!(
        out,
        concat!(
            "import { ic_home } from '0000/outlined';\n",
            "import { ic_star } from \"0001/round\"\n",
            "import { filled } from '0002';\n",
        )
    );
    assert_eq!(h.registry().len(), 3);
}

#[test]
fn should_continue_ids_across_calls() {
    let mut h = helper();
    h.transform("import { a } from 'maic/x';", "a.js").unwrap();
    let out = h.transform("import { b } from 'maic/y';", "b.js").unwrap();

    assert_eq!(out.as_deref(), Some("import { b } from '0001/y';"));
    assert_eq!(h.registry().get("0000").unwrap().imports, vec!["a"]);
    assert_eq!(h.registry().get("0001").unwrap().imports, vec!["b"]);
}

#[test]
fn should_keep_ids_independent_per_instance() {
    let mut first = helper();
    let mut second = helper();
    first.transform("import { a } from 'maic';", "a.js").unwrap();
    let out = second.transform("import { b } from 'maic';", "b.js").unwrap();

    assert_eq!(out.as_deref(), Some("import { b } from '0000';"));
    assert_eq!(second.registry().get("0000").unwrap().imports, vec!["b"]);
}

#[test]
fn should_preserve_surrounding_text_byte_for_byte() {
    let mut h = helper();
    let src = concat!(
        "// header\n",
        "import React from 'react';\n",
        "import {\n  ic_home as Home,\n  ic_search,\n} from 'maic/outlined';",
        "   import   {ic_a}   from   \"maic\"   ;\n",
        "export const x = 1; import { ic_b, } from 'maic/sharp'\n",
        "console.log(Home, ic_search, ic_a, ic_b);\n",
    );
    let out = h.transform(src, "a.js").unwrap().unwrap();

    assert_eq!(h.registry().len(), 3);
    for id in ["0000", "0001", "0002"] {
        assert_eq!(out.matches(id).count(), 1, "{} appears once", id);
    }
    assert_eq!(restore(&h, &out), src);
}

#[test]
fn should_locate_later_matches_after_earlier_substitutions() {
    let mut h = helper();
    // Second statement starts well past where the first one's rewrite ends.
    let src = "import {a} from 'maic/variant_one'; let pad = 'xxxxxxxxxx'; import {b} from 'maic/two';";
    let out = h.transform(src, "a.js").unwrap().unwrap();

    assert_eq!(
        out,
        "import {a} from '0000/variant_one'; let pad = 'xxxxxxxxxx'; import {b} from '0001/two';"
    );
}

#[test]
fn should_rewrite_adjacent_statements() {
    let mut h = helper();
    let src = "import{a}from'maic'";
    // `import\s+{` requires whitespace, so this is not a match.
    assert_eq!(h.transform(src, "a.js"), Ok(None));

    let src = "import {a} from 'maic';import {b} from 'maic/x';";
    let out = h.transform(src, "a.js").unwrap().unwrap();
    assert_eq!(out, "import {a} from '0000';import {b} from '0001/x';");
}

#[test]
fn should_record_alias_clauses_by_leading_identifier() {
    let mut h = helper();
    h.transform("import { ic_home as Home, $special } from 'maic/filled';", "a.js")
        .unwrap();

    assert_eq!(
        h.registry().get("0000").unwrap().imports,
        vec!["ic_home", "$special"]
    );
}

#[test]
fn should_fail_on_invalid_import_and_register_nothing() {
    let mut h = helper();
    let src = "import { a } from 'maic/x';\nimport { 'b' as c } from 'maic/y';";
    let err = h.transform(src, "bad.js").unwrap_err();

    assert_eq!(
        err,
        TransformError::InvalidImport {
            unit: "bad.js".to_string(),
            piece: "'b' as c".to_string(),
        }
    );
    assert!(h.registry().is_empty());

    // Next successful call still starts from the first id.
    let out = h.transform("import { a } from 'maic/x';", "ok.js").unwrap();
    assert_eq!(out.as_deref(), Some("import { a } from '0000/x';"));
}

#[test]
fn should_mention_unit_in_error_message() {
    let mut h = helper();
    let err = h
        .transform("import { - } from 'maic';", "src/app.js")
        .unwrap_err();
    assert!(err.to_string().contains("src/app.js"));
}

struct RecordingLogger(Rc<RefCell<Vec<String>>>);

impl Logger for RecordingLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Debug
    }
    fn debug(&self, msg: &str) {
        self.0.borrow_mut().push(msg.to_string());
    }
    fn info(&self, msg: &str) {
        self.0.borrow_mut().push(msg.to_string());
    }
    fn warn(&self, msg: &str) {
        self.0.borrow_mut().push(msg.to_string());
    }
    fn error(&self, msg: &str) {
        self.0.borrow_mut().push(msg.to_string());
    }
}

#[test]
fn should_log_registrations_at_debug_level() {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let mut h = helper().with_logger(Box::new(RecordingLogger(messages.clone())));
    h.transform("import { ic_home } from 'maic/outlined';", "a.js")
        .unwrap();

    let messages = messages.borrow();
    assert!(messages
        .iter()
        .any(|m| m.contains("0000") && m.contains("ic_home") && m.contains("outlined")));
    assert!(messages.iter().any(|m| m.contains("rewrote 1 import(s) in a.js")));
}
