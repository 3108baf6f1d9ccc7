//! Common imports for integration tests.
#![allow(unfulfilled_lint_expectations)]

#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use assert_cmd::{Command, prelude::*};
#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use predicates::prelude::*;
#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use rstest::{fixture, rstest};

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use common::*;

/// Build a command for the `md2html` binary.
#[expect(dead_code, reason = "only some test crates run the binary")]
pub fn md2html() -> Command {
    Command::cargo_bin("md2html").expect("Failed to create cargo command for md2html")
}
