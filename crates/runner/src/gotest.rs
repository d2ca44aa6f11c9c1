//! `go test` line format

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Extract candidate test names from `go test -list` style output.
///
/// Lines containing spaces are build output, not test names, and are
/// dropped.
pub fn parse(input: impl BufRead) -> Result<Vec<String>> {
    let mut tests = Vec::new();

    for line in input.lines() {
        let line = line.map_err(|source| Error::Read { source })?;
        if line.contains(' ') {
            continue;
        }
        tests.push(line);
    }

    Ok(tests)
}

/// Emit the selection as an anchored alternation for `go test -run`.
pub fn format(tests: &[String], mut out: impl Write) -> Result<()> {
    write!(out, "^({})$", tests.join("|")).map_err(|source| Error::Write { source })
}
