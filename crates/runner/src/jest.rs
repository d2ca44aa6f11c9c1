//! Jest path format

use crate::error::{Error, Result};
use crate::ParserOptions;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

/// Jest configuration fragment emitted as the selection.
#[derive(Debug, Serialize)]
struct JestTestOutput<'a> {
    #[serde(rename = "testMatch", skip_serializing_if = "<[_]>::is_empty")]
    test_match: &'a [String],
}

/// Extract candidate test files from `jest --listTests` output.
///
/// Lines that do not start with a slash are jest warnings (for example
/// jest-haste-map complaining about a duplicated manual mock) and are
/// dropped. Kept paths are resolved through symlinks and relativized to the
/// work dir.
pub fn parse(input: impl BufRead, options: &ParserOptions) -> Result<Vec<String>> {
    let mut tests = Vec::new();

    for line in input.lines() {
        let line = line.map_err(|source| Error::Read { source })?;
        if !line.starts_with('/') {
            continue;
        }
        tests.push(resolve_file(Path::new(&line), options)?);
    }

    Ok(tests)
}

/// Emit the selection as a jest `testMatch` configuration object.
pub fn format(tests: &[String], mut out: impl Write) -> Result<()> {
    let output = JestTestOutput { test_match: tests };
    serde_json::to_writer(&mut out, &output).map_err(|source| Error::Serialize { source })?;
    writeln!(out).map_err(|source| Error::Write { source })
}

/// Resolve symlinks in a reported path and strip the work dir prefix.
fn resolve_file(file: &Path, options: &ParserOptions) -> Result<String> {
    let resolved = file.canonicalize().map_err(|source| Error::Resolve {
        file: file.into(),
        source,
    })?;

    let relative = resolved
        .strip_prefix(&options.work_dir)
        .unwrap_or(&resolved);

    Ok(relative.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn format_str(tests: &[&str]) -> String {
        let tests: Vec<String> = tests.iter().map(|t| (*t).to_string()).collect();
        let mut out = Vec::new();
        format(&tests, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_absolute_paths_relative_to_work_dir() {
        let tmp = TempDir::new().unwrap();
        let work_dir = tmp.path().canonicalize().unwrap();
        fs::create_dir_all(work_dir.join("app")).unwrap();
        fs::write(work_dir.join("app/loader.test.ts"), "test").unwrap();

        let input = format!(
            "jest-haste-map: duplicate manual mock found\n{}\n",
            work_dir.join("app/loader.test.ts").display()
        );

        let options = ParserOptions {
            work_dir: work_dir.clone(),
        };
        let tests = parse(input.as_bytes(), &options).unwrap();
        assert_eq!(tests, vec!["app/loader.test.ts"]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let options = ParserOptions {
            work_dir: tmp.path().to_path_buf(),
        };

        let input = format!("{}\n", tmp.path().join("gone.test.ts").display());
        assert!(parse(input.as_bytes(), &options).is_err());
    }

    #[test]
    fn formats_test_match() {
        let out = format_str(&["app/loader.test.ts"]);
        assert_eq!(out, "{\"testMatch\":[\"app/loader.test.ts\"]}\n");
    }

    #[test]
    fn formats_empty_selection() {
        assert_eq!(format_str(&[]), "{}\n");
    }
}
