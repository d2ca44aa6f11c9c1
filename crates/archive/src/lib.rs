//! Archive and compression codec for testlab bundles.
//!
//! Two independent, composable stages: [`pack`]/[`unpack`] turn a file-name
//! to content map into a single tar stream and back, and
//! [`compress`]/[`decompress`] wrap any byte stream in zstd. Round-trip law:
//! `unpack(decompress(compress(pack(files)))) == files` for any map of valid
//! names to byte content, including empty maps and zero-length files.

pub mod error;
mod tar;
mod zstd;

pub use error::{Error, Result};
pub use tar::{pack, unpack};
pub use zstd::{compress, decompress};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn map(entries: &[(&str, &[u8])]) -> BTreeMap<String, Vec<u8>> {
        entries
            .iter()
            .map(|(name, content)| ((*name).to_string(), content.to_vec()))
            .collect()
    }

    fn round_trip(files: &BTreeMap<String, Vec<u8>>) -> BTreeMap<String, Vec<u8>> {
        let mut raw = Vec::new();
        pack(files, &mut raw).unwrap();

        let mut compressed = Vec::new();
        compress(&raw, &mut compressed).unwrap();

        let mut decompressed = Vec::new();
        decompress(compressed.as_slice(), &mut decompressed).unwrap();

        unpack(decompressed.as_slice()).unwrap()
    }

    #[test]
    fn tar_round_trip() {
        let files = map(&[
            ("reports/1.xml", b"<testsuite/>"),
            ("reports/2.xml", b"<testsuite name=\"a\"/>"),
            ("CODEOWNERS", b"* @org/team\n"),
        ]);

        let mut raw = Vec::new();
        pack(&files, &mut raw).unwrap();
        assert_eq!(unpack(raw.as_slice()).unwrap(), files);
    }

    #[test]
    fn zstd_round_trip() {
        let data = b"some report content".repeat(100);

        let mut compressed = Vec::new();
        compress(&data, &mut compressed).unwrap();
        assert!(compressed.len() < data.len());

        let mut out = Vec::new();
        decompress(compressed.as_slice(), &mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn full_round_trip() {
        let files = map(&[
            ("reports/1.xml", b"<testsuite/>"),
            ("git.json", b"{\"diffStat\":null,\"commitFiles\":[]}"),
        ]);
        assert_eq!(round_trip(&files), files);
    }

    #[test]
    fn empty_map_round_trips() {
        let files = BTreeMap::new();
        assert_eq!(round_trip(&files), files);
    }

    #[test]
    fn zero_length_file_round_trips() {
        let files = map(&[("reports/1.xml", b""), ("reports/2.txt", b"x")]);
        assert_eq!(round_trip(&files), files);
    }

    #[test]
    fn nested_names_are_preserved() {
        let files = map(&[("a/b/c/deep.xml", b"deep")]);
        assert_eq!(round_trip(&files), files);
    }

    #[test]
    fn packing_is_deterministic() {
        let files = map(&[("b.xml", b"two"), ("a.xml", b"one")]);

        let mut first = Vec::new();
        pack(&files, &mut first).unwrap();
        let mut second = Vec::new();
        pack(&files, &mut second).unwrap();

        assert_eq!(first, second);
    }
}
