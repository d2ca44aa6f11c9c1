//! Tar packaging of a file-name to content map

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::io::{Read, Write};

/// Pack a name→content map into a tar stream written to `out`.
///
/// Entries are written in map order with fixed permissions, so the same map
/// always produces the same byte stream.
pub fn pack<W: Write>(files: &BTreeMap<String, Vec<u8>>, out: W) -> Result<()> {
    let mut builder = tar::Builder::new(out);

    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_mode(0o600);
        header.set_size(content.len() as u64);

        builder
            .append_data(&mut header, name, content.as_slice())
            .map_err(|e| Error::tar(e, format!("append {name:?}")))?;
    }

    builder.finish().map_err(|e| Error::tar(e, "finalize"))?;

    Ok(())
}

/// Unpack a tar stream back into a name→content map.
///
/// Only regular file entries are extracted; directories and links are
/// skipped.
pub fn unpack<R: Read>(reader: R) -> Result<BTreeMap<String, Vec<u8>>> {
    let mut archive = tar::Archive::new(reader);
    let mut files = BTreeMap::new();

    let entries = archive.entries().map_err(|e| Error::tar(e, "read"))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| Error::tar(e, "read entry"))?;

        if entry.header().entry_type() != tar::EntryType::Regular {
            continue;
        }

        let name = entry
            .path()
            .map_err(|e| Error::tar(e, "read entry path"))?
            .to_string_lossy()
            .into_owned();

        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .map_err(|e| Error::tar(e, format!("read {name:?}")))?;

        files.insert(name, content);
    }

    Ok(files)
}
