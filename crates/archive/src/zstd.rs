//! Zstd streaming compression

use crate::error::{Error, Result};
use std::io::{Read, Write, copy};

/// Compression level used for bundles. Matches the zstd default trade-off
/// between ratio and speed for CI-sized report archives.
const LEVEL: i32 = 3;

/// Compress `data` into `out` as a zstd stream.
pub fn compress<W: Write>(data: &[u8], out: W) -> Result<()> {
    let mut encoder =
        ::zstd::Encoder::new(out, LEVEL).map_err(|e| Error::zstd(e, "create encoder"))?;

    encoder
        .write_all(data)
        .map_err(|e| Error::zstd(e, "write"))?;

    encoder.finish().map_err(|e| Error::zstd(e, "finish"))?;

    Ok(())
}

/// Decompress a zstd stream from `reader` into `out`.
pub fn decompress<R: Read, W: Write>(reader: R, mut out: W) -> Result<()> {
    let mut decoder = ::zstd::Decoder::new(reader).map_err(|e| Error::zstd(e, "create decoder"))?;

    copy(&mut decoder, &mut out).map_err(|e| Error::zstd(e, "read"))?;

    Ok(())
}
