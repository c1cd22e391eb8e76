use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

use crate::errors::{io_err, FileManagerError, Result};

/// Stream the raw bytes of `path` into `out`. Returns the number of bytes written.
/// Failures writing to `out` come back as [`FileManagerError::Output`].
pub fn read_file<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<u64> {
    let file = File::open(path).map_err(io_err("open file", path))?;
    let mut reader = BufReader::new(file);
    let mut bytes: u64 = 0;
    loop {
        let chunk = match reader.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FileManagerError::from_io("read file", path, e)),
        };
        out.write_all(chunk).map_err(FileManagerError::Output)?;
        let n = chunk.len();
        reader.consume(n);
        bytes += n as u64;
    }
    out.flush().map_err(FileManagerError::Output)?;

    debug!(path = %path.display(), bytes, "Streamed file");
    Ok(bytes)
}
