use std::collections::TryReserveError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::stat_record::{StatRecord, RECORD_BYTES};

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("truncated dump: expected {expected} records, read {actual}")]
    Format { expected: usize, actual: usize },
    #[error("working memory exhausted: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Reads a whole dump file. The record count is the file size divided by
/// the record width; a trailing partial record is silently dropped.
pub fn load_dump(path: impl AsRef<Path>) -> Result<Vec<StatRecord>, DumpError> {
    let file = File::open(path)?;
    let expected = file.metadata()?.len() as usize / RECORD_BYTES;

    let mut records: Vec<StatRecord> = Vec::new();
    records.try_reserve_exact(expected)?;

    let mut reader = BufReader::new(file);
    let mut buffer: [u8; RECORD_BYTES] = [0; RECORD_BYTES];
    for actual in 0..expected {
        match reader.read_exact(&mut buffer) {
            Ok(()) => records.push(StatRecord::from_bytes(&buffer)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(DumpError::Format { expected, actual });
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(records)
}

/// Writes the full sequence as raw fixed-width records, truncating any
/// existing file. An empty sequence produces a zero-length file.
pub fn store_dump(path: impl AsRef<Path>, records: &[StatRecord]) -> Result<(), DumpError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writer.write_all(&record.to_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
