use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use tracing::debug;

/// One usable data row from the coldstart CSV: the trimmed first field and
/// the row's zero-based enumeration index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColdstartRecord {
    pub feed_id: String,
    pub position: i32,
}

/// Streaming reader for the coldstart seed file.
///
/// The file is delimited text whose first row is a header (content ignored,
/// never validated). Each subsequent row's first field is a feed_id. Rows
/// with an empty first field are skipped, but their enumeration index is
/// still consumed, so positions reflect the original row numbering rather
/// than a compacted rank.
///
/// Records are yielded one at a time; memory use stays constant no matter
/// how large the input file is.
pub struct ColdstartCsvReader<R: io::Read> {
    records: StringRecordsIntoIter<R>,
}

impl ColdstartCsvReader<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, csv::Error> {
        debug!("Opening coldstart CSV at {}", path.as_ref().display());
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)?;

        Ok(Self {
            records: reader.into_records(),
        })
    }
}

impl<R: io::Read> ColdstartCsvReader<R> {
    pub fn from_reader(rdr: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(rdr);

        Self {
            records: reader.into_records(),
        }
    }
}

impl<R: io::Read> Iterator for ColdstartCsvReader<R> {
    type Item = Result<ColdstartRecord, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };

            // The parser elides fully blank lines, so the enumeration index
            // is derived from the record's starting line: the header
            // occupies line 1 and data enumeration starts at 0 on line 2.
            // Blank lines consume an index without yielding a record.
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let position = line.saturating_sub(2) as i32;

            match record.get(0) {
                Some(feed_id) if !feed_id.is_empty() => {
                    return Some(Ok(ColdstartRecord {
                        feed_id: feed_id.to_string(),
                        position,
                    }));
                }
                // Empty or whitespace-only first field: skip, index consumed.
                _ => continue,
            }
        }
    }
}
