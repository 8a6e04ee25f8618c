//! Record serialization for the CLI: JSON Lines or a single JSON array

use crate::extractors::base::{FileFunctions, FunctionRecord};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, newline-terminated
    #[default]
    Jsonl,
    /// One pretty-printed JSON array
    Json,
}

/// A record tagged with the file it came from
#[derive(Debug, Serialize)]
struct LocatedRecord<'a> {
    file: &'a str,
    #[serde(flatten)]
    record: &'a FunctionRecord,
}

#[derive(Serialize)]
#[serde(untagged)]
enum OutputRecord<'a> {
    Bare(&'a FunctionRecord),
    Located(LocatedRecord<'a>),
}

/// Write every record of every file, in order
///
/// With `include_file` each record also carries a `file` field.
pub fn write_records<W: Write>(
    writer: &mut W,
    files: &[FileFunctions],
    format: OutputFormat,
    include_file: bool,
) -> io::Result<()> {
    let records: Vec<OutputRecord> = files
        .iter()
        .flat_map(|file| {
            file.functions.iter().map(move |record| {
                if include_file {
                    OutputRecord::Located(LocatedRecord {
                        file: &file.file,
                        record,
                    })
                } else {
                    OutputRecord::Bare(record)
                }
            })
        })
        .collect();

    match format {
        OutputFormat::Jsonl => {
            for record in &records {
                serde_json::to_writer(&mut *writer, record)?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &records)?;
            writeln!(writer)?;
        }
    }

    writer.flush()
}
