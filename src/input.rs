use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read URL list {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed URL list: {0}")]
    Csv(#[from] csv::Error),
}

/// Read URLs from the first column of a CSV file whose first row is a header
pub fn read_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    collect_first_column(reader)
}

/// Same as [`read_urls`] over any reader
pub fn read_urls_from<R: Read>(input: R) -> Result<Vec<String>, InputError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    collect_first_column(reader)
}

fn collect_first_column<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<String>, InputError> {
    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        match record.get(0).map(str::trim) {
            Some(url) if !url.is_empty() => urls.push(url.to_string()),
            _ => ::log::debug!("Skipping row without a URL: {:?}", record),
        }
    }

    ::log::info!("Read {} URLs", urls.len());
    Ok(urls)
}
