//! CSV directory provider: one source per `*.csv` file.

use std::path::{Path, PathBuf};

use anyhow::Context;

use fieldlink_model::{DataSource, SourceData, SourceProvider};

use crate::discovery::{list_files_with_extension, source_name};

/// Treats every CSV file in a directory as a data source named by its file
/// stem, with the header row as field names and blank cells as missing.
#[derive(Debug, Clone)]
pub struct CsvDirectoryProvider {
    dir: PathBuf,
}

impl CsvDirectoryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SourceProvider for CsvDirectoryProvider {
    fn list_sources(&self) -> anyhow::Result<Vec<Box<dyn DataSource>>> {
        let files = list_files_with_extension(&self.dir, "csv")?;
        tracing::debug!(dir = %self.dir.display(), files = files.len(), "discovered csv sources");
        Ok(files
            .into_iter()
            .map(|path| {
                Box::new(CsvSource {
                    name: source_name(&path),
                    path,
                }) as Box<dyn DataSource>
            })
            .collect())
    }
}

#[derive(Debug, Clone)]
struct CsvSource {
    name: String,
    path: PathBuf,
}

impl DataSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> anyhow::Result<SourceData> {
        read_csv_source(&self.name, &self.path)
    }
}

fn read_csv_source(name: &str, path: &Path) -> anyhow::Result<SourceData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .clone();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to parse {}", path.display()))?;
        for (idx, column) in columns.iter_mut().enumerate() {
            // Short rows pad with missing cells.
            let cell = record.get(idx).unwrap_or("");
            column.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    let mut data = SourceData::new(name);
    for (header, values) in headers.iter().zip(columns) {
        data.push_field(header, values);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_blank_cells() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("item.csv"),
            "id,name\n1,Sword\n2,\n3,Shield\n",
        )
        .unwrap();

        let provider = CsvDirectoryProvider::new(dir.path());
        let sources = provider.list_sources().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), "item");

        let data = sources[0].read().unwrap();
        assert_eq!(data.fields.len(), 2);
        let (field, values) = &data.fields[1];
        assert_eq!(field, "name");
        assert_eq!(
            values,
            &vec![Some("Sword".to_string()), None, Some("Shield".to_string())]
        );
    }

    #[test]
    fn malformed_file_fails_only_its_own_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.csv"), "name\nSword\n").unwrap();
        // Invalid UTF-8 in a record body fails the read.
        std::fs::write(dir.path().join("broken.csv"), b"name\n\xff\xfe\n").unwrap();

        let provider = CsvDirectoryProvider::new(dir.path());
        let sources = provider.list_sources().unwrap();
        assert_eq!(sources.len(), 2);

        let broken = sources.iter().find(|s| s.name() == "broken").unwrap();
        assert!(broken.read().is_err());
        let ok = sources.iter().find(|s| s.name() == "ok").unwrap();
        assert!(ok.read().is_ok());
    }
}
