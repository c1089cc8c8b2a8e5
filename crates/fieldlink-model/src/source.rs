//! Provider abstraction the engine reads from.
//!
//! A provider decides what constitutes a "table" (a relational catalog, a
//! directory of exports, an in-memory fixture) and hands the engine named
//! sources. Enumeration failure is fatal for the whole run; a read failure
//! on a single source is recoverable and only skips that source.

/// Raw contents of one data source: field name -> raw values.
///
/// Field order is the source's own order. Values keep duplicates; `None`
/// marks a null/missing cell. Normalization happens later, in the engine.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub name: String,
    pub fields: Vec<(String, Vec<Option<String>>)>,
}

impl SourceData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field column, keeping insertion order.
    pub fn push_field(
        &mut self,
        field: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> &mut Self {
        self.fields.push((field.into(), values));
        self
    }
}

/// One enumerable source. Reading may fail independently of enumeration.
pub trait DataSource {
    /// Stable identifier (table name, file stem).
    fn name(&self) -> &str;

    /// Materialize the source's fields and raw values.
    fn read(&self) -> anyhow::Result<SourceData>;
}

/// Supplies the set of sources for one analysis run.
pub trait SourceProvider {
    /// Enumerate sources. Order is not guaranteed and the engine must not
    /// depend on it.
    fn list_sources(&self) -> anyhow::Result<Vec<Box<dyn DataSource>>>;
}

/// In-memory source, used by tests and embedding callers.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: SourceData,
}

impl MemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: SourceData::new(name),
        }
    }

    #[must_use]
    pub fn with_field<S: Into<String>>(mut self, field: impl Into<String>, values: &[S]) -> Self
    where
        S: Clone,
    {
        let values = values
            .iter()
            .map(|v| Some(v.clone().into()))
            .collect::<Vec<_>>();
        self.data.push_field(field, values);
        self
    }

    #[must_use]
    pub fn with_raw_field(
        mut self,
        field: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Self {
        self.data.push_field(field, values);
        self
    }
}

impl DataSource for MemorySource {
    fn name(&self) -> &str {
        &self.data.name
    }

    fn read(&self) -> anyhow::Result<SourceData> {
        Ok(self.data.clone())
    }
}

/// In-memory provider over a fixed list of [`MemorySource`] values.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    sources: Vec<MemorySource>,
}

impl MemoryProvider {
    pub fn new(sources: Vec<MemorySource>) -> Self {
        Self { sources }
    }

    pub fn push(&mut self, source: MemorySource) {
        self.sources.push(source);
    }
}

impl SourceProvider for MemoryProvider {
    fn list_sources(&self) -> anyhow::Result<Vec<Box<dyn DataSource>>> {
        Ok(self
            .sources
            .iter()
            .cloned()
            .map(|s| Box::new(s) as Box<dyn DataSource>)
            .collect())
    }
}
