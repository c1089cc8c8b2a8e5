//! XML directory provider over the workbench's DB-export shape.
//!
//! Each `*.xml` file holds a root element with repeated record elements;
//! the children of a record are its fields. Field values are the element
//! text; empty elements are missing values.

use std::path::PathBuf;

use anyhow::Context;
use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};

use fieldlink_model::{DataSource, SourceData, SourceProvider};

use crate::discovery::{list_files_with_extension, source_name};

/// Treats every XML file in a directory as a data source named by its file
/// stem.
#[derive(Debug, Clone)]
pub struct XmlDirectoryProvider {
    dir: PathBuf,
}

impl XmlDirectoryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SourceProvider for XmlDirectoryProvider {
    fn list_sources(&self) -> anyhow::Result<Vec<Box<dyn DataSource>>> {
        let files = list_files_with_extension(&self.dir, "xml")?;
        tracing::debug!(dir = %self.dir.display(), files = files.len(), "discovered xml sources");
        Ok(files
            .into_iter()
            .map(|path| {
                Box::new(XmlSource {
                    name: source_name(&path),
                    path,
                }) as Box<dyn DataSource>
            })
            .collect())
    }
}

#[derive(Debug, Clone)]
struct XmlSource {
    name: String,
    path: PathBuf,
}

impl DataSource for XmlSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> anyhow::Result<SourceData> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        parse_records(&self.name, &text)
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }
}

/// Collect field columns from `<root><record><field>value</field>...` text.
///
/// Fields keep first-seen order; records contribute one value per field
/// element they actually carry. Field text arrives fragmented: entity
/// references are separate `GeneralRef` events, so fragments are
/// accumulated until the field element closes.
fn parse_records(name: &str, text: &str) -> anyhow::Result<SourceData> {
    let mut reader = Reader::from_str(text);

    let mut data = SourceData::new(name);
    let mut depth = 0usize;
    let mut current_field: Option<String> = None;
    let mut current_value: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                depth += 1;
                // depth 1: root, depth 2: record, depth 3: field
                if depth == 3 {
                    current_field =
                        Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                    current_value = None;
                }
            }
            Event::Text(value) => {
                if depth == 3 && current_field.is_some() {
                    current_value
                        .get_or_insert_with(String::new)
                        .push_str(&value.xml_content()?);
                }
            }
            Event::GeneralRef(reference) => {
                if depth == 3 && current_field.is_some() {
                    current_value
                        .get_or_insert_with(String::new)
                        .push_str(&resolve_reference(&reference)?);
                }
            }
            Event::End(_) => {
                if depth == 3 {
                    if let Some(field) = current_field.take() {
                        push_value(&mut data, &field, current_value.take());
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Empty(element) => {
                if depth == 2 {
                    let field = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                    push_value(&mut data, &field, None);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(data)
}

/// Resolve `&#...;` character references and the predefined XML entities.
fn resolve_reference(reference: &BytesRef<'_>) -> anyhow::Result<String> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = reference.decode()?;
    quick_xml::escape::resolve_predefined_entity(&name)
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("unresolved entity reference &{name};"))
}

fn push_value(data: &mut SourceData, field: &str, value: Option<String>) {
    if let Some((_, values)) = data.fields.iter_mut().find(|(name, _)| name == field) {
        values.push(value);
    } else {
        data.push_field(field, vec![value]);
    }
}
