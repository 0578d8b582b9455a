use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Maximum size of a journey document: 10MB
const MAX_DOCUMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Title and slug of one content document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub slug: String,
}

/// Turns a readable content document into its [`Document`] metadata.
///
/// `path` is only used for diagnostics and path-derived defaults; the content always
/// comes from `reader`.
pub trait DocumentParser {
    fn parse(&self, reader: &mut dyn Read, path: &Path) -> Result<Document>;
}

/// Parser for documents with YAML (`---`), TOML (`+++`) or JSON (`{`) front matter
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontMatterParser;

impl DocumentParser for FrontMatterParser {
    fn parse(&self, reader: &mut dyn Read, path: &Path) -> Result<Document> {
        let mut bytes = Vec::new();
        reader
            .take(MAX_DOCUMENT_SIZE_BYTES + 1)
            .read_to_end(&mut bytes)
            .context("Failed to read document")?;
        if bytes.len() as u64 > MAX_DOCUMENT_SIZE_BYTES {
            bail!("Document exceeds maximum size of {} bytes", MAX_DOCUMENT_SIZE_BYTES);
        }
        let content = String::from_utf8(bytes).context("Document is not valid UTF-8 text")?;

        let fields = extract_front_matter(&content)?;
        let title = scalar_field(&fields, "title")?.unwrap_or_default();
        let slug = match scalar_field(&fields, "slug")? {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slug_from_path(path)?,
        };

        Ok(Document { title, slug })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

impl Format {
    fn delimiter(self) -> &'static str {
        match self {
            Format::Yaml => "---",
            Format::Toml => "+++",
        }
    }
}

/// Extract the front matter block as a key/value map.
///
/// A document without front matter yields an empty map.
pub fn extract_front_matter(content: &str) -> Result<Map<String, Value>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    if content.starts_with('{') {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let value =
            Value::deserialize(&mut deserializer).context("Malformed JSON front matter")?;
        return into_mapping(value);
    }

    let mut lines = content.lines();
    let format = match lines.next().map(str::trim_end) {
        Some("---") => Format::Yaml,
        Some("+++") => Format::Toml,
        _ => return Ok(Map::new()),
    };

    let mut block = Vec::new();
    let mut terminated = false;
    for line in lines {
        if line.trim_end() == format.delimiter() {
            terminated = true;
            break;
        }
        block.push(line.trim_end_matches('\r'));
    }
    if !terminated {
        bail!("Unterminated front matter: missing closing '{}'", format.delimiter());
    }

    let block = block.join("\n");
    if block.trim().is_empty() {
        return Ok(Map::new());
    }

    let value = match format {
        Format::Yaml => {
            serde_yaml::from_str::<Value>(&block).context("Malformed YAML front matter")?
        }
        Format::Toml => toml::from_str::<Value>(&block).context("Malformed TOML front matter")?,
    };
    into_mapping(value)
}

fn into_mapping(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => bail!("Front matter must be a mapping, found {}", type_name(&other)),
    }
}

/// Key the `toml` crate uses when a datetime is deserialized into a generic map
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Look up a field by case-insensitive key, stringifying scalar values
fn scalar_field(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    let Some((_, value)) = fields.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)) else {
        return Ok(None);
    };
    if let Some(datetime) = toml_datetime(value) {
        return Ok(Some(datetime.to_string()));
    }
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => bail!("Front matter field '{}' must be a scalar, found {}", key, type_name(other)),
    }
}

fn toml_datetime(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) if map.len() == 1 => map.get(TOML_DATETIME_KEY)?.as_str(),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Derive a slug from the document's file stem
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use journey_mapper::parsers::slug_from_path;
///
/// let slug = slug_from_path(Path::new("content/journey/Alpine Trail.md"))?;
/// assert_eq!(slug, "alpine-trail");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn slug_from_path(path: &Path) -> Result<String> {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let slug = slugify(&stem);
    if slug.is_empty() {
        bail!("Cannot derive a slug from file name: {}", path.display());
    }
    Ok(slug)
}

fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if (c.is_whitespace() || c == '_' || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
