//! JSON-backed representation source.
//!
//! The expected document is an array of objects, one per entity:
//!
//! ```json
//! [
//!   { "word": "the", "vector": [0.1, 0.2, 0.3] },
//!   { "word": "cat", "vector": [0.4, 0.5, 0.6] }
//! ]
//! ```
//!
//! Field names are configurable through [`JsonFormat`]; any other fields are
//! ignored. Ids may be JSON strings or numbers; numbers are read by their
//! textual form, so `"word": 5` becomes the id `"5"`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::OnceLock;

use latentlens_core::{Representation, Vector};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::RepresentationSource;
use crate::error::SpaceError;
use crate::store::EntityKey;

/// Field names of the id and the vector inside each JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFormat {
    /// Name of the id field.
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// Name of the numeric array field.
    #[serde(default = "default_vector_field")]
    pub vector_field: String,
}

fn default_id_field() -> String {
    "word".to_string()
}

fn default_vector_field() -> String {
    "vector".to_string()
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { id_field: default_id_field(), vector_field: default_vector_field() }
    }
}

impl JsonFormat {
    /// Creates a format with custom field names.
    ///
    /// # Errors
    ///
    /// Returns [`SpaceError::InvalidFormat`] if either name is blank or both
    /// name the same field.
    pub fn new(
        id_field: impl Into<String>,
        vector_field: impl Into<String>,
    ) -> Result<Self, SpaceError> {
        let format = Self { id_field: id_field.into(), vector_field: vector_field.into() };
        format.validate()?;
        Ok(format)
    }

    /// Checks the field names, including formats built by deserialization.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<(), SpaceError> {
        if self.id_field.trim().is_empty() {
            return Err(SpaceError::InvalidFormat("id field name must be non-blank".to_string()));
        }
        if self.vector_field.trim().is_empty() {
            return Err(SpaceError::InvalidFormat(
                "vector field name must be non-blank".to_string(),
            ));
        }
        if self.id_field == self.vector_field {
            return Err(SpaceError::InvalidFormat(format!(
                "id and vector fields must differ, both are '{}'",
                self.id_field
            )));
        }
        Ok(())
    }
}

/// Turns the textual form of a JSON id into an entity key.
///
/// Returning `None` rejects the entry.
pub type IdParser<T> = fn(&str) -> Option<T>;

fn owned_id(raw: &str) -> Option<String> {
    Some(raw.to_owned())
}

#[derive(Debug, Clone)]
enum JsonInput {
    Path(PathBuf),
    Text(String),
}

/// A [`RepresentationSource`] read from JSON.
///
/// Ids are strings unless a parser is installed with
/// [`with_id_parser`](Self::with_id_parser). The document is parsed on the
/// first [`load`](RepresentationSource::load) and cached; later loads return
/// copies of the cached map.
#[derive(Debug)]
pub struct JsonSource<T = String> {
    representation: Representation,
    input: JsonInput,
    format: JsonFormat,
    parse_id: IdParser<T>,
    cached: OnceLock<BTreeMap<T, Vector>>,
}

impl JsonSource<String> {
    /// Creates a source that reads the file at `path`.
    #[must_use]
    pub fn from_path(
        representation: Representation,
        path: impl Into<PathBuf>,
        format: JsonFormat,
    ) -> Self {
        Self::with_input(representation, JsonInput::Path(path.into()), format, owned_id)
    }

    /// Creates a source over an in-memory JSON document.
    #[must_use]
    pub fn from_text(
        representation: Representation,
        text: impl Into<String>,
        format: JsonFormat,
    ) -> Self {
        Self::with_input(representation, JsonInput::Text(text.into()), format, owned_id)
    }
}

impl<T: EntityKey> JsonSource<T> {
    fn with_input(
        representation: Representation,
        input: JsonInput,
        format: JsonFormat,
        parse_id: IdParser<T>,
    ) -> Self {
        Self { representation, input, format, parse_id, cached: OnceLock::new() }
    }

    /// Reads ids through `parse_id` instead of keeping them as strings.
    ///
    /// Any previously cached load is discarded.
    #[must_use]
    pub fn with_id_parser<U: EntityKey>(self, parse_id: IdParser<U>) -> JsonSource<U> {
        JsonSource::with_input(self.representation, self.input, self.format, parse_id)
    }

    fn read(&self) -> Result<Value, SpaceError> {
        match &self.input {
            JsonInput::Path(path) => {
                let file = File::open(path)
                    .map_err(|source| SpaceError::Io { path: path.clone(), source })?;
                Ok(serde_json::from_reader(BufReader::new(file))?)
            }
            JsonInput::Text(text) => Ok(serde_json::from_str(text)?),
        }
    }

    fn parse(&self, root: &Value) -> Result<BTreeMap<T, Vector>, SpaceError> {
        self.format.validate()?;
        let entries =
            root.as_array().ok_or_else(|| self.invalid("JSON must be an array of objects"))?;

        let mut result = BTreeMap::new();
        let mut dim: Option<usize> = None;

        for entry in entries {
            let object = entry
                .as_object()
                .ok_or_else(|| self.invalid("expected an object inside the array"))?;

            let raw = object
                .get(&self.format.id_field)
                .and_then(id_text)
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| {
                    self.invalid(format!("missing or blank id field '{}'", self.format.id_field))
                })?;
            let id = (self.parse_id)(&raw)
                .ok_or_else(|| self.invalid(format!("unparseable id: {raw}")))?;

            let values = object
                .get(&self.format.vector_field)
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    self.invalid(format!(
                        "missing vector field '{}' for id: {raw}",
                        self.format.vector_field
                    ))
                })?;
            if values.is_empty() {
                return Err(self.invalid(format!("vector must not be empty for id: {raw}")));
            }
            let components = values
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<f64>>>()
                .ok_or_else(|| {
                    self.invalid(format!("non-numeric vector component for id: {raw}"))
                })?;

            match dim {
                None => dim = Some(components.len()),
                Some(expected) if expected != components.len() => {
                    let actual = components.len();
                    return Err(self.invalid(format!(
                        "inconsistent vector dimension: expected {expected} but got {actual} \
                         for id: {raw}"
                    )));
                }
                Some(_) => {}
            }

            let vector = Vector::new(components)?;
            if result.insert(id, vector).is_some() {
                return Err(self.invalid(format!("duplicate id: {raw}")));
            }
        }

        if result.is_empty() {
            return Err(SpaceError::EmptySource(self.representation.clone()));
        }
        Ok(result)
    }

    fn invalid(&self, message: impl Into<String>) -> SpaceError {
        SpaceError::InvalidSource {
            representation: self.representation.clone(),
            message: message.into(),
        }
    }
}

/// The textual form of a scalar id; other JSON types are not ids.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl<T: EntityKey> RepresentationSource<T> for JsonSource<T> {
    fn representation(&self) -> &Representation {
        &self.representation
    }

    fn load(&self) -> Result<BTreeMap<T, Vector>, SpaceError> {
        if let Some(cached) = self.cached.get() {
            return Ok(cached.clone());
        }

        let parsed = self.parse(&self.read()?)?;
        debug!(
            representation = %self.representation,
            entities = parsed.len(),
            "loaded json representation source"
        );

        // A concurrent first load may have won the race; both parses are identical.
        Ok(self.cached.get_or_init(|| parsed).clone())
    }

    fn dimension(&self) -> Option<usize> {
        self.cached.get().and_then(|map| map.values().next()).map(Vector::dim)
    }
}
