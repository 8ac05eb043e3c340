//! Explicit per-DTO schemas
//!
//! A [`Schema`] is a plain description of the fields an input shape accepts.
//! It replaces annotation-driven validation: every DTO owns exactly one
//! schema and a single generic validator interprets all of them.

/// Value type and format constraint for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string
    Text,
    /// UUID v4 string
    Uuid,
    /// String restricted to the listed members
    Enum(&'static [&'static str]),
    /// ISO-8601 calendar date (`YYYY-MM-DD`)
    Date,
    /// Whole number with optional inclusive bounds
    Integer { min: Option<i64>, max: Option<i64> },
    /// JSON boolean
    Boolean,
    /// Array of UUID v4 strings
    IdList,
    /// Array of strings
    TextList,
}

impl FieldKind {
    /// Integer without bounds
    pub const fn integer() -> Self {
        Self::Integer {
            min: None,
            max: None,
        }
    }

    /// Integer within `min..=max`
    pub const fn integer_between(min: i64, max: i64) -> Self {
        Self::Integer {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// One declared field of a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name (camelCase)
    pub name: &'static str,
    /// Type and format constraint
    pub kind: FieldKind,
    /// Whether the field must be present and non-null
    pub required: bool,
    /// Whether an explicit `null` is accepted; on an update it clears the
    /// stored value
    pub nullable: bool,
}

/// Named input shape: an ordered list of field specs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Start an empty schema
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Declare a required field
    pub fn required(self, name: &'static str, kind: FieldKind) -> Self {
        self.with_field(FieldSpec {
            name,
            kind,
            required: true,
            nullable: false,
        })
    }

    /// Declare an optional field that may be `null`
    pub fn optional(self, name: &'static str, kind: FieldKind) -> Self {
        self.with_field(FieldSpec {
            name,
            kind,
            required: false,
            nullable: true,
        })
    }

    /// Declare an optional field the record fills with a default
    ///
    /// The stored value is never empty, so `null` is rejected.
    pub fn defaulted(self, name: &'static str, kind: FieldKind) -> Self {
        self.with_field(FieldSpec {
            name,
            kind,
            required: false,
            nullable: false,
        })
    }

    fn with_field(mut self, spec: FieldSpec) -> Self {
        debug_assert!(
            self.field(spec.name).is_none(),
            "field {} declared twice on {}",
            spec.name,
            self.name
        );
        self.fields.push(spec);
        self
    }

    /// Schema name, used in logs and error output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All declared fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Wire names of every declared field
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|spec| spec.name).collect()
    }

    /// Fields that must be supplied
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|spec| spec.required)
    }
}

/// Derive an update shape from a create shape
///
/// Every field becomes optional; no field is added or removed and kinds are
/// kept as they are. Fields that were required stay non-nullable.
pub fn to_partial(schema: &Schema, name: &'static str) -> Schema {
    Schema {
        name,
        fields: schema
            .fields
            .iter()
            .map(|spec| FieldSpec {
                required: false,
                ..*spec
            })
            .collect(),
    }
}
