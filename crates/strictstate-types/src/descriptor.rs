use serde::{Deserialize, Serialize};
use strictstate_core::types::ClassName;

use crate::annotation::{parse_type, AnnotationError, TypeContext};

/// One declared type. A property's full declaration is a `Vec<TypeDescriptor>`
/// read as a union; an empty set means the property is untyped.
///
/// Serializes as its annotation text (`?int`, `Foo[]`, `int|string`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TypeDescriptor {
    Mixed,
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Callable,
    Class(ClassName),
    Nullable(Box<TypeDescriptor>),
    Union(Vec<TypeDescriptor>),
    /// A homogeneous array, written `T[]`.
    Collection(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn class(name: impl Into<ClassName>) -> Self {
        TypeDescriptor::Class(name.into())
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Nullable(Box::new(inner))
    }

    pub fn collection_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Collection(Box::new(inner))
    }

    /// Whether null satisfies this descriptor.
    pub fn accepts_null(&self) -> bool {
        match self {
            TypeDescriptor::Mixed | TypeDescriptor::Null | TypeDescriptor::Nullable(_) => true,
            TypeDescriptor::Union(members) => members.iter().any(|m| m.accepts_null()),
            _ => false,
        }
    }

    fn is_compound(&self) -> bool {
        matches!(self, TypeDescriptor::Union(_))
    }
}

/// Render a descriptor set in annotation syntax.
pub fn display_types(types: &[TypeDescriptor]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

impl TypeDescriptor {
    /// `qualified` prefixes class names with `\` so they can never be read
    /// back as a keyword (`Parent`, `Self`, `Int`).
    fn render(&self, f: &mut std::fmt::Formatter<'_>, qualified: bool) -> std::fmt::Result {
        match self {
            TypeDescriptor::Mixed => f.write_str("mixed"),
            TypeDescriptor::Null => f.write_str("null"),
            TypeDescriptor::Bool => f.write_str("bool"),
            TypeDescriptor::Int => f.write_str("int"),
            TypeDescriptor::Float => f.write_str("float"),
            TypeDescriptor::String => f.write_str("string"),
            TypeDescriptor::Array => f.write_str("array"),
            TypeDescriptor::Object => f.write_str("object"),
            TypeDescriptor::Callable => f.write_str("callable"),
            TypeDescriptor::Class(name) if qualified => write!(f, "\\{name}"),
            TypeDescriptor::Class(name) => write!(f, "{name}"),
            TypeDescriptor::Nullable(inner) => {
                f.write_str("?")?;
                inner.render_grouped(f, qualified)
            }
            TypeDescriptor::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    member.render(f, qualified)?;
                }
                Ok(())
            }
            TypeDescriptor::Collection(inner) => {
                inner.render_grouped(f, qualified)?;
                f.write_str("[]")
            }
        }
    }

    fn render_grouped(&self, f: &mut std::fmt::Formatter<'_>, qualified: bool) -> std::fmt::Result {
        if self.is_compound() {
            f.write_str("(")?;
            self.render(f, qualified)?;
            f.write_str(")")
        } else {
            self.render(f, qualified)
        }
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, false)
    }
}

/// Serialized form: annotation text with fully-qualified class names.
struct Qualified<'a>(&'a TypeDescriptor);

impl std::fmt::Display for Qualified<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.render(f, true)
    }
}

impl From<TypeDescriptor> for String {
    fn from(t: TypeDescriptor) -> Self {
        Qualified(&t).to_string()
    }
}

impl TryFrom<String> for TypeDescriptor {
    type Error = AnnotationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let mut types = parse_type(&text, &TypeContext::default())?;
        if types.len() == 1 {
            Ok(types.remove(0))
        } else {
            Ok(TypeDescriptor::Union(types))
        }
    }
}
