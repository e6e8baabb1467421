use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Fully-qualified name of a class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct ClassName(String);

impl ClassName {
    /// Build a class name, dropping a leading namespace separator.
    pub fn new(name: impl AsRef<str>) -> Self {
        ClassName(name.as_ref().trim_start_matches('\\').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        ClassName::new(name)
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        ClassName::new(name)
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a property: its name plus the class that declared it.
///
/// Two classes in one hierarchy may each declare a private property with the
/// same name; the declaring class keeps them apart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId {
    pub declaring_class: ClassName,
    pub name: String,
}

impl PropertyId {
    pub fn new(declaring_class: impl Into<ClassName>, name: impl Into<String>) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::${}", self.declaring_class, self.name)
    }
}

/// Property visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property as declared in a class body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    /// Raw type annotation, either a bare type (`int|null`) or a doc block
    /// carrying an `@var` tag.
    #[serde(default)]
    pub annotation: Option<String>,
    /// Initial value assigned at instantiation. `None` leaves the property
    /// uninitialized.
    #[serde(default)]
    pub default: Option<Value>,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_static: false,
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A class declaration: name, optional parent, and own properties in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: ClassName,
    #[serde(default)]
    pub parent: Option<ClassName>,
    #[serde(default)]
    pub properties: Vec<PropertyDeclaration>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<ClassName>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            properties: vec![],
        }
    }

    pub fn extends(mut self, parent: impl Into<ClassName>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDeclaration) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDeclaration> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Errors raised by the object model and class registry.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown class: {0}")]
    UnknownClass(ClassName),

    #[error("Class already declared: {0}")]
    DuplicateClass(ClassName),

    #[error("Cyclic inheritance detected at class {0}")]
    CyclicInheritance(ClassName),

    #[error("Scope {scope} is not {class} or one of its ancestors")]
    ScopeNotInHierarchy { class: ClassName, scope: ClassName },

    #[error("Undeclared property: {0}")]
    UndeclaredProperty(PropertyId),

    #[error("Failed to read manifest {path}: {reason}")]
    Manifest { path: String, reason: String },
}
