use strictstate_core::object::Object;
use strictstate_core::registry::ClassRegistry;
use strictstate_core::types::ClassName;
use strictstate_core::value::Value;
use strictstate_types::descriptor::TypeDescriptor;

/// Decides whether a runtime value satisfies a type descriptor.
///
/// Class descriptors are checked against the inheritance chain when a
/// registry is attached, and by exact class name otherwise.
#[derive(Debug, Clone, Copy)]
pub struct TypeConformance<'r> {
    registry: Option<&'r ClassRegistry>,
    strict_scalars: bool,
}

impl Default for TypeConformance<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> TypeConformance<'r> {
    pub fn new() -> Self {
        Self {
            registry: None,
            strict_scalars: true,
        }
    }

    pub fn with_registry(mut self, registry: &'r ClassRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// When false, ints also satisfy `float`.
    pub fn strict_scalars(mut self, strict: bool) -> Self {
        self.strict_scalars = strict;
        self
    }

    pub fn conforms(&self, ty: &TypeDescriptor, value: &Value) -> bool {
        match (ty, value) {
            (TypeDescriptor::Mixed, _) => true,
            (TypeDescriptor::Null, Value::Null) => true,
            (TypeDescriptor::Bool, Value::Bool(_)) => true,
            (TypeDescriptor::Int, Value::Int(_)) => true,
            (TypeDescriptor::Float, Value::Float(_)) => true,
            (TypeDescriptor::Float, Value::Int(_)) => !self.strict_scalars,
            (TypeDescriptor::String, Value::String(_)) => true,
            (TypeDescriptor::Array, Value::Array(_)) => true,
            (TypeDescriptor::Object, Value::Object(_)) => true,
            (TypeDescriptor::Callable, Value::Callable(_)) => true,
            (TypeDescriptor::Class(name), Value::Object(obj)) => self.is_instance(obj, name),
            (TypeDescriptor::Nullable(_), Value::Null) => true,
            (TypeDescriptor::Nullable(inner), v) => self.conforms(inner, v),
            (TypeDescriptor::Union(members), v) => self.conforms_any(members, v),
            (TypeDescriptor::Collection(inner), Value::Array(items)) => {
                items.iter().all(|item| self.conforms(inner, item))
            }
            _ => false,
        }
    }

    /// Whether `value` satisfies at least one descriptor of a union.
    pub fn conforms_any(&self, types: &[TypeDescriptor], value: &Value) -> bool {
        types.iter().any(|t| self.conforms(t, value))
    }

    fn is_instance(&self, obj: &Object, class: &ClassName) -> bool {
        match self.registry {
            Some(registry) => registry.is_a(obj.class(), class),
            None => obj.class() == class,
        }
    }
}
