use crate::error::AttrError;
use crate::value::Value;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::Any;
use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

/// Capability surface of anything that exposes named attributes.
///
/// Mutation goes through `&self`: attribute graphs are shared (`Arc`) and
/// implementors pick their own interior mutability, or refuse mutation
/// altogether with [`AttrError::ReadOnly`].
pub trait Attributes: Any + Debug + Send + Sync {
    /// Label used in error messages (e.g. `"'Accessor' object"`).
    fn type_name(&self) -> &str;

    /// Reads `name`, or `None` when the attribute does not exist.
    fn attr(&self, name: &str) -> Option<Value>;

    /// Assigns `name`.
    ///
    /// # Errors
    /// Implementation specific; read-only objects return [`AttrError::ReadOnly`].
    fn set_attr(&self, name: &str, value: Value) -> Result<(), AttrError>;

    /// Removes `name`.
    ///
    /// # Errors
    /// [`AttrError::MissingAttribute`] when `name` does not exist.
    fn del_attr(&self, name: &str) -> Result<(), AttrError>;

    /// Names visible on this object, sorted.
    fn attr_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A plain attribute bag: any name can be assigned, read and deleted.
#[derive(Debug)]
pub struct Object {
    type_name: Cow<'static, str>,
    attrs: RwLock<FxHashMap<String, Value>>,
}

impl Default for Object {
    fn default() -> Self {
        Self::new("object")
    }
}

impl Object {
    pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self { type_name: type_name.into(), attrs: RwLock::default() }
    }

    /// Builder-style assignment, handy for assembling fixtures.
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.write().insert(name.into(), value.into());
        self
    }

    /// Moves the object behind an `Arc` so it can be nested in a [`Value`].
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.read().is_empty()
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(Arc::new(object))
    }
}

impl From<Arc<Object>> for Value {
    fn from(object: Arc<Object>) -> Self {
        Self::Object(object)
    }
}

impl Attributes for Object {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn attr(&self, name: &str) -> Option<Value> {
        self.attrs.read().get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: Value) -> Result<(), AttrError> {
        self.attrs.write().insert(name.to_owned(), value);
        Ok(())
    }

    fn del_attr(&self, name: &str) -> Result<(), AttrError> {
        self.attrs
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AttrError::missing(format!("'{}' object", self.type_name), name))
    }

    fn attr_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.attrs.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
