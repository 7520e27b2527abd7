use crate::error::AttrError;
use crate::object::Attributes;
use fxhash::FxHashMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A dynamically typed attribute value.
///
/// Cloning is cheap: scalars are copied, everything else is reference-counted.
/// Objects, callables and opaque payloads compare by identity.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    /// A nested object exposing its own attributes.
    Object(Arc<dyn Attributes>),
    /// A function value.
    Callable(Callable),
    /// Any host value the attribute layer never inspects.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wraps an arbitrary host value.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Wraps a shared object.
    pub fn object<T: Attributes>(object: Arc<T>) -> Self {
        Self::Object(object)
    }

    /// Borrows the host value if this is an opaque payload of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The nested object, if this value has attributes.
    #[must_use]
    pub fn as_object(&self) -> Option<&Arc<dyn Attributes>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(callable) => Some(callable),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short type label used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Object(object) => object.type_name(),
            Self::Callable(_) => "function",
            Self::Opaque(_) => "opaque",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Callable(a), Self::Callable(b)) => a.ptr_eq(b),
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Object(object) => write!(f, "<{} object>", object.type_name()),
            Self::Callable(callable) => callable.fmt(f),
            Self::Opaque(_) => f.write_str("<opaque>"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Callable(v)
    }
}

type CallFn = dyn Fn(Args) -> Result<Value, AttrError> + Send + Sync;

/// A shared function value.
///
/// Clones share the same function; [`Callable::ptr_eq`] tells whether two
/// handles are the very same function.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<CallFn>,
}

impl Callable {
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(Args) -> Result<Value, AttrError> + Send + Sync + 'static,
    {
        Self { name: name.into(), func: Arc::new(func) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function.
    ///
    /// # Errors
    /// Whatever the function itself returns.
    pub fn call(&self, args: Args) -> Result<Value, AttrError> {
        (self.func)(args)
    }

    /// Returns a new callable that always receives `first` ahead of the caller's
    /// positional arguments. The result keeps this function's name.
    #[must_use]
    pub fn bind_first(&self, first: Value) -> Self {
        let func = Arc::clone(&self.func);
        Self {
            name: Arc::clone(&self.name),
            func: Arc::new(move |args: Args| func(args.prepend(first.clone()))),
        }
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}

/// Call arguments: positional values plus keyword values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    keywords: FxHashMap<String, Value>,
}

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword argument, replacing a previous one with the same key.
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(key.into(), value.into());
        self
    }

    /// Inserts `value` as the first positional argument.
    #[must_use]
    pub fn prepend(mut self, value: Value) -> Self {
        self.positional.insert(0, value);
        self
    }

    /// Splits off the first positional argument.
    #[must_use]
    pub fn split_first(mut self) -> Option<(Value, Self)> {
        if self.positional.is_empty() {
            return None;
        }
        let first = self.positional.remove(0);
        Some((first, self))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    #[must_use]
    pub fn keyword(&self, key: &str) -> Option<&Value> {
        self.keywords.get(key)
    }

    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Total number of arguments, positional and keyword.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self { positional, keywords: FxHashMap::default() }
    }
}
