use crate::error::NamespaceError;
use crate::instance::NamespaceInstance;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use xacc_object::{Args, AttrError, AttrPath, Attributes, Callable, IntoAttrPath, Value};

/// Names used for internal bookkeeping; they can never be registered.
pub const RESERVED_NAMES: &[&str] = &["_accessed", "_accessors", "_functions"];

/// A registry member: either a child namespace or a function.
#[derive(Debug, Clone)]
pub enum Member {
    Namespace(Namespace),
    Function(Callable),
}

impl Member {
    #[must_use]
    pub const fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Self::Namespace(namespace) => Some(namespace),
            Self::Function(_) => None,
        }
    }

    #[must_use]
    pub const fn as_function(&self) -> Option<&Callable> {
        match self {
            Self::Function(function) => Some(function),
            Self::Namespace(_) => None,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Namespace(namespace) => Value::Object(Arc::new(namespace)),
            Self::Function(function) => Value::Callable(function),
        }
    }
}

impl From<Namespace> for Member {
    fn from(namespace: Namespace) -> Self {
        Self::Namespace(namespace)
    }
}

impl From<Callable> for Member {
    fn from(function: Callable) -> Self {
        Self::Function(function)
    }
}

#[derive(Debug)]
struct Registry {
    name: String,
    path: String,
    children: RwLock<FxHashMap<String, Namespace>>,
    functions: RwLock<FxHashMap<String, Callable>>,
}

/// One level of a dotted accessor path.
///
/// A `Namespace` is a cheap handle onto a shared registry of child namespaces
/// and functions. Clones see the same registry; every namespace, including the
/// ones created on demand, owns its registries and never shares them with a
/// parent or sibling.
///
/// # Example
///
/// ```rust
/// use xacc_namespace::{Namespace, NamespaceError};
/// use xacc_object::{Args, Value};
///
/// # fn main() -> Result<(), NamespaceError> {
/// let accessor = Namespace::new("Accessor");
/// accessor.register_fn_path(["sub", "subsub", "func"], |_data: &Value, _args: Args| Ok(Value::Int(1)))?;
///
/// let instance = accessor.bind(Value::from("data"));
/// assert_eq!(instance.call(["sub", "subsub", "func"], Args::new())?, Value::Int(1));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Namespace {
    registry: Arc<Registry>,
}

impl Namespace {
    /// Creates a root namespace with empty registries.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::with_path(name.clone(), name)
    }

    fn with_path(name: String, path: String) -> Self {
        Self {
            registry: Arc::new(Registry {
                name,
                path,
                children: RwLock::default(),
                functions: RwLock::default(),
            }),
        }
    }

    /// The namespace's own name (the last segment of its path).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.registry.name
    }

    /// The dotted path from the root namespace (e.g. `Accessor.sub.subsub`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.registry.path
    }

    /// Whether both handles point at the same namespace.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }

    /// Reads `name` on the namespace itself.
    ///
    /// Returns the child namespace or the function registered under `name`.
    /// An unknown name declares a new, empty child namespace on the spot, so
    /// any dotted path can be walked for registration.
    ///
    /// # Errors
    /// [`NamespaceError::ReservedName`] for internal names, and an invalid-path
    /// [`NamespaceError::Attr`] for empty or dotted names.
    pub fn resolve(&self, name: &str) -> Result<Member, NamespaceError> {
        self.check_name(name)?;
        if let Some(member) = self.lookup(name) {
            return Ok(member);
        }
        Ok(self.child_or_create(name))
    }

    /// Registers a child namespace or a function under `name`.
    ///
    /// A name lives in at most one registry: registering a function over a
    /// child namespace (or the reverse) replaces the previous entry.
    ///
    /// # Errors
    /// [`NamespaceError::ReservedName`] or an invalid-path [`NamespaceError::Attr`].
    pub fn register(&self, name: &str, member: impl Into<Member>) -> Result<(), NamespaceError> {
        self.check_name(name)?;

        let mut children = self.registry.children.write();
        let mut functions = self.registry.functions.write();
        match member.into() {
            Member::Namespace(namespace) => {
                if functions.remove(name).is_some() {
                    debug!(namespace = self.path(), name, "Function replaced by a namespace");
                }
                debug!(namespace = self.path(), name, child = namespace.path(), "Namespace registered");
                children.insert(name.to_owned(), namespace);
            },
            Member::Function(function) => {
                if children.remove(name).is_some() {
                    debug!(namespace = self.path(), name, "Namespace replaced by a function");
                }
                debug!(namespace = self.path(), name, function = function.name(), "Function registered");
                functions.insert(name.to_owned(), function);
            },
        }
        Ok(())
    }

    /// Registers a dynamically typed value.
    ///
    /// # Errors
    /// [`NamespaceError::InvalidRegistration`] unless `value` is a namespace
    /// object or a callable, plus everything [`Namespace::register`] returns.
    pub fn register_value(&self, name: &str, value: Value) -> Result<(), NamespaceError> {
        let member = match value {
            Value::Callable(function) => Member::Function(function),
            Value::Object(object) => match object.as_any().downcast_ref::<Self>() {
                Some(namespace) => Member::Namespace(namespace.clone()),
                None => return Err(self.invalid_registration(name)),
            },
            _ => return Err(self.invalid_registration(name)),
        };
        self.register(name, member)
    }

    /// Registers a data function under `name` and returns the stored callable.
    ///
    /// `func` receives the wrapped data first, then the caller's arguments.
    ///
    /// # Errors
    /// Same as [`Namespace::register`].
    pub fn register_fn<F>(&self, name: &str, func: F) -> Result<Callable, NamespaceError>
    where
        F: Fn(&Value, Args) -> Result<Value, AttrError> + Send + Sync + 'static,
    {
        let function = accessor_fn(name, func);
        self.register(name, function.clone())?;
        Ok(function)
    }

    /// Registers `member` at a dotted path below this namespace
    /// (`Accessor.sub.subsub.func = f`), creating missing namespaces on the way.
    ///
    /// # Errors
    /// An invalid-path [`NamespaceError::Attr`] for an unusable path,
    /// [`NamespaceError::InvalidRegistration`] when an intermediate name is a
    /// function, plus everything [`Namespace::register`] returns.
    pub fn register_path(
        &self,
        path: impl IntoAttrPath,
        member: impl Into<Member>,
    ) -> Result<(), NamespaceError> {
        let path = path.into_attr_path()?;
        let (parents, last) = path.split_last();
        self.descend(parents)?.register(last, member)
    }

    /// [`Namespace::register_fn`] at a dotted path.
    ///
    /// # Errors
    /// Same as [`Namespace::register_path`].
    pub fn register_fn_path<F>(
        &self,
        path: impl IntoAttrPath,
        func: F,
    ) -> Result<Callable, NamespaceError>
    where
        F: Fn(&Value, Args) -> Result<Value, AttrError> + Send + Sync + 'static,
    {
        let path = path.into_attr_path()?;
        let function = accessor_fn(path.last(), func);
        self.register_path(path, function.clone())?;
        Ok(function)
    }

    /// Resolves a dotted path on the namespace itself, creating missing
    /// namespaces like [`Namespace::resolve`] does.
    ///
    /// # Errors
    /// Same as [`Namespace::register_path`].
    pub fn resolve_path(&self, path: impl IntoAttrPath) -> Result<Member, NamespaceError> {
        let path = path.into_attr_path()?;
        let (parents, last) = path.split_last();
        self.descend(parents)?.resolve(last)
    }

    /// Child namespace and function names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.children.read().keys().cloned().collect();
        names.extend(self.registry.functions.read().keys().cloned());
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Wraps `data` in an instance of this namespace.
    pub fn bind(&self, data: impl Into<Value>) -> NamespaceInstance {
        NamespaceInstance::new(self.clone(), data.into())
    }

    /// Registered member under `name`, without creating anything.
    pub(crate) fn lookup(&self, name: &str) -> Option<Member> {
        if let Some(child) = self.registry.children.read().get(name) {
            return Some(Member::Namespace(child.clone()));
        }
        self.registry.functions.read().get(name).cloned().map(Member::Function)
    }

    /// Creates the child under the children lock, unless a concurrent
    /// registration put `name` into either registry first.
    fn child_or_create(&self, name: &str) -> Member {
        let mut children = self.registry.children.write();
        if let Some(child) = children.get(name) {
            return Member::Namespace(child.clone());
        }
        if let Some(function) = self.registry.functions.read().get(name) {
            return Member::Function(function.clone());
        }

        let child = Self::with_path(name.to_owned(), format!("{}.{name}", self.path()));
        trace!(namespace = self.path(), name, "Namespace created on first reference");
        children.insert(name.to_owned(), child.clone());
        Member::Namespace(child)
    }

    fn descend(&self, names: &[String]) -> Result<Self, NamespaceError> {
        let mut current = self.clone();
        for name in names {
            current = match current.resolve(name)? {
                Member::Namespace(child) => child,
                Member::Function(_) => {
                    return Err(NamespaceError::InvalidRegistration {
                        namespace: current.path().to_owned().into(),
                        name: name.clone().into(),
                        message: "a function cannot hold nested members".into(),
                        context: None,
                    });
                },
            };
        }
        Ok(current)
    }

    fn check_name(&self, name: &str) -> Result<(), NamespaceError> {
        if RESERVED_NAMES.contains(&name) {
            return Err(NamespaceError::ReservedName {
                namespace: self.path().to_owned().into(),
                name: name.to_owned().into(),
                context: None,
            });
        }
        AttrPath::new([name])?;
        Ok(())
    }

    fn invalid_registration(&self, name: &str) -> NamespaceError {
        NamespaceError::InvalidRegistration {
            namespace: self.path().to_owned().into(),
            name: name.to_owned().into(),
            message: "Value must be either a namespace or a function".into(),
            context: None,
        }
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("path", &self.registry.path)
            .field("names", &self.names())
            .finish()
    }
}

/// Builds a callable that treats its first positional argument as the
/// wrapped data and hands the rest to `func`.
pub fn accessor_fn<F>(name: &str, func: F) -> Callable
where
    F: Fn(&Value, Args) -> Result<Value, AttrError> + Send + Sync + 'static,
{
    let label = name.to_owned();
    Callable::new(name, move |args: Args| {
        let (data, rest) = args.split_first().ok_or_else(|| AttrError::Internal {
            message: format!("{label}() missing the data argument").into(),
            context: None,
        })?;
        func(&data, rest)
    })
}

impl Attributes for Namespace {
    fn type_name(&self) -> &str {
        self.name()
    }

    fn attr(&self, name: &str) -> Option<Value> {
        self.resolve(name).ok().map(Member::into_value)
    }

    fn set_attr(&self, name: &str, value: Value) -> Result<(), AttrError> {
        self.register_value(name, value).map_err(AttrError::from)
    }

    fn del_attr(&self, name: &str) -> Result<(), AttrError> {
        Err(AttrError::ReadOnly {
            target: format!("namespace {}", self.path()).into(),
            context: Some(format!("cannot remove {name:?}, registrations are permanent").into()),
        })
    }

    fn attr_names(&self) -> Vec<String> {
        self.names()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
