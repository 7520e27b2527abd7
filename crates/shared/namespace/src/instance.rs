use crate::error::NamespaceError;
use crate::namespace::{Member, Namespace};
use std::any::Any;
use std::sync::Arc;
use tracing::trace;
use xacc_object::{Args, AttrError, Attributes, Callable, IntoAttrPath, Value};

/// A member resolved on an instance: a child instance or a bound method.
#[derive(Debug, Clone)]
pub enum BoundMember {
    Namespace(NamespaceInstance),
    /// The registered function with the instance's data bound as first argument.
    Method(Callable),
}

impl BoundMember {
    #[must_use]
    pub const fn as_namespace(&self) -> Option<&NamespaceInstance> {
        match self {
            Self::Namespace(instance) => Some(instance),
            Self::Method(_) => None,
        }
    }

    #[must_use]
    pub const fn as_method(&self) -> Option<&Callable> {
        match self {
            Self::Method(method) => Some(method),
            Self::Namespace(_) => None,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Namespace(instance) => Value::Object(Arc::new(instance)),
            Self::Method(method) => Value::Callable(method),
        }
    }
}

/// A namespace bound to one data value.
///
/// The data is fixed at construction. Child namespaces resolved from an
/// instance are bound to the very same data, so `instance.sub.subsub.func()`
/// still acts on what was originally wrapped.
#[derive(Debug, Clone)]
pub struct NamespaceInstance {
    namespace: Namespace,
    data: Value,
}

impl NamespaceInstance {
    pub(crate) const fn new(namespace: Namespace, data: Value) -> Self {
        Self { namespace, data }
    }

    /// The wrapped data.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Reads `name` on the instance.
    ///
    /// # Errors
    /// [`NamespaceError::UnknownMember`] if `name` is neither a child namespace
    /// nor a function of this namespace.
    pub fn resolve(&self, name: &str) -> Result<BoundMember, NamespaceError> {
        match self.namespace.lookup(name) {
            Some(Member::Namespace(child)) => {
                Ok(BoundMember::Namespace(child.bind(self.data.clone())))
            },
            Some(Member::Function(function)) => {
                Ok(BoundMember::Method(function.bind_first(self.data.clone())))
            },
            None => Err(NamespaceError::UnknownMember {
                type_name: self.namespace.name().to_owned().into(),
                name: name.to_owned().into(),
                context: None,
            }),
        }
    }

    /// Resolves a dotted path of members (`["sub", "subsub", "func"]`).
    ///
    /// # Errors
    /// An invalid-path [`NamespaceError::Attr`] for an unusable path and
    /// [`NamespaceError::UnknownMember`] at the first name that does not resolve.
    pub fn resolve_path(&self, path: impl IntoAttrPath) -> Result<BoundMember, NamespaceError> {
        let path = path.into_attr_path()?;
        let mut member = BoundMember::Namespace(self.clone());
        for name in path.names() {
            member = match member {
                BoundMember::Namespace(instance) => instance.resolve(name)?,
                BoundMember::Method(method) => {
                    return Err(NamespaceError::UnknownMember {
                        type_name: format!("function {}", method.name()).into(),
                        name: name.clone().into(),
                        context: None,
                    });
                },
            };
        }
        Ok(member)
    }

    /// Calls the function at a dotted path with `args`
    /// (`instance.sub.subsub.func(*args, **kwargs)`).
    ///
    /// # Errors
    /// Resolution errors from [`NamespaceInstance::resolve_path`],
    /// [`NamespaceError::NotCallable`] if the path ends on a namespace, and
    /// [`NamespaceError::Attr`] wrapping the function's own failure.
    pub fn call(&self, path: impl IntoAttrPath, args: Args) -> Result<Value, NamespaceError> {
        match self.resolve_path(path)? {
            BoundMember::Method(method) => {
                trace!(
                    namespace = self.namespace.path(),
                    function = method.name(),
                    "Calling accessor function"
                );
                Ok(method.call(args)?)
            },
            BoundMember::Namespace(instance) => Err(NamespaceError::NotCallable {
                type_name: instance.namespace.name().to_owned().into(),
                context: None,
            }),
        }
    }

    /// Instances are immutable: every assignment fails.
    ///
    /// # Errors
    /// Always [`NamespaceError::InstanceImmutable`].
    pub fn assign(&self, name: &str, _value: Value) -> Result<(), NamespaceError> {
        Err(NamespaceError::InstanceImmutable { name: name.to_owned().into(), context: None })
    }

    /// Same listing as the namespace: child and function names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.namespace.names()
    }
}

impl Attributes for NamespaceInstance {
    fn type_name(&self) -> &str {
        self.namespace.name()
    }

    fn attr(&self, name: &str) -> Option<Value> {
        self.resolve(name).ok().map(BoundMember::into_value)
    }

    fn set_attr(&self, name: &str, value: Value) -> Result<(), AttrError> {
        self.assign(name, value).map_err(AttrError::from)
    }

    fn del_attr(&self, name: &str) -> Result<(), AttrError> {
        Err(NamespaceError::InstanceImmutable { name: name.to_owned().into(), context: None }.into())
    }

    fn attr_names(&self) -> Vec<String> {
        self.names()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_arg(data: &Value, args: Args) -> Result<Value, AttrError> {
        Ok(args.get(0).cloned().unwrap_or_else(|| data.clone()))
    }

    #[test]
    fn unknown_member_names_type_and_attribute() {
        let instance = Namespace::new("Accessor").bind(Value::None);
        let err = instance.resolve("missing").unwrap_err();
        assert_eq!(err.to_string(), "'Accessor' object has no attribute \"missing\"");
    }

    #[test]
    fn instance_reads_never_create_namespaces() {
        let root = Namespace::new("Accessor");
        let instance = root.bind(Value::None);
        assert!(instance.resolve("sub").is_err());
        assert!(root.names().is_empty());
    }

    #[test]
    fn methods_receive_the_bound_data_first() {
        let root = Namespace::new("Accessor");
        root.register_fn("echo", first_arg).unwrap();
        let data = Value::opaque(vec![1.0_f64, 2.0]);
        let instance = root.bind(data.clone());

        assert_eq!(instance.call(["echo"], Args::new()).unwrap(), data);
        assert_eq!(instance.call(["echo"], Args::new().arg(5)).unwrap(), Value::Int(5));
    }

    #[test]
    fn calling_a_namespace_is_an_error() {
        let root = Namespace::new("Accessor");
        root.register_fn_path(["sub", "func"], first_arg).unwrap();
        let err = root.bind(Value::None).call(["sub"], Args::new()).unwrap_err();
        assert!(matches!(err, NamespaceError::NotCallable { .. }));
    }

    #[test]
    fn members_of_methods_do_not_exist() {
        let root = Namespace::new("Accessor");
        root.register_fn("func", first_arg).unwrap();
        let err = root.bind(Value::None).resolve_path(["func", "inner"]).unwrap_err();
        assert!(matches!(err, NamespaceError::UnknownMember { .. }));
    }

    #[test]
    fn assignment_is_refused() {
        let instance = Namespace::new("Accessor").bind(Value::None);
        let err = instance.assign("x", Value::Int(1)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot set a value to the instance");

        let err = instance.set_attr("x", Value::Int(1)).unwrap_err();
        assert!(matches!(err, AttrError::ReadOnly { .. }));
        assert_eq!(
            err.to_string(),
            "the instance is read-only (Cannot set a value to the instance)"
        );
        assert!(matches!(instance.del_attr("x"), Err(AttrError::ReadOnly { .. })));
    }
}
