//! Dotted-path attribute access on arbitrary attribute graphs.
//!
//! `get_nested_attr(x, ["y", "z"], None)` is the equivalent of reading `x.y.z`.

use crate::error::AttrError;
use crate::object::Attributes;
use crate::path::IntoAttrPath;
use crate::value::Value;
use tracing::trace;

/// Reads a nested attribute.
///
/// Resolution walks one name per step. When a step finds nothing, the
/// `default` (if any) is returned right there and the remaining names are not
/// visited; without a default the step fails with
/// [`AttrError::MissingAttribute`] naming the object and the name at that level.
/// A non-object value has no attributes, so stepping into it is a miss.
///
/// # Errors
/// [`AttrError::InvalidPath`] before any access if `names` is not a usable
/// sequence of names; [`AttrError::MissingAttribute`] as described above.
///
/// # Example
/// ```rust
/// use xacc_object::{Object, Value, get_nested_attr};
///
/// let data = Object::default().with("a", Object::default().with("b", 7));
/// assert_eq!(get_nested_attr(&data, ["a", "b"], None).unwrap(), Value::Int(7));
/// assert_eq!(get_nested_attr(&data, ["a", "x"], Some(Value::Int(0))).unwrap(), Value::Int(0));
/// ```
pub fn get_nested_attr(
    obj: &dyn Attributes,
    names: impl IntoAttrPath,
    default: Option<Value>,
) -> Result<Value, AttrError> {
    let path = names.into_attr_path()?;
    walk(obj, path.names(), default.as_ref())
}

/// Assigns a nested attribute: `set_nested_attr(x, ["y", "z"], v)` is `x.y.z = v`.
///
/// All names but the last are resolved with [`get_nested_attr`] (no default),
/// then the last one is assigned on the resolved parent.
///
/// # Errors
/// [`AttrError::InvalidPath`] for an unusable path, [`AttrError::MissingAttribute`]
/// if a parent does not resolve to an object, or whatever the parent's
/// [`Attributes::set_attr`] returns.
pub fn set_nested_attr(
    obj: &dyn Attributes,
    names: impl IntoAttrPath,
    value: Value,
) -> Result<(), AttrError> {
    let path = names.into_attr_path()?;
    let (parent, last) = path.split_last();
    trace!(path = %path, "Setting nested attribute");

    if parent.is_empty() {
        return obj.set_attr(last, value);
    }
    let target = walk(obj, parent, None)?;
    as_parent(&target, last)?.set_attr(last, value)
}

/// Removes a nested attribute: `del_nested_attr(x, ["y", "z"])` is `del x.y.z`.
///
/// # Errors
/// Same as [`set_nested_attr`]; deleting a missing last name is
/// [`AttrError::MissingAttribute`].
pub fn del_nested_attr(obj: &dyn Attributes, names: impl IntoAttrPath) -> Result<(), AttrError> {
    let path = names.into_attr_path()?;
    let (parent, last) = path.split_last();
    trace!(path = %path, "Deleting nested attribute");

    if parent.is_empty() {
        return obj.del_attr(last);
    }
    let target = walk(obj, parent, None)?;
    as_parent(&target, last)?.del_attr(last)
}

/// Whether [`get_nested_attr`] (without default) would succeed.
///
/// Only [`AttrError::MissingAttribute`] turns into `Ok(false)`.
///
/// # Errors
/// Every other error, notably [`AttrError::InvalidPath`], is returned as is.
pub fn has_nested_attr(obj: &dyn Attributes, names: impl IntoAttrPath) -> Result<bool, AttrError> {
    match get_nested_attr(obj, names, None) {
        Ok(_) => Ok(true),
        Err(err) if err.is_missing() => Ok(false),
        Err(err) => Err(err),
    }
}

fn walk(obj: &dyn Attributes, names: &[String], default: Option<&Value>) -> Result<Value, AttrError> {
    let Some((first, rest)) = names.split_first() else {
        return Err(AttrError::invalid_path("At least one name must be specified"));
    };

    let Some(attr) = obj.attr(first) else {
        return default.cloned().ok_or_else(|| AttrError::missing(describe(obj), first));
    };

    let Some(next) = rest.first() else {
        return Ok(attr);
    };
    match attr.as_object() {
        Some(object) => walk(object.as_ref(), rest, default),
        None => default.cloned().ok_or_else(|| AttrError::missing(describe_value(&attr), next)),
    }
}

fn as_parent<'a>(target: &'a Value, name: &str) -> Result<&'a dyn Attributes, AttrError> {
    target
        .as_object()
        .map(|object| object.as_ref())
        .ok_or_else(|| AttrError::missing(describe_value(target), name))
}

fn describe(obj: &dyn Attributes) -> String {
    format!("'{}' object", obj.type_name())
}

fn describe_value(value: &Value) -> String {
    format!("'{}' object", value.type_name())
}
