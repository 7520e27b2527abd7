//! # Accessor Namespaces
//!
//! Attach functions to an opaque data value as if they were its methods,
//! organised under arbitrary dotted paths (`instance.sub.subsub.func()`),
//! without touching the data's own type.
//!
//! ## Overview
//!
//! * [`Namespace`]: a shared registry of child namespaces and functions. Reading
//!   an unknown name on a namespace declares an empty child on the spot, so any
//!   dotted path can be registered into.
//! * [`NamespaceInstance`]: a namespace bound to one data [`Value`]. Child
//!   namespaces resolve to instances bound to the same data; functions resolve to
//!   methods that receive the data as their first argument.
//!
//! Both types implement [`xacc_object::Attributes`], so the nested attribute
//! helpers of `xacc_object` work on them directly.
//!
//! # Example
//!
//! ```rust
//! use xacc_namespace::{Namespace, NamespaceError};
//! use xacc_object::{Args, AttrError, Value};
//!
//! # fn main() -> Result<(), NamespaceError> {
//! let accessor = Namespace::new("Accessor");
//!
//! // Library author: register under a dotted path.
//! accessor.register_fn_path(["text", "shout"], |data: &Value, args: Args| {
//!     let text = data.as_str().ok_or(AttrError::from("expected a string"))?;
//!     let times = args.get(0).and_then(Value::as_int).unwrap_or(1);
//!     Ok(Value::from(text.to_uppercase().repeat(usize::try_from(times).unwrap_or(1))))
//! })?;
//!
//! // End user: wrap data and call through the path.
//! let instance = accessor.bind("hey");
//! assert_eq!(instance.call(["text", "shout"], Args::new().arg(2))?, Value::from("HEYHEY"));
//! # Ok(())
//! # }
//! ```
//!
//! [`Value`]: xacc_object::Value

mod error;
mod instance;
mod namespace;

pub use error::{NamespaceError, NamespaceErrorExt};
pub use instance::{BoundMember, NamespaceInstance};
pub use namespace::{Member, Namespace, RESERVED_NAMES, accessor_fn};
