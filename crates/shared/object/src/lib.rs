//! # Object Model
//!
//! A small dynamic attribute model plus dotted-path access on top of it.
//!
//! ## Overview
//!
//! * [`Value`]: cheap-to-clone dynamic values (scalars, nested objects, callables,
//!   opaque host payloads).
//! * [`Attributes`]: the capability surface of anything with named attributes.
//! * [`Object`]: a general-purpose attribute bag.
//! * [`AttrPath`]: a validated sequence of names (`["a", "b", "c"]` for `x.a.b.c`).
//! * [`get_nested_attr`], [`set_nested_attr`], [`del_nested_attr`],
//!   [`has_nested_attr`]: dotted-path access on any [`Attributes`] graph.
//!
//! # Example
//!
//! ```rust
//! use xacc_object::{AttrError, Object, Value, get_nested_attr, has_nested_attr, set_nested_attr};
//!
//! # fn main() -> Result<(), AttrError> {
//! let data = Object::new("Data").with("a", Object::new("Data").with("b", Object::new("Data")));
//!
//! set_nested_attr(&data, ["a", "b", "c"], Value::from("data"))?;
//! assert_eq!(get_nested_attr(&data, ["a", "b", "c"], None)?, Value::from("data"));
//! assert!(!has_nested_attr(&data, ["a", "nope"])?);
//!
//! // A bare string is not a sequence of names.
//! assert!(matches!(has_nested_attr(&data, "abc"), Err(AttrError::InvalidPath { .. })));
//! # Ok(())
//! # }
//! ```

mod error;
mod nested;
mod object;
mod path;
mod value;

pub use error::{AttrError, AttrErrorExt};
pub use nested::{del_nested_attr, get_nested_attr, has_nested_attr, set_nested_attr};
pub use object::{Attributes, Object};
pub use path::{AttrPath, IntoAttrPath};
pub use value::{Args, Callable, Value};
