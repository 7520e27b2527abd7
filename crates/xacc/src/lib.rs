//! Facade crate for the accessor toolkit.
//! Re-exports the object model and the namespace construct under one name.
//! Keep this crate thin: it should compose other crates, not implement behavior.
//!
//! ## Usage
//! - Add `xacc` (with the `logger` feature for the logging bootstrap).
//! - `use xacc::prelude::*;` brings the everyday types into scope.

pub use xacc_namespace as namespace;
pub use xacc_object as object;

#[cfg(feature = "logger")]
pub use xacc_logger as logger;

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

pub mod prelude {
    pub use xacc_namespace::{
        BoundMember, Member, Namespace, NamespaceError, NamespaceErrorExt, NamespaceInstance,
    };
    pub use xacc_object::{
        Args, AttrError, AttrErrorExt, AttrPath, Attributes, Callable, IntoAttrPath, Object,
        Value, del_nested_attr, get_nested_attr, has_nested_attr, set_nested_attr,
    };

    #[cfg(feature = "logger")]
    pub use xacc_logger::{Logger, LoggerError};
}
