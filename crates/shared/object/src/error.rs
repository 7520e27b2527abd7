use std::borrow::Cow;

/// Errors of the attribute protocol.
#[xacc_derive::xacc_error]
pub enum AttrError {
    /// The name sequence is empty, a bare string, or contains an unusable segment.
    #[error("Invalid attribute path{}: {message}", format_context(.context))]
    InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// `target` has no attribute `name`.
    #[error("{target} has no attribute {name:?}{}", format_context(.context))]
    MissingAttribute {
        target: Cow<'static, str>,
        name: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// `target` refuses attribute assignment or deletion.
    #[error("{target} is read-only{}", format_context(.context))]
    ReadOnly { target: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// `target` refuses the assigned value for `name`.
    #[error("Invalid value for {name:?} on {target}{}: {message}", format_context(.context))]
    InvalidValue {
        target: Cow<'static, str>,
        name: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Failures raised by called functions.
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AttrError {
    pub(crate) fn missing(target: impl Into<Cow<'static, str>>, name: &str) -> Self {
        Self::MissingAttribute { target: target.into(), name: name.to_owned().into(), context: None }
    }

    pub(crate) fn invalid_path(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidPath { message: message.into(), context: None }
    }

    /// Whether this is the "attribute does not exist" kind.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingAttribute { .. })
    }
}
