use std::borrow::Cow;
use xacc_object::AttrError;

/// Errors raised by namespace registration and resolution.
#[xacc_derive::xacc_error]
pub enum NamespaceError {
    /// The value is neither a namespace nor a function.
    #[error("Invalid registration of {name:?} on {namespace}{}: {message}", format_context(.context))]
    InvalidRegistration {
        namespace: Cow<'static, str>,
        name: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The name is used for internal bookkeeping and cannot be an accessor member.
    #[error("Reserved name {name:?} on {namespace}{}", format_context(.context))]
    ReservedName {
        namespace: Cow<'static, str>,
        name: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Namespace instances never accept assignments.
    #[error("Cannot set a value to the instance{}", format_context(.context))]
    InstanceImmutable { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Instance lookup of a name that is neither a child namespace nor a function.
    #[error("'{type_name}' object has no attribute {name:?}{}", format_context(.context))]
    UnknownMember {
        type_name: Cow<'static, str>,
        name: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A call path ended on a namespace instead of a function.
    #[error("'{type_name}' object is not callable{}", format_context(.context))]
    NotCallable { type_name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failure from the attribute layer or from a called function.
    #[error("Attribute error{}: {source}", format_context(.context))]
    Attr { source: AttrError, context: Option<Cow<'static, str>> },
}

impl NamespaceError {
    /// Whether the error comes from an unusable name or name sequence.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::Attr { source: AttrError::InvalidPath { .. }, .. })
    }
}

impl From<NamespaceError> for AttrError {
    fn from(err: NamespaceError) -> Self {
        match err {
            NamespaceError::Attr { source, .. } => source,
            NamespaceError::UnknownMember { type_name, name, context } => {
                Self::MissingAttribute { target: format!("'{type_name}' object").into(), name, context }
            },
            err @ NamespaceError::InstanceImmutable { .. } => {
                Self::ReadOnly { target: "the instance".into(), context: Some(err.to_string().into()) }
            },
            NamespaceError::InvalidRegistration { namespace, name, message, context } => {
                Self::InvalidValue { target: namespace, name, message, context }
            },
            NamespaceError::ReservedName { namespace, name, context } => Self::InvalidValue {
                target: namespace,
                name,
                message: "name is reserved".into(),
                context,
            },
            err @ NamespaceError::NotCallable { .. } => {
                Self::Internal { message: err.to_string().into(), context: None }
            },
        }
    }
}
