use std::borrow::Cow;
use xacc_derive::xacc_error;

#[xacc_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing attribute {name:?}")]
    Missing { name: Cow<'static, str> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
