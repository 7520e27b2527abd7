use std::borrow::Cow;
use xacc_derive::xacc_error;

#[xacc_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("opening manifest")
}

fn read_missing() -> Result<Vec<u8>, DemoError> {
    let bytes = std::fs::read("/definitely/not/here/xacc-manifest")?;
    Ok(bytes)
}

fn main() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let err = open().unwrap_err();
    assert_eq!(err.to_string(), "IO error (opening manifest): boom");

    let internal: DemoError = "bad state".into();
    let internal: Result<(), DemoError> = Err(internal);
    let err = internal.context("during lookup").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (during lookup): bad state");

    let owned: DemoError = String::from("owned").into();
    assert!(matches!(owned, DemoError::Internal { .. }));
}
