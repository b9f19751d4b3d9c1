use std::borrow::Cow;
use subreg_derive::subreg_error;

#[subreg_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String> {
    std::fs::read_to_string("/definitely/missing").context("reading fixture")
}

fn reject() -> Result<()> {
    Err(DemoError::Rejected { message: "nope".into(), context: None }).context("checking")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().starts_with("IO error (reading fixture)"));

    let err = reject().unwrap_err();
    assert_eq!(err.to_string(), "Rejected (checking): nope");

    let converted: DemoError = std::io::Error::other("boom").into();
    assert!(matches!(converted, DemoError::Io { context: None, .. }));
}
