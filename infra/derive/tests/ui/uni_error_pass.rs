use std::borrow::Cow;
use uni_derive::uni_error;

#[uni_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    std::fs::read_to_string("missing.json").context("Reading demo file")
}

fn main() {
    let _ = read();
    let _ = DemoError::from("boom");
}
