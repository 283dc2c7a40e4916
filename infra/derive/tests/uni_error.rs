use std::borrow::Cow;
use uni_derive::uni_error;

#[uni_error]
pub enum SampleError {
    #[error("Read failed{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Parse failed{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_read() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "pages.json"))
}

#[test]
fn uni_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/uni_error_pass.rs");
}

#[test]
fn source_errors_convert_with_context() {
    let err = failing_read().context("Loading project").unwrap_err();

    assert!(matches!(err, SampleError::Read { context: Some(ref c), .. } if c == "Loading project"));
    assert_eq!(err.to_string(), "Read failed (Loading project): pages.json");
}

#[test]
fn question_mark_uses_generated_from() {
    fn run() -> Result<(), SampleError> {
        failing_read()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, SampleError::Read { context: None, .. }));
    assert_eq!(err.to_string(), "Read failed: pages.json");
}

#[test]
fn context_is_attached_to_own_variants() {
    let res: Result<(), SampleError> =
        Err(SampleError::Parse { message: "trailing garbage".into(), context: None });

    let err = res.context("manifest.json").unwrap_err();
    assert_eq!(err.to_string(), "Parse failed (manifest.json): trailing garbage");
}

#[test]
fn strings_fall_back_to_internal() {
    let borrowed = SampleError::from("unexpected state");
    let owned = SampleError::from(format!("bad value {}", 7));

    assert!(matches!(borrowed, SampleError::Internal { .. }));
    assert_eq!(owned.to_string(), "Internal sample error: bad value 7");
}
