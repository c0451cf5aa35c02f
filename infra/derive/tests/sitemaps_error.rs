use sitemaps_derive::sitemaps_error;
use std::borrow::Cow;

#[sitemaps_error]
pub enum ProbeError {
    #[error("Probe I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Probe rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal probe error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String, ProbeError> {
    std::fs::read_to_string("/definitely/not/here.json").context("Loading probe fixture")
}

#[test]
fn sitemaps_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/sitemaps_error_pass.rs");
}

#[test]
fn source_errors_convert_and_carry_context() {
    let err = read_missing().expect_err("file must not exist");
    assert!(matches!(err, ProbeError::Io { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Probe I/O error (Loading probe fixture): "));
}

#[test]
fn context_is_attached_to_own_results() {
    let result: Result<(), ProbeError> =
        Err(ProbeError::Rejected { message: "duplicate".into(), context: None });

    let err = result.context("registering posts").expect_err("still an error");
    assert_eq!(err.to_string(), "Probe rejected (registering posts): duplicate");
}

#[test]
fn strings_fall_back_to_internal() {
    let owned = ProbeError::from(String::from("owned"));
    let borrowed = ProbeError::from("borrowed");

    assert_eq!(owned.to_string(), "Internal probe error: owned");
    assert!(matches!(borrowed, ProbeError::Internal { message: Cow::Borrowed("borrowed"), .. }));
}

#[test]
fn question_mark_uses_generated_from() {
    fn io() -> Result<(), ProbeError> {
        Err(std::io::Error::other("disk gone"))?;
        Ok(())
    }

    let err = io().expect_err("io error converts");
    assert_eq!(err.to_string(), "Probe I/O error: disk gone");
}
