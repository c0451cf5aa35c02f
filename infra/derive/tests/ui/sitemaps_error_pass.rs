use sitemaps_derive::sitemaps_error;
use std::borrow::Cow;

#[sitemaps_error]
pub enum FixtureError {
    #[error("Fixture I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing provider{}: {message}", format_context(.context))]
    MissingProvider { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let _ = FixtureError::from("boom");
}
