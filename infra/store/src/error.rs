use std::borrow::Cow;

#[sitemaps_derive::sitemaps_error]
pub enum StoreError {
    /// The fixture file could not be read.
    #[error("Store I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The fixture is not valid site JSON.
    #[error("Store fixture error{}: {source}", format_context(.context))]
    Fixture { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid home URL{}: {source}", format_context(.context))]
    HomeUrl { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
