use std::borrow::Cow;
use uni_kernel::jsonc::JsoncError;

/// Failures of feature resolution. All of them abort the build.
#[uni_derive::uni_error]
pub enum DefineError {
    /// A project configuration file is missing or unreadable.
    #[error("Failed to read project file{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A project configuration file is not valid JSON-with-comments.
    #[error("Failed to parse project file{}: {source}", format_context(.context))]
    Parse { source: JsoncError, context: Option<Cow<'static, str>> },

    /// `pages.json` parsed but has an unusable structure.
    #[error("Invalid pages.json{}: {message}", format_context(.context))]
    InvalidPages { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal define error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
