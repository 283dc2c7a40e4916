use std::borrow::Cow;

/// Boxed failure reported by an [`AppService`](crate::AppService) implementation.
pub type ServiceFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

#[uni_derive::uni_error]
pub enum WebviewError {
    /// The inbound message is not a `{ name, arg }` object with a known name.
    #[error("Failed to decode web invoke message{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The application service rejected the call.
    #[error("App service failed{}: {source}", format_context(.context))]
    Service { source: ServiceFailure, context: Option<Cow<'static, str>> },
}
