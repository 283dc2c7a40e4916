//! # Web Invoke
//!
//! Embedded web pages ask the host application to navigate, switch tabs or post
//! messages by sending `{ "name": ..., "arg": ... }`. This crate decodes those
//! messages and forwards them to an injected [`AppService`].
//!
//! ```rust
//! use serde_json::json;
//! use uni_kernel::domain::invoke::{InvocationName, InvocationRequest, PageTarget};
//! use uni_webview::{NoopAppService, WebInvokeDispatcher};
//!
//! let dispatcher = WebInvokeDispatcher::new(NoopAppService);
//! let request = InvocationRequest::new(InvocationName::NavigateTo, json!({ "url": "/pages/a" }));
//! dispatcher.dispatch(request, &PageTarget::Single(1)).unwrap();
//! ```

mod dispatcher;
mod error;
mod service;

pub use crate::dispatcher::WebInvokeDispatcher;
pub use crate::error::{ServiceFailure, WebviewError, WebviewErrorExt};
pub use crate::service::{AppService, NoopAppService};
