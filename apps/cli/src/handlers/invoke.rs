use crate::args::InvokeArgs;
use anyhow::{Context, Result};
use serde_json::Value;
use std::convert::Infallible;
use tracing::info;
use uni::domain::invoke::PageTarget;
use uni::webview::{AppService, WebInvokeDispatcher};

/// App service of the command line host: there is no runtime to drive, so each
/// capability call is logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAppService;

impl TracingAppService {
    #[allow(clippy::unnecessary_wraps)]
    fn call(capability: &'static str, arg: &Value) -> Result<(), Infallible> {
        info!(capability, %arg, "App service call");
        Ok(())
    }
}

impl AppService for TracingAppService {
    type Error = Infallible;

    fn navigate_to(&self, arg: Value) -> Result<(), Self::Error> {
        Self::call("navigateTo", &arg)
    }

    fn navigate_back(&self, arg: Value) -> Result<(), Self::Error> {
        Self::call("navigateBack", &arg)
    }

    fn switch_tab(&self, arg: Value) -> Result<(), Self::Error> {
        Self::call("switchTab", &arg)
    }

    fn re_launch(&self, arg: Value) -> Result<(), Self::Error> {
        Self::call("reLaunch", &arg)
    }

    fn redirect_to(&self, arg: Value) -> Result<(), Self::Error> {
        Self::call("redirectTo", &arg)
    }

    fn post_message(&self, arg: Value) -> Result<(), Self::Error> {
        Self::call("postMessage", &arg)
    }
}

/// Dispatches one inbound message through [`TracingAppService`].
///
/// # Errors
/// Returns an error if the message cannot be decoded.
pub fn dispatch_message(args: &InvokeArgs) -> Result<()> {
    let page_id = match args.page_ids.as_slice() {
        [id] => PageTarget::Single(*id),
        ids => PageTarget::Many(ids.to_vec()),
    };

    WebInvokeDispatcher::new(TracingAppService)
        .dispatch_json(&args.message, &page_id)
        .context("Failed to dispatch web invoke message")
}
