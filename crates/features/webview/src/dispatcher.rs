use crate::error::{ServiceFailure, WebviewError, WebviewErrorExt};
use crate::service::AppService;
use tracing::{debug, trace};
use uni_kernel::domain::invoke::{InvocationName, InvocationRequest, PageTarget};

/// Routes web-invoke requests to the like-named [`AppService`] capability.
#[derive(Debug, Clone, Default)]
pub struct WebInvokeDispatcher<S> {
    service: S,
}

impl<S: AppService> WebInvokeDispatcher<S> {
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Forwards `request.arg` to the service capability named by `request.name`.
    ///
    /// `postMessage` is accepted and dropped without touching the service.
    /// `page_id` is not consulted yet.
    ///
    /// # Errors
    /// Whatever the service capability returns, unchanged.
    pub fn dispatch(&self, request: InvocationRequest, page_id: &PageTarget) -> Result<(), S::Error> {
        let InvocationRequest { name, arg } = request;
        debug!(%name, pages = ?page_id.ids(), "Dispatching web invoke");

        match name {
            InvocationName::NavigateTo => self.service.navigate_to(arg),
            InvocationName::NavigateBack => self.service.navigate_back(arg),
            InvocationName::SwitchTab => self.service.switch_tab(arg),
            InvocationName::ReLaunch => self.service.re_launch(arg),
            InvocationName::RedirectTo => self.service.redirect_to(arg),
            InvocationName::PostMessage => {
                // TODO: route to the target pages once navigate-back, component
                // teardown and share events are handled on this side.
                trace!(?arg, "postMessage ignored");
                Ok(())
            },
        }
    }

    /// Decodes a raw JSON message and dispatches it.
    ///
    /// # Errors
    /// * [`WebviewError::Decode`] for malformed JSON or an unknown operation name.
    /// * [`WebviewError::Service`] when the service capability fails.
    pub fn dispatch_json(&self, raw: &str, page_id: &PageTarget) -> Result<(), WebviewError>
    where
        S::Error: std::error::Error + Send + Sync + 'static,
    {
        let request: InvocationRequest =
            serde_json::from_str::<InvocationRequest>(raw).context("expected { \"name\", \"arg\" }")?;
        let name = request.name;

        self.dispatch(request, page_id)
            .map_err(|err| WebviewError::from(ServiceFailure::from(err)))
            .context(name.to_string())
    }
}
