use serde_json::Value;
use std::convert::Infallible;

/// Capabilities of the application runtime reachable from web content.
///
/// Each method receives the message argument unchanged; interpreting it is up
/// to the runtime.
pub trait AppService {
    type Error;

    fn navigate_to(&self, arg: Value) -> Result<(), Self::Error>;
    fn navigate_back(&self, arg: Value) -> Result<(), Self::Error>;
    fn switch_tab(&self, arg: Value) -> Result<(), Self::Error>;
    fn re_launch(&self, arg: Value) -> Result<(), Self::Error>;
    fn redirect_to(&self, arg: Value) -> Result<(), Self::Error>;
    fn post_message(&self, arg: Value) -> Result<(), Self::Error>;
}

/// Runtime stand-in for hosts that cannot navigate. Every call succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAppService;

impl AppService for NoopAppService {
    type Error = Infallible;

    fn navigate_to(&self, _arg: Value) -> Result<(), Self::Error> {
        Ok(())
    }

    fn navigate_back(&self, _arg: Value) -> Result<(), Self::Error> {
        Ok(())
    }

    fn switch_tab(&self, _arg: Value) -> Result<(), Self::Error> {
        Ok(())
    }

    fn re_launch(&self, _arg: Value) -> Result<(), Self::Error> {
        Ok(())
    }

    fn redirect_to(&self, _arg: Value) -> Result<(), Self::Error> {
        Ok(())
    }

    fn post_message(&self, _arg: Value) -> Result<(), Self::Error> {
        Ok(())
    }
}
