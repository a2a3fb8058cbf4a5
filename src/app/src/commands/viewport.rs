//! Viewport command definitions.
//!
//! In-app navigation lands the visitor at the top of the new page; the
//! scroll itself is a Shell concern.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on the viewport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewportOperation {
    ScrollToTop,
}

// The output from viewport operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewportOutput {
    Done,
}

impl Operation for ViewportOperation {
    type Output = ViewportOutput;
}

/// Command-based viewport API
pub struct Viewport<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Viewport<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ViewportOperation>> + 'static,
    Event: Send + 'static,
{
    /// Scroll the viewport back to the top of the page
    pub fn scroll_to_top() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(ViewportOperation::ScrollToTop)
    }
}

/// Request builder for viewport operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: ViewportOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ViewportOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: ViewportOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = ViewportOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
