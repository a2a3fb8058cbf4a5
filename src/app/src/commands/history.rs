//! Browser history command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! session history. Pushing an entry and watching for back/forward
//! transitions are the only two operations; the Shell owns the actual
//! history object, which keeps the Core free of browser globals and
//! testable without one.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on the session history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HistoryOperation {
    /// Push `url` as a new history entry without reloading the document.
    Push { url: String },
    /// Register the process-lifetime back/forward listener. After this
    /// resolves, the Shell reports every external transition as a
    /// navigation event carrying the now-current URL.
    Watch,
}

// The output from history operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HistoryOutput {
    Pushed { url: String },
    Watching,
}

impl Operation for HistoryOperation {
    type Output = HistoryOutput;
}

/// Command-based history API
pub struct History<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> History<Effect, Event>
where
    Effect: Send + From<crux_core::Request<HistoryOperation>> + 'static,
    Event: Send + 'static,
{
    /// Push a new history entry
    pub fn push(url: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(HistoryOperation::Push { url: url.into() })
    }

    /// Start watching for external (back/forward) history transitions
    pub fn watch() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(HistoryOperation::Watch)
    }
}

/// Request builder for history operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: HistoryOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<HistoryOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: HistoryOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = HistoryOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
