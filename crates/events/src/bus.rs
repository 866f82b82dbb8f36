//! Publish/subscribe abstraction for storefront notifications.
//!
//! The bus is the boundary between the state core and the rendering layer:
//! controllers publish after each mutation, renderers subscribe and drain.
//!
//! - **Broadcast**: each subscription receives every message published after it
//!   was created.
//! - **Ordered per publisher**: messages arrive in publish order.
//! - **No persistence**: a subscriber that is dropped simply stops receiving.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// A subscription to the notification stream.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// page.load_more_reviews();
/// for event in subscription.drain() {
///     render(event);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Collect every message already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus.
///
/// `publish()` may fail (e.g. a poisoned lock); callers that must not fail,
/// such as the state controllers, go through [`crate::Notifier`], which logs
/// and swallows the error.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
