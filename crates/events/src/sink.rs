//! Notification hook held by the state controllers.

use std::sync::Arc;

use crate::bus::EventBus;
use crate::event::{Event, StorefrontEvent};

/// Receives storefront events after each mutation.
///
/// Notification is fire-and-forget: a failing observer never turns a
/// successful mutation into an error.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: StorefrontEvent);
}

impl<B> Notifier for B
where
    B: EventBus<StorefrontEvent>,
{
    fn notify(&self, event: StorefrontEvent) {
        let event_type = event.event_type();
        if let Err(err) = self.publish(event) {
            tracing::warn!(event_type, ?err, "failed to publish storefront event");
        }
    }
}

/// Optional, cloneable handle to a [`Notifier`].
///
/// Controllers built without a sink still work; their events go nowhere.
#[derive(Clone, Default)]
pub struct EventSink {
    notifier: Option<Arc<dyn Notifier>>,
}

impl EventSink {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier: Some(notifier),
        }
    }

    /// A sink that discards every event.
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.notifier.is_some()
    }

    pub fn emit(&self, event: StorefrontEvent) {
        tracing::trace!(event_type = event.event_type(), "emit");
        if let Some(notifier) = &self.notifier {
            notifier.notify(event);
        }
    }
}

impl core::fmt::Debug for EventSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventSink")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl<B> From<Arc<B>> for EventSink
where
    B: Notifier + 'static,
{
    fn from(notifier: Arc<B>) -> Self {
        Self::new(notifier)
    }
}
