//! Storefront notifications.
//!
//! Every mutation of the page state publishes a [`StorefrontEvent`]; the
//! rendering layer subscribes and redraws. The bus is in-memory and
//! synchronous; the state core never waits on a subscriber.

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod sink;

pub use bus::{EventBus, Subscription};
pub use event::{Event, StorefrontEvent};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use sink::{EventSink, Notifier};
