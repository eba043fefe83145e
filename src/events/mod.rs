//! Layout-change event subscription.
//!
//! An explicit subscription registry replacing the host platform's global
//! notification bus for keyboard-frame changes. The owning component creates
//! a bus scoped to its own lifetime, interested parties register a callback,
//! and the host adapter publishes a [`FrameChange`] whenever the on-screen
//! keyboard repositions.
//!
//! Single-threaded by design: callbacks run synchronously on `publish` and
//! the bus is never shared across threads.

use std::collections::BTreeMap;

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Payload of a keyboard layout change.
///
/// Every field is optional: the host may omit any of them, exactly as the
/// original notification's user-info dictionary could.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameChange {
    /// Keyboard frame before the change
    pub begin_frame: Option<Rect>,

    /// Keyboard frame after the change
    pub end_frame: Option<Rect>,

    /// Total duration of the accompanying animation, in seconds
    pub animation_duration: Option<f64>,

    /// Platform animation curve identifier
    pub animation_curve: Option<u32>,
}

/// Identifies a registered subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Registry of layout-change subscribers.
pub struct LayoutEventBus {
    subscribers: BTreeMap<SubscriptionId, Box<dyn FnMut(&FrameChange)>>,
    next_id: u64,
}

impl LayoutEventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            subscribers: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Register a callback for layout changes.
    pub fn subscribe(&mut self, callback: impl FnMut(&FrameChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(&id);
    }

    /// Deliver a layout change to every subscriber, in registration order.
    pub fn publish(&mut self, change: &FrameChange) {
        for callback in self.subscribers.values_mut() {
            callback(change);
        }
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for LayoutEventBus {
    fn default() -> Self {
        Self::new()
    }
}
