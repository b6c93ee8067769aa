//! Event system following Game Engine Architecture Ch 16.8
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns an action when it consumes the event (stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Explicit unsubscription so torn-down panels leave no handlers behind

use slotmap::SlotMap;
use std::collections::HashMap;

use crate::ui::UINodeId;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Button was clicked
    ButtonClicked,
    /// Button hover state changed
    ButtonHoverChanged,
    /// Slider value changed
    SliderChanged,
    /// Toggle value changed
    ToggleChanged,
    /// Dropdown selection changed
    DropdownChanged,
}

/// Variant for type-safe event arguments
/// Uses key-value pairs to avoid order dependency problems
#[derive(Debug, Clone, PartialEq)]
pub enum EventArg {
    /// Hover state
    Hovered(bool),
    /// Numeric value (slider position)
    Value(f32),
    /// Boolean value (toggle state)
    Toggled(bool),
    /// Text value (dropdown choice)
    Choice(String),
}

/// Event with type ID, source widget and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Widget that raised the event
    pub source: UINodeId,
    /// Timestamp when event was created (frames)
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type, source and timestamp
    pub fn new(event_type: EventType, source: UINodeId, timestamp: f64) -> Self {
        Self {
            event_type,
            source,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get hovered argument if present
    pub fn get_hovered(&self) -> Option<bool> {
        if let Some(EventArg::Hovered(hovered)) = self.get_arg("hovered") {
            Some(*hovered)
        } else {
            None
        }
    }

    /// Get new slider value if present
    pub fn get_value(&self) -> Option<f32> {
        if let Some(EventArg::Value(value)) = self.get_arg("new_value") {
            Some(*value)
        } else {
            None
        }
    }

    /// Get new toggle state if present
    pub fn get_toggled(&self) -> Option<bool> {
        if let Some(EventArg::Toggled(value)) = self.get_arg("new_value") {
            Some(*value)
        } else {
            None
        }
    }

    /// Get new dropdown choice if present
    pub fn get_choice(&self) -> Option<&str> {
        if let Some(EventArg::Choice(value)) = self.get_arg("new_value") {
            Some(value)
        } else {
            None
        }
    }
}

/// Event handler trait
/// Returns `Some(action)` if the event was consumed (stops forwarding)
/// Returns `None` to allow forwarding to other handlers
pub trait EventHandler<A> {
    /// Handle an event
    fn on_event(&mut self, event: &Event) -> Option<A>;
}

impl<A, F> EventHandler<A> for F
where
    F: FnMut(&Event) -> Option<A>,
{
    fn on_event(&mut self, event: &Event) -> Option<A> {
        self(event)
    }
}

slotmap::new_key_type! {
    /// Handle returned by [`EventSystem::subscribe`]
    pub struct SubscriptionId;
}

struct Subscription<A> {
    event_type: EventType,
    source: Option<UINodeId>,
    handler: Box<dyn EventHandler<A>>,
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern; handlers are tried in
/// registration order.
pub struct EventSystem<A> {
    immediate_queue: Vec<Event>,
    subscriptions: SlotMap<SubscriptionId, Subscription<A>>,
    order: Vec<SubscriptionId>,
}

impl<A> EventSystem<A> {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            immediate_queue: Vec::new(),
            subscriptions: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a handler for an event type
    ///
    /// With `source` set, only events raised by that widget reach the handler.
    pub fn subscribe(
        &mut self,
        event_type: EventType,
        source: Option<UINodeId>,
        handler: impl EventHandler<A> + 'static,
    ) -> SubscriptionId {
        let id = self.subscriptions.insert(Subscription {
            event_type,
            source,
            handler: Box::new(handler),
        });
        self.order.push(id);
        id
    }

    /// Remove a handler, returning false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.subscriptions.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    /// Whether a subscription is still registered
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.contains_key(id)
    }

    /// Number of registered handlers
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Send event for handling on the next dispatch
    pub fn send(&mut self, event: Event) {
        self.immediate_queue.push(event);
    }

    /// Number of events waiting for dispatch
    pub fn pending_count(&self) -> usize {
        self.immediate_queue.len()
    }

    /// Dispatch all pending events, collecting the actions handlers produced
    pub fn dispatch(&mut self) -> Vec<A> {
        let immediate = std::mem::take(&mut self.immediate_queue);
        immediate
            .iter()
            .filter_map(|event| self.dispatch_event(event))
            .collect()
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that consumes it
    fn dispatch_event(&mut self, event: &Event) -> Option<A> {
        for id in &self.order {
            let Some(subscription) = self.subscriptions.get_mut(*id) else {
                continue;
            };

            if subscription.event_type != event.event_type {
                continue;
            }
            if subscription.source.is_some_and(|source| source != event.source) {
                continue;
            }

            if let Some(action) = subscription.handler.on_event(event) {
                return Some(action);
            }
        }

        log::trace!("Unhandled {:?} from {:?}", event.event_type, event.source);
        None
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.immediate_queue.clear();
    }
}

impl<A> Default for EventSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}
