//! Semantic Input Events
//!
//! The event vocabulary published by the input manager and a small
//! synchronous publish/subscribe bus.

use std::collections::HashMap;
use std::hash::Hash;

use super::MouseButton;

/// A semantic input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    UpPressed,
    UpReleased,
    DownPressed,
    DownReleased,
    LeftPressed,
    LeftReleased,
    RightPressed,
    RightReleased,
    RotateLeftPress,
    RotateLeftReleased,
    RotateRightPress,
    RotateRightReleased,
    /// Wheel pulled toward the user; non-negative pixel magnitude
    ScrollUp(f32),
    /// Wheel pushed away from the user; non-negative pixel magnitude
    ScrollDown(f32),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// Element-local pixel position
    MouseMove { x: f32, y: f32 },
}

/// Payload-free discriminant of [`InputEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEventKind {
    UpPressed,
    UpReleased,
    DownPressed,
    DownReleased,
    LeftPressed,
    LeftReleased,
    RightPressed,
    RightReleased,
    RotateLeftPress,
    RotateLeftReleased,
    RotateRightPress,
    RotateRightReleased,
    ScrollUp,
    ScrollDown,
    MouseDown,
    MouseUp,
    MouseMove,
}

impl InputEvent {
    pub fn kind(&self) -> InputEventKind {
        match self {
            InputEvent::UpPressed => InputEventKind::UpPressed,
            InputEvent::UpReleased => InputEventKind::UpReleased,
            InputEvent::DownPressed => InputEventKind::DownPressed,
            InputEvent::DownReleased => InputEventKind::DownReleased,
            InputEvent::LeftPressed => InputEventKind::LeftPressed,
            InputEvent::LeftReleased => InputEventKind::LeftReleased,
            InputEvent::RightPressed => InputEventKind::RightPressed,
            InputEvent::RightReleased => InputEventKind::RightReleased,
            InputEvent::RotateLeftPress => InputEventKind::RotateLeftPress,
            InputEvent::RotateLeftReleased => InputEventKind::RotateLeftReleased,
            InputEvent::RotateRightPress => InputEventKind::RotateRightPress,
            InputEvent::RotateRightReleased => InputEventKind::RotateRightReleased,
            InputEvent::ScrollUp(_) => InputEventKind::ScrollUp,
            InputEvent::ScrollDown(_) => InputEventKind::ScrollDown,
            InputEvent::MouseDown(_) => InputEventKind::MouseDown,
            InputEvent::MouseUp(_) => InputEventKind::MouseUp,
            InputEvent::MouseMove { .. } => InputEventKind::MouseMove,
        }
    }

    /// Stable event name used in logs.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl InputEventKind {
    pub fn name(self) -> &'static str {
        match self {
            InputEventKind::UpPressed => "upPressed",
            InputEventKind::UpReleased => "upReleased",
            InputEventKind::DownPressed => "downPressed",
            InputEventKind::DownReleased => "downReleased",
            InputEventKind::LeftPressed => "leftPressed",
            InputEventKind::LeftReleased => "leftReleased",
            InputEventKind::RightPressed => "rightPressed",
            InputEventKind::RightReleased => "rightReleased",
            InputEventKind::RotateLeftPress => "rotateLeftPress",
            InputEventKind::RotateLeftReleased => "rotateLeftReleased",
            InputEventKind::RotateRightPress => "rotateRightPress",
            InputEventKind::RotateRightReleased => "rotateRightReleased",
            InputEventKind::ScrollUp => "scrollup",
            InputEventKind::ScrollDown => "scrolldown",
            InputEventKind::MouseDown => "mousedown",
            InputEventKind::MouseUp => "mouseup",
            InputEventKind::MouseMove => "mousemove",
        }
    }
}

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Synchronous publish/subscribe keyed by event kind.
///
/// Handlers for one kind run in subscription order on the emitting thread.
pub struct EventBus<K, E> {
    handlers: HashMap<K, Vec<(SubscriptionId, Handler<E>)>>,
    next_id: u64,
}

impl<K, E> Default for EventBus<K, E> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<K: Eq + Hash, E> EventBus<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to events of `kind`.
    pub fn on<F>(&mut self, kind: K, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        for handlers in self.handlers.values_mut() {
            if let Some(index) = handlers.iter().position(|(sub, _)| *sub == id) {
                handlers.remove(index);
                return true;
            }
        }
        false
    }

    /// Invoke every handler subscribed to `kind`.
    pub fn emit(&mut self, kind: &K, event: &E) {
        if let Some(handlers) = self.handlers.get_mut(kind) {
            for (_, handler) in handlers.iter_mut() {
                handler(event);
            }
        }
    }

    /// Number of handlers subscribed to `kind`.
    pub fn handler_count(&self, kind: &K) -> usize {
        self.handlers.get(kind).map_or(0, Vec::len)
    }
}

impl<K, E> std::fmt::Debug for EventBus<K, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.handlers.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus: EventBus<InputEventKind, InputEvent> = EventBus::new();

        let first = Rc::clone(&log);
        bus.on(InputEventKind::UpPressed, move |_| first.borrow_mut().push(1));
        let second = Rc::clone(&log);
        bus.on(InputEventKind::UpPressed, move |_| second.borrow_mut().push(2));

        bus.emit(&InputEventKind::UpPressed, &InputEvent::UpPressed);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_only_matching_kind_fires() {
        let count = Rc::new(RefCell::new(0));
        let mut bus: EventBus<InputEventKind, InputEvent> = EventBus::new();

        let c = Rc::clone(&count);
        bus.on(InputEventKind::ScrollUp, move |_| *c.borrow_mut() += 1);

        bus.emit(&InputEventKind::ScrollDown, &InputEvent::ScrollDown(1.0));
        assert_eq!(*count.borrow(), 0);
        bus.emit(&InputEventKind::ScrollUp, &InputEvent::ScrollUp(1.0));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_off_removes_handler() {
        let mut bus: EventBus<InputEventKind, InputEvent> = EventBus::new();
        let id = bus.on(InputEventKind::MouseMove, |_| {});
        assert_eq!(bus.handler_count(&InputEventKind::MouseMove), 1);

        assert!(bus.off(id));
        assert!(!bus.off(id));
        assert_eq!(bus.handler_count(&InputEventKind::MouseMove), 0);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(InputEvent::ScrollUp(3.0).name(), "scrollup");
        assert_eq!(InputEvent::RotateLeftPress.name(), "rotateLeftPress");
        assert_eq!(InputEvent::MouseMove { x: 0.0, y: 0.0 }.name(), "mousemove");
    }
}
