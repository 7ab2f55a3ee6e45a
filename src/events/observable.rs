//! Synchronous observable values.

/// Handle returned by [`Observable::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

type Callback<T> = Box<dyn FnMut(&T)>;

/// A named event with a typed payload.
///
/// Subscribers run synchronously, in registration order, before
/// [`Observable::invoke`] returns. There is no acknowledgment and no
/// backpressure.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rust_codenames::events::Observable;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut rounds: Observable<u32> = Observable::new();
///
/// let sink = Rc::clone(&seen);
/// rounds.subscribe(move |round| sink.borrow_mut().push(*round));
///
/// rounds.invoke(&2);
/// rounds.invoke(&3);
/// assert_eq!(*seen.borrow(), vec![2, 3]);
/// ```
pub struct Observable<T> {
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u32,
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Observable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `payload` to every subscriber.
    pub fn invoke(&mut self, payload: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(payload);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
