/// Watches the events a search emits as it runs.
///
/// `E` is the search's event type and `A` the action an observer may hand
/// back. The vertical scan takes `A = Infallible`: its observers only watch
/// the seeded grid and each refined pass, and the pass budget always runs
/// to completion. A search with steerable behaviour would pick an inhabited
/// action type and act on `Some(action)`.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// ignores every event.
pub trait Observer<E, A> {
    /// Called once per event. `None` means carry on.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
