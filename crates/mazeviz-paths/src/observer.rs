use crate::step::StepEvent;

/// Receives step events, one at a time, in emission order.
///
/// The search does not produce the next event until `observe` has returned
/// for the current one. Any `FnMut(StepEvent)` closure is an observer, and
/// a `Vec<StepEvent>` records every event it sees.
pub trait Observer {
    fn observe(&mut self, event: StepEvent);
}

impl<F: FnMut(StepEvent)> Observer for F {
    #[inline]
    fn observe(&mut self, event: StepEvent) {
        self(event)
    }
}

impl Observer for Vec<StepEvent> {
    fn observe(&mut self, event: StepEvent) {
        self.push(event);
    }
}

impl Observer for &mut Vec<StepEvent> {
    fn observe(&mut self, event: StepEvent) {
        self.push(event);
    }
}
