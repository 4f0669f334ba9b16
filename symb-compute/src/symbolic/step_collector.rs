/// A type that records the rewrites performed by the simplifier or the differentiator.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step, and for
/// [`Vec<S>`], which keeps them in the order they were performed.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
