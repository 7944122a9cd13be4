//! Callback invoked on each payload during a traversal.

/// A visitor whose [Visitor::visit] method is called once for each visited node.
///
/// Any `FnMut(&T)` closure is a visitor, so most callers never implement this
/// trait by hand. Implement it on a struct when the visitor carries state that
/// should be inspected after the traversal.
pub trait Visitor<T> {
    fn visit(&mut self, data: &T);
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&T),
{
    fn visit(&mut self, data: &T) {
        self(data)
    }
}
