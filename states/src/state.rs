use std::any::Any;

/// A piece of application state stored in a [`StateCtx`](crate::StateCtx).
///
/// Implementors provide `Any` access so the context can store heterogeneous
/// state behind one map and hand back concrete references on lookup.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
