use std::any::Any;

/// A value owned by [`crate::StateCtx`] and looked up by its concrete type.
///
/// Implementors only forward to `self`; the methods exist so the context can
/// downcast boxed states without knowing their type up front.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Short name used in logs and lookup errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
