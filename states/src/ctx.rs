use std::any::TypeId;
use std::collections::BTreeMap;

use log::debug;

use crate::{Error, State};

/// Typed store for every piece of app state.
///
/// Each concrete type is registered once and then borrowed by type, so the
/// UI never threads a dozen structs through its call graph.
#[derive(Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.storage.values().map(|state| state.name()))
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        let name = state.name();
        if self
            .storage
            .insert(TypeId::of::<T>(), Box::new(state))
            .is_some()
        {
            debug!("StateCtx: replaced {name}");
        }
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(std::any::type_name::<T>(), "read"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(std::any::type_name::<T>(), "write"))
    }

    /// # Panics
    ///
    /// Panics when `T` was never registered. Registration happens once at
    /// startup, so a miss here is a wiring bug.
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    ///
    /// Panics when `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Applies `f` to the registered `T` and returns its result.
    pub fn update<T: State, R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R, Error> {
        self.try_state_mut::<T>().map(f)
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::Time;

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_add_and_read_state() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 42 });

        assert_eq!(ctx.state::<Counter>().value, 42);
        assert!(ctx.try_state::<Time>().is_err());
    }

    #[test]
    fn test_missing_state_is_an_error() {
        let ctx = StateCtx::new();
        let err = ctx.try_state::<Counter>().unwrap_err();

        assert!(matches!(err, Error::StateNotFound { .. }));
        assert!(err.to_string().contains("Counter"));
    }

    #[test]
    fn test_update_mutates_in_place() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());

        let doubled = ctx
            .update::<Counter, _>(|counter| {
                counter.value = 21;
                counter.value * 2
            })
            .unwrap();

        assert_eq!(doubled, 42);
        assert_eq!(ctx.state::<Counter>().value, 21);
    }

    #[test]
    fn test_add_state_replaces_previous_value() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter::default());
        ctx.add_state(Counter { value: 7 });

        assert_eq!(ctx.state::<Counter>().value, 7);
        assert!(ctx.update::<Time, _>(|_| ()).is_err());
    }

    #[test]
    #[should_panic(expected = "State not found")]
    fn test_state_panics_when_unregistered() {
        let ctx = StateCtx::new();
        let _ = ctx.state::<Counter>();
    }
}
