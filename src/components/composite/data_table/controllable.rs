//! Controllable values
//!
//! A piece of table state is either owned by the parent (controlled) or by
//! the table itself (uncontrolled). The mode is fixed when the table is
//! built; in controlled mode the table only reports change intents and the
//! value moves exclusively through [`Controllable::sync`].

/// Source of truth for one concern of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controllable<T> {
    /// Parent owns the value
    Controlled(T),
    /// Table owns the value, starting from an initial one
    Uncontrolled(T),
}

impl<T> Controllable<T> {
    /// Current value regardless of mode
    pub fn get(&self) -> &T {
        match self {
            Controllable::Controlled(value) | Controllable::Uncontrolled(value) => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Controllable::Controlled(_))
    }

    /// Apply a local change. Ignored in controlled mode.
    ///
    /// Returns whether the value was touched.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self {
            Controllable::Controlled(_) => false,
            Controllable::Uncontrolled(value) => {
                f(value);
                true
            }
        }
    }

    /// Push a new value from the parent. Ignored in uncontrolled mode.
    pub fn sync(&mut self, value: T) -> bool {
        match self {
            Controllable::Controlled(current) => {
                *current = value;
                true
            }
            Controllable::Uncontrolled(_) => false,
        }
    }
}

impl<T: Default> Default for Controllable<T> {
    fn default() -> Self {
        Controllable::Uncontrolled(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontrolled_updates_locally() {
        let mut value = Controllable::Uncontrolled(1);
        assert!(value.update(|v| *v += 1));
        assert_eq!(*value.get(), 2);
        assert!(!value.sync(10));
        assert_eq!(*value.get(), 2);
    }

    #[test]
    fn controlled_only_moves_through_sync() {
        let mut value = Controllable::Controlled(1);
        assert!(!value.update(|v| *v += 1));
        assert_eq!(*value.get(), 1);
        assert!(value.sync(5));
        assert_eq!(*value.get(), 5);
    }
}
