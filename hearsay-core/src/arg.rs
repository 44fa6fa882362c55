//! Any-typed positional arguments.
//!
//! Emission carries a variable-length list of values of arbitrary type.
//! [`Arg`] is the unit of that list: a cheaply clonable, dynamically typed
//! value that listeners inspect with [`Arg::downcast_ref`]. The wildcard
//! phase prepends the triggering event name as an extra `Arg` holding a
//! `String`.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A single dynamically typed argument.
///
/// Cloning an `Arg` is an `Rc` clone; the underlying value is shared, never
/// copied.
#[derive(Clone)]
pub struct Arg(Rc<dyn Any>);

impl Arg {
    /// Wrap a value.
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Borrow the value as `T`, or `None` if the type does not match.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Check whether the value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arg(..)")
    }
}

/// Build a `Vec<Arg>` from a comma-separated list of values.
///
/// # Example
/// ```rust,ignore
/// emitter.emit("click", &args![42u32, "left".to_string()])?;
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::new($value)),+]
    };
}
