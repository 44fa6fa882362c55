//! The listener callable and its identity-bearing handle.
//!
//! A [`Listener`] receives the argument list of an emission and may fail;
//! failure aborts the remainder of that dispatch. [`ListenerHandle`] is how
//! listeners are stored and later removed: removal matches by pointer
//! identity, so the same closure wrapped twice yields two distinct handles,
//! while clones of one handle all denote the same registration target.

use crate::arg::Arg;
use crate::error::BoxError;
use std::rc::Rc;

/// A callable invoked on matching dispatch.
///
/// Implemented automatically for `Fn(&[Arg]) -> Result<(), BoxError>`
/// closures; for closures that cannot fail, use
/// [`ListenerHandle::from_fn`].
pub trait Listener {
    /// Called with the emission's argument list.
    ///
    /// In the wildcard phase the first argument is the triggering event
    /// name as a `String`.
    fn call(&self, args: &[Arg]) -> Result<(), BoxError>;
}

impl<F> Listener for F
where
    F: Fn(&[Arg]) -> Result<(), BoxError> + 'static,
{
    fn call(&self, args: &[Arg]) -> Result<(), BoxError> {
        (self)(args)
    }
}

/// A clonable, identity-preserving handle to a listener.
///
/// The emitter stores handles; [`ListenerHandle::ptr_eq`] is the identity
/// used by removal. Registering one handle (or its clones) twice produces
/// two independent entries that are removed one at a time.
#[derive(Clone)]
pub struct ListenerHandle(Rc<dyn Listener>);

impl ListenerHandle {
    /// Wrap any [`Listener`] implementation.
    pub fn new<L: Listener + 'static>(listener: L) -> Self {
        Self(Rc::new(listener))
    }

    /// Wrap an infallible closure.
    pub fn from_fn<F: Fn(&[Arg]) + 'static>(f: F) -> Self {
        struct Infallible<F>(F);

        impl<F: Fn(&[Arg]) + 'static> Listener for Infallible<F> {
            fn call(&self, args: &[Arg]) -> Result<(), BoxError> {
                (self.0)(args);
                Ok(())
            }
        }

        Self(Rc::new(Infallible(f)))
    }

    /// Invoke the underlying listener.
    pub fn call(&self, args: &[Arg]) -> Result<(), BoxError> {
        self.0.call(args)
    }

    /// Whether two handles denote the same listener registration identity.
    pub fn ptr_eq(&self, other: &ListenerHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListenerHandle({:p})", Rc::as_ptr(&self.0))
    }
}
