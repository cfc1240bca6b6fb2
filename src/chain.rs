//! The chain handle returned by chainable copy operations.
//!
//! [`Chain`] carries no state. It exists so that copy calls read as one
//! fluent expression:
//!
//! ```
//! struct Source { name: String, age: u32 }
//! #[derive(Default)]
//! struct Dest { name: String, age: String, adult: bool }
//!
//! let source = Source { name: "Alice".into(), age: 30 };
//! let mut dest = Dest::default();
//!
//! statecopy::copy(|| source.name.clone(), |v| dest.name = v)
//!     .copy_map(|| source.age, |a| a.to_string(), |v| dest.age = v)
//!     .copy_map(|| source.age, |a| a >= 18, |v| dest.adult = v);
//!
//! assert_eq!(dest.name, "Alice");
//! assert_eq!(dest.age, "30");
//! assert!(dest.adult);
//! ```

use std::fmt;

static CHAIN: Chain = Chain { _private: () };

/// Returns the process-wide chain handle.
///
/// Every call returns a reference to the same static instance.
#[must_use]
pub fn chain() -> &'static Chain {
    &CHAIN
}

/// Stateless handle enabling `copy(..).copy(..)` chains.
///
/// Only one instance exists; it lives in a `static` and is handed out as
/// `&'static Chain`. Each method behaves exactly like the free function of
/// the same name in the crate root.
#[derive(PartialEq, Eq, Hash)]
pub struct Chain {
    _private: (),
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Chain")
    }
}

impl Chain {
    /// See [`copy`](crate::copy()).
    pub fn copy<T, G, S>(&self, getter: G, setter: S) -> &'static Chain
    where
        G: FnOnce() -> T,
        S: FnOnce(T),
    {
        crate::copy::copy(getter, setter)
    }

    /// See [`copy_map`](crate::copy_map).
    pub fn copy_map<T, R, G, M, S>(&self, getter: G, mapper: M, setter: S) -> &'static Chain
    where
        G: FnOnce() -> T,
        M: FnOnce(T) -> R,
        S: FnOnce(R),
    {
        crate::copy::copy_map(getter, mapper, setter)
    }

    /// See [`copy_and_get`](crate::copy_and_get).
    pub fn copy_and_get<T, G, S>(&self, getter: G, setter: S) -> T
    where
        T: Clone,
        G: FnOnce() -> T,
        S: FnOnce(T),
    {
        crate::copy::copy_and_get(getter, setter)
    }

    /// See [`try_copy`](crate::try_copy).
    pub fn try_copy<T, E, G, S>(&self, getter: G, setter: S) -> Result<&'static Chain, E>
    where
        G: FnOnce() -> Result<T, E>,
        S: FnOnce(T) -> Result<(), E>,
    {
        crate::copy::try_copy(getter, setter)
    }

    /// See [`try_copy_map`](crate::try_copy_map).
    pub fn try_copy_map<T, R, E, G, M, S>(
        &self,
        getter: G,
        mapper: M,
        setter: S,
    ) -> Result<&'static Chain, E>
    where
        G: FnOnce() -> Result<T, E>,
        M: FnOnce(T) -> Result<R, E>,
        S: FnOnce(R) -> Result<(), E>,
    {
        crate::copy::try_copy_map(getter, mapper, setter)
    }

    /// See [`try_copy_and_get`](crate::try_copy_and_get).
    pub fn try_copy_and_get<T, E, G, S>(&self, getter: G, setter: S) -> Result<T, E>
    where
        T: Clone,
        G: FnOnce() -> Result<T, E>,
        S: FnOnce(T) -> Result<(), E>,
    {
        crate::copy::try_copy_and_get(getter, setter)
    }
}
