//! Getter/setter copy operations.
//!
//! Every operation runs a fixed, linear sequence of caller-supplied
//! functions, each at most once, and stops at the first failure. Panics
//! unwind through the infallible forms unchanged; the `try_*` forms return
//! the caller's own error value unchanged.

use crate::chain::{Chain, chain};

#[cfg(feature = "tracing")]
use std::any::type_name;

/// Copy a value from `getter` into `setter` and return it.
///
/// The value is moved into the setter, so `T` must be `Clone` and the
/// caller receives a clone of what the setter got, not the same instance.
/// For non-`Clone` values use [`copy`] and read the target back.
///
/// # Example
///
/// ```
/// let source = vec![1, 2, 3];
/// let mut target = Vec::new();
///
/// let copied = statecopy::copy_and_get(|| source.clone(), |v| target = v);
/// assert_eq!(copied, target);
/// ```
pub fn copy_and_get<T, G, S>(getter: G, setter: S) -> T
where
    T: Clone,
    G: FnOnce() -> T,
    S: FnOnce(T),
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), "copy_and_get");

    let value = getter();
    setter(value.clone());
    value
}

/// Copy a value from `getter` into `setter` and return the chain handle.
///
/// # Example
///
/// ```
/// let (first, last) = ("Ada", "Lovelace");
/// let mut names = (String::new(), String::new());
///
/// statecopy::copy(|| first.to_string(), |v| names.0 = v)
///     .copy(|| last.to_string(), |v| names.1 = v);
///
/// assert_eq!(names, ("Ada".to_string(), "Lovelace".to_string()));
/// ```
pub fn copy<T, G, S>(getter: G, setter: S) -> &'static Chain
where
    G: FnOnce() -> T,
    S: FnOnce(T),
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), "copy");

    setter(getter());
    chain()
}

/// Copy a value through `mapper` and return the chain handle.
///
/// The setter receives `mapper(getter())`.
///
/// # Example
///
/// ```
/// let age = 30u32;
/// let mut age_as_string = String::new();
///
/// statecopy::copy_map(|| age, |a| a.to_string(), |v| age_as_string = v);
/// assert_eq!(age_as_string, "30");
/// ```
pub fn copy_map<T, R, G, M, S>(getter: G, mapper: M, setter: S) -> &'static Chain
where
    G: FnOnce() -> T,
    M: FnOnce(T) -> R,
    S: FnOnce(R),
{
    #[cfg(feature = "tracing")]
    tracing::trace!(
        from_type = type_name::<T>(),
        to_type = type_name::<R>(),
        "copy_map"
    );

    setter(mapper(getter()));
    chain()
}

/// Fallible [`copy_and_get`].
///
/// If the getter fails the setter is not called. Either error is returned
/// as-is.
pub fn try_copy_and_get<T, E, G, S>(getter: G, setter: S) -> Result<T, E>
where
    T: Clone,
    G: FnOnce() -> Result<T, E>,
    S: FnOnce(T) -> Result<(), E>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), "try_copy_and_get");

    let value = getter()?;
    setter(value.clone())?;
    Ok(value)
}

/// Fallible [`copy`].
///
/// # Example
///
/// ```
/// use std::num::ParseIntError;
///
/// let raw = "42";
/// let mut parsed = 0;
///
/// statecopy::try_copy(|| raw.parse::<i32>(), |v| {
///     parsed = v;
///     Ok::<(), ParseIntError>(())
/// })?;
/// assert_eq!(parsed, 42);
/// # Ok::<(), ParseIntError>(())
/// ```
pub fn try_copy<T, E, G, S>(getter: G, setter: S) -> Result<&'static Chain, E>
where
    G: FnOnce() -> Result<T, E>,
    S: FnOnce(T) -> Result<(), E>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), "try_copy");

    setter(getter()?)?;
    Ok(chain())
}

/// Fallible [`copy_map`].
///
/// Stops at the first `Err`: a failing mapper means the setter never runs.
pub fn try_copy_map<T, R, E, G, M, S>(getter: G, mapper: M, setter: S) -> Result<&'static Chain, E>
where
    G: FnOnce() -> Result<T, E>,
    M: FnOnce(T) -> Result<R, E>,
    S: FnOnce(R) -> Result<(), E>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(
        from_type = type_name::<T>(),
        to_type = type_name::<R>(),
        "try_copy_map"
    );

    setter(mapper(getter()?)?)?;
    Ok(chain())
}
