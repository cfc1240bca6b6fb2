//! Joining getter-produced values into delimited text.
//!
//! Getters are invoked exactly once each, in the order given, and their
//! values are separated by the separator with nothing before the first or
//! after the last. Getters that already ran are not rolled back when a later
//! one fails.
//!
//! For getters of different closure types use a trait object per getter, or
//! the [`join_state!`](crate::join_state) macro which also accepts different
//! value types.

use crate::error::Result;
use std::fmt::{self, Display};
use std::io;

#[cfg(feature = "tracing")]
use std::any::type_name;

/// Join the values of `getter` and `getters` with `separator`.
///
/// # Example
///
/// ```
/// let (day, month, year) = (19u32, 10u32, 2026u32);
///
/// let rest: [&dyn Fn() -> u32; 2] = [&|| month, &|| year];
/// let date = statecopy::to_string(".", || day, rest);
/// assert_eq!(date, "19.10.2026");
/// ```
pub fn to_string<T, G, I>(separator: &str, getter: G, getters: I) -> String
where
    T: Display,
    G: FnOnce() -> T,
    I: IntoIterator,
    I::Item: FnOnce() -> T,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), separator, "to_string");

    let mut joined = String::new();
    push_display(&mut joined, &getter());
    for g in getters {
        joined.push_str(separator);
        push_display(&mut joined, &g());
    }
    joined
}

/// [`to_string`] with a newline separator.
pub fn to_string_ln<T, G, I>(getter: G, getters: I) -> String
where
    T: Display,
    G: FnOnce() -> T,
    I: IntoIterator,
    I::Item: FnOnce() -> T,
{
    to_string("\n", getter, getters)
}

/// Fallible [`to_string`].
///
/// Returns the first getter error unchanged.
pub fn try_to_string<T, E, G, I>(
    separator: &str,
    getter: G,
    getters: I,
) -> std::result::Result<String, E>
where
    T: Display,
    G: FnOnce() -> std::result::Result<T, E>,
    I: IntoIterator,
    I::Item: FnOnce() -> std::result::Result<T, E>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), separator, "try_to_string");

    let mut joined = String::new();
    push_display(&mut joined, &getter()?);
    for g in getters {
        joined.push_str(separator);
        push_display(&mut joined, &g()?);
    }
    Ok(joined)
}

/// [`try_to_string`] with a newline separator.
pub fn try_to_string_ln<T, E, G, I>(getter: G, getters: I) -> std::result::Result<String, E>
where
    T: Display,
    G: FnOnce() -> std::result::Result<T, E>,
    I: IntoIterator,
    I::Item: FnOnce() -> std::result::Result<T, E>,
{
    try_to_string("\n", getter, getters)
}

/// Write the joined values into a `fmt::Write` sink.
///
/// Each value is written as soon as its getter returns, so a sink failure
/// leaves the remaining getters uncalled.
///
/// # Errors
///
/// Returns [`Error::Format`](crate::Error::Format) if the sink rejects a write.
pub fn write_joined<W, T, G, I>(sink: &mut W, separator: &str, getter: G, getters: I) -> Result<()>
where
    W: fmt::Write + ?Sized,
    T: Display,
    G: FnOnce() -> T,
    I: IntoIterator,
    I::Item: FnOnce() -> T,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), separator, "write_joined");

    write!(sink, "{}", getter())?;
    for g in getters {
        write!(sink, "{separator}{}", g())?;
    }
    Ok(())
}

/// Write the joined values into an `io::Write` sink.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the sink fails.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let rest: [fn() -> i32; 2] = [|| 2, || 3];
/// statecopy::write_joined_io(&mut out, ";", || 1, rest)?;
/// assert_eq!(out, b"1;2;3");
/// # Ok::<(), statecopy::Error>(())
/// ```
pub fn write_joined_io<W, T, G, I>(
    sink: &mut W,
    separator: &str,
    getter: G,
    getters: I,
) -> Result<()>
where
    W: io::Write + ?Sized,
    T: Display,
    G: FnOnce() -> T,
    I: IntoIterator,
    I::Item: FnOnce() -> T,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(value_type = type_name::<T>(), separator, "write_joined_io");

    write!(sink, "{}", getter())?;
    for g in getters {
        write!(sink, "{separator}{}", g())?;
    }
    Ok(())
}

/// Append `value` to `buf`.
///
/// Panics, like [`ToString::to_string`], if the `Display` impl of `value`
/// returns an error.
#[doc(hidden)]
pub fn push_display<T: Display + ?Sized>(buf: &mut String, value: &T) {
    buf.push_str(&value.to_string());
}
