//! # statecopy
//!
//! Copy object state through getter/setter closures, and join getter values
//! into delimited strings.
//!
//! ## Core Features
//!
//! - **Direct copy**: [`copy()`] moves `getter()` into `setter`
//! - **Mapped copy**: [`copy_map`] writes `mapper(getter())`
//! - **Copy and return**: [`copy_and_get`] also hands the value back
//! - **Chaining**: copy operations return the shared [`Chain`] handle
//! - **Fallible forms**: `try_*` variants return the caller's own error unchanged
//! - **Joining**: [`to_string`] / [`to_string_ln`] and the [`join_state!`] macro
//!
//! ## Quick Start
//!
//! ```
//! #[derive(Default)]
//! struct Dest { name: String, age_as_string: String }
//!
//! struct Source { name: String, age: i32 }
//!
//! impl Source {
//!     fn name(&self) -> String { self.name.clone() }
//!     fn age(&self) -> i32 { self.age }
//! }
//!
//! let source = Source { name: "Alice".into(), age: 30 };
//! let mut dest = Dest::default();
//!
//! statecopy::copy(|| source.name(), |v| dest.name = v)
//!     .copy_map(|| source.age(), |a| a.to_string(), |v| dest.age_as_string = v);
//!
//! assert_eq!(dest.name, "Alice");
//! assert_eq!(dest.age_as_string, "30");
//!
//! let summary = statecopy::join_state!(" / "; || source.name(), || source.age());
//! assert_eq!(summary, "Alice / 30");
//! ```
//!
//! ## Failure Propagation
//!
//! Nothing here catches, wraps or logs failures raised by the supplied
//! functions. A panic unwinds through the infallible operations; the `try_*`
//! operations return the first `Err` as-is. A failure stops the remaining
//! steps of that one call, but earlier calls in a chain are not rolled back.
//!
//! ```
//! let mut written = None;
//! let result = statecopy::try_copy_map(
//!     || Ok("not a number"),
//!     |s: &str| s.parse::<i32>(),
//!     |v| { written = Some(v); Ok(()) },
//! );
//! assert!(result.is_err());
//! assert_eq!(written, None);
//! ```
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Trace events for every operation with tracing crate |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod chain;
mod copy;
mod error;
mod join;
mod macros;

pub use chain::{Chain, chain};
pub use copy::{copy, copy_and_get, copy_map, try_copy, try_copy_and_get, try_copy_map};
pub use error::{Error, Result};
pub use join::{
    to_string, to_string_ln, try_to_string, try_to_string_ln, write_joined, write_joined_io,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::join::push_display;
}
