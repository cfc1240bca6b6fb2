//! Joining macros for getters of mixed types.

/// Join getter values of possibly different types with a separator.
///
/// Takes a separator (anything that is `AsRef<str>`), a `;`, then one or more
/// getter expressions. Each getter is called exactly once, left to right, and
/// its value is formatted with `Display`.
///
/// # Example
///
/// ```
/// struct User { name: String, age: u8, active: bool }
///
/// let user = User { name: "Alice".into(), age: 30, active: true };
/// let line = statecopy::join_state!(", "; || &user.name, || user.age, || user.active);
/// assert_eq!(line, "Alice, 30, true");
/// ```
#[macro_export]
macro_rules! join_state {
    ($separator:expr; $first:expr $(, $rest:expr)* $(,)?) => {{
        let separator = $separator;
        let separator: &str = ::core::convert::AsRef::<str>::as_ref(&separator);
        let mut joined = ::std::string::String::new();
        $crate::__private::push_display(&mut joined, &($first)());
        $(
            joined.push_str(separator);
            $crate::__private::push_display(&mut joined, &($rest)());
        )*
        joined
    }};
}

/// [`join_state!`] with a newline separator.
///
/// ```
/// let text = statecopy::join_state_ln!(|| "header", || 42);
/// assert_eq!(text, "header\n42");
/// ```
#[macro_export]
macro_rules! join_state_ln {
    ($($getter:expr),+ $(,)?) => {
        $crate::join_state!("\n"; $($getter),+)
    };
}
