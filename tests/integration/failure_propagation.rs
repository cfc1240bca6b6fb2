//! Failures raised by caller-supplied functions surface unchanged.

#[path = "../common/mod.rs"]
mod common;

use common::{Person, PersonDto, Spy};
use statecopy::{
    Error, copy, copy_map, to_string, try_copy, try_copy_and_get, try_copy_map, try_to_string,
    write_joined_io,
};
use std::io;
use std::panic::{AssertUnwindSafe, catch_unwind};
use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, ThisError)]
enum FieldError {
    #[error("field {0} is missing")]
    Missing(&'static str),
    #[error("field {0} is read-only")]
    ReadOnly(&'static str),
}

#[test]
fn test_getter_panic_propagates_unchanged() {
    let mut dest = PersonDto::default();
    let result = catch_unwind(AssertUnwindSafe(|| {
        copy(|| -> String { panic!("getter exploded") }, |v| dest.set_name(v));
    }));

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"getter exploded"));
    assert_eq!(dest.name_writes(), 0);
}

#[test]
fn test_mapper_panic_skips_setter() {
    let source = Person::new("Alice", 30);
    let mut dest = PersonDto::default();
    let result = catch_unwind(AssertUnwindSafe(|| {
        copy_map(
            || source.age(),
            |_| -> String { panic!("mapper exploded") },
            |v| dest.set_age_as_string(v),
        );
    }));

    assert!(result.is_err());
    assert_eq!(dest.age_writes(), 0);
}

#[test]
fn test_failed_link_keeps_earlier_links() {
    let source = Person::new("Alice", 30);
    let mut dest = PersonDto::default();

    let result = try_copy(|| Ok::<_, FieldError>(source.name()), |v| {
        dest.set_name(v);
        Ok(())
    })
    .and_then(|chain| {
        chain.try_copy_map(
            || Err::<i32, _>(FieldError::Missing("age")),
            |a| Ok(a.to_string()),
            |v| {
                dest.set_age_as_string(v);
                Ok(())
            },
        )
    });

    assert_eq!(result.unwrap_err(), FieldError::Missing("age"));
    assert_eq!(dest.name(), Some("Alice"));
    assert_eq!(dest.age_writes(), 0);
}

#[test]
fn test_try_copy_map_mapper_error_skips_setter() {
    let mut dest = PersonDto::default();
    let result = try_copy_map(
        || Ok("thirty"),
        |s: &str| s.parse::<i32>().map_err(|_| FieldError::Missing("age")),
        |v| {
            dest.set_age_as_string(v.to_string());
            Ok(())
        },
    );

    assert_eq!(result.unwrap_err(), FieldError::Missing("age"));
    assert_eq!(dest.age_writes(), 0);
}

#[test]
fn test_try_copy_and_get_setter_error() {
    let result = try_copy_and_get(|| Ok(5), |_| Err(FieldError::ReadOnly("id")));
    let error = result.unwrap_err();
    assert_eq!(error, FieldError::ReadOnly("id"));
    assert_eq!(error.to_string(), "field id is read-only");
}

#[test]
fn test_to_string_panic_after_earlier_getters_ran() {
    let spy = Spy::new();
    let rest: [&dyn Fn() -> &'static str; 2] = [
        &|| spy.hit("second"),
        &|| -> &'static str { panic!("third getter failed") },
    ];

    let result = catch_unwind(AssertUnwindSafe(|| to_string(",", || spy.hit("first"), rest)));

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"third getter failed"));
    assert_eq!(spy.calls(), vec!["first", "second"]);
}

#[test]
fn test_try_to_string_error_after_earlier_getters_ran() {
    let spy = Spy::new();
    let rest: [&dyn Fn() -> Result<&'static str, FieldError>; 3] = [
        &|| Ok(spy.hit("second")),
        &|| Err(FieldError::Missing("third")),
        &|| Ok(spy.hit("fourth")),
    ];

    let result = try_to_string(",", || Ok(spy.hit("first")), rest);

    assert_eq!(result, Err(FieldError::Missing("third")));
    assert_eq!(spy.count(), 2);
}

struct FullDisk;

impl io::Write for FullDisk {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_joined_io_reports_sink_error() {
    let source = Person::new("Alice", 30);
    let rest: [&dyn Fn() -> String; 1] = [&|| source.age().to_string()];

    let result = write_joined_io(&mut FullDisk, "-", || source.name(), rest);

    assert!(matches!(result, Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::StorageFull));
}
