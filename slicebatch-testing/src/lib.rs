//! Internal testing utilities for the slicebatch crates.

use std::fmt::Debug;
use std::panic::{RefUnwindSafe, UnwindSafe};

/// Utility for creating parametrized (aka. table-driven) tests.
///
/// To create a table driven test:
///
/// 1. Import the `TestCases` trait
/// 2. Create a struct, conventionally named `Case`, that contains the data
///    for a single test case. This struct must implement `Debug`.
/// 3. Create a collection of `Case` instances (eg. an array or Vec)
/// 4. Call `test_each`, passing the test function as a closure
///
/// `test_each` runs every case and catches panics, so one failing case does
/// not hide the others. If any case failed, it panics with a message listing
/// the debug representation of each failing case.
///
/// ## Example
///
/// ```
/// use slicebatch_testing::TestCases;
///
/// // Add #[test] attribute
/// fn test_base_size() {
///   #[derive(Debug)]
///   struct Case {
///     len: usize,
///     count: usize,
///     expected: usize,
///   }
///
///   let cases = [
///     Case { len: 34, count: 5, expected: 6 },
///     Case { len: 12, count: 6, expected: 2 },
///   ];
///
///   cases.test_each(|&Case { len, count, expected }| {
///     assert_eq!(len / count, expected);
///   });
/// }
/// # test_base_size();
/// ```
///
/// ## Passing cases by reference vs. value
///
/// `test_each` passes each case to the function by reference. For cases that
/// are more convenient to consume (eg. ones holding `Vec` fields that the
/// test wants to move), use `test_each_value`, which formats each case before
/// running it and passes it by value.
///
/// ## Unwind safety
///
/// Cases and the test function must be
/// [unwind safe](https://doc.rust-lang.org/std/panic/fn.catch_unwind.html).
/// Practically this means neither may contain interior mutability; if a field
/// is affected, store a description of how to build the value and construct
/// it inside the test function instead.
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Call test function `test` with each test case in `self`, catching any
    /// panics.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;

    /// Variant of [`test_each`](TestCases::test_each) which passes test cases
    /// to the test function by value.
    fn test_each_value(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe;
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            if std::panic::catch_unwind(|| test(&case)).is_err() {
                failures.push(format!("{:?}", case));
            }
        }
        report_failures(failures);
    }

    fn test_each_value(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + UnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            let described = format!("{:?}", case);
            let test = &test;
            if std::panic::catch_unwind(move || test(case)).is_err() {
                failures.push(described);
            }
        }
        report_failures(failures);
    }
}

fn report_failures(failures: Vec<String>) {
    assert!(
        failures.is_empty(),
        "{} test cases failed: [{}]",
        failures.len(),
        failures.join(", ")
    );
}
