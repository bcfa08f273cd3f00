//! Property-based tests for the container and its combinators.
//!
//! These tests use proptest to check the functor and monad laws across
//! many randomly generated inputs.

use expected::{bind, fmap, raise, Expected};
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct TestError(String);

type TestExpected = Expected<i64, TestError>;

prop_compose! {
    fn arbitrary_error()(message in "[a-z ]{0,16}") -> TestError {
        TestError(message)
    }
}

fn arbitrary_expected() -> impl Strategy<Value = TestExpected> {
    prop_oneof![
        any::<i32>().prop_map(|x| TestExpected::value(i64::from(x))),
        arbitrary_error().prop_map(TestExpected::error),
    ]
}

fn halve(x: i64) -> TestExpected {
    if x % 2 == 0 {
        Expected::value(x / 2)
    } else {
        Expected::error(TestError(format!("{x} is odd")))
    }
}

fn negate_positive(x: i64) -> TestExpected {
    if x > 0 {
        Expected::value(-x)
    } else {
        Expected::error(TestError("not positive".into()))
    }
}

proptest! {
    #[test]
    fn value_is_valid(x in any::<i64>()) {
        prop_assert!(TestExpected::value(x).is_valid());
    }

    #[test]
    fn error_is_not_valid(e in arbitrary_error()) {
        let expected = TestExpected::error(e.clone());
        prop_assert!(!expected.is_valid());
        prop_assert_eq!(expected.err(), Some(e));
    }

    #[test]
    fn functor_identity(r in arbitrary_expected()) {
        prop_assert_eq!(fmap(|x| x, r.clone()), r);
    }

    #[test]
    fn functor_composition(r in arbitrary_expected()) {
        let f = |x: i64| x.wrapping_mul(3);
        let g = |x: i64| x.wrapping_sub(7);

        let stepwise = fmap(g, fmap(f, r.clone()));
        let composed = fmap(|x| g(f(x)), r);
        prop_assert_eq!(stepwise, composed);
    }

    #[test]
    fn monad_left_zero(e in arbitrary_error()) {
        let expected = bind(TestExpected::error(e.clone()), halve);
        prop_assert_eq!(expected, Expected::error(e));
    }

    #[test]
    fn monad_left_identity(x in any::<i32>()) {
        let x = i64::from(x);
        prop_assert_eq!(bind(Expected::value(x), halve), halve(x));
    }

    #[test]
    fn monad_right_identity(r in arbitrary_expected()) {
        prop_assert_eq!(bind(r.clone(), Expected::pure), r);
    }

    #[test]
    fn monad_associativity(r in arbitrary_expected()) {
        let nested = bind(bind(r.clone(), halve), negate_positive);
        let flat = bind(r, |x| bind(halve(x), negate_positive));
        prop_assert_eq!(nested, flat);
    }

    #[test]
    fn map_converts_raised_error(x in any::<i64>(), e in arbitrary_error()) {
        let raised = e.clone();
        let expected = fmap(move |_: i64| -> i64 { raise(raised) }, TestExpected::value(x));
        prop_assert!(!expected.is_valid());
        prop_assert_eq!(expected.into_error(), e);
    }

    #[test]
    fn result_roundtrip(r in arbitrary_expected()) {
        let back: TestExpected = r.clone().into_result().into();
        prop_assert_eq!(back, r);
    }
}
