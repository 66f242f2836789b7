//! Property-based tests for the action combinators.
//!
//! These tests use proptest to verify the monad laws, the mapping laws and
//! the sequencing contracts hold across many randomly generated inputs.

use act::prelude::*;
use proptest::prelude::*;

fn add_and_double(a: i64) -> impl Action<i64, Output = i64> {
    update_state(move |s: i64| s.wrapping_add(a)).map(move |()| a.wrapping_mul(2))
}

fn scale_and_diff(b: i64) -> impl Action<i64, Output = i64> {
    from_fn(move |s: i64| (s.wrapping_mul(3), b.wrapping_sub(s)))
}

fn step(delta: i64) -> impl Action<i64, Output = i64> {
    from_fn(move |s: i64| {
        let next = s.wrapping_add(delta);
        (next, next.wrapping_mul(delta))
    })
}

fn checked_step(delta: i64) -> impl Action<i64, Output = Result<i64, i64>> {
    from_fn(move |s: i64| {
        let next = s.wrapping_add(delta);
        let outcome = if delta % 3 == 0 { Err(delta) } else { Ok(next) };
        (next, outcome)
    })
}

proptest! {
    #[test]
    fn left_identity(x in -1000i64..1000, s in -1000i64..1000) {
        prop_assert_eq!(bind(pure(x), add_and_double).run(s), add_and_double(x).run(s));
    }

    #[test]
    fn right_identity(b in -1000i64..1000, s in -1000i64..1000) {
        let action = scale_and_diff(b);
        prop_assert_eq!(bind(scale_and_diff(b), pure::<i64, i64>).run(s), action.run(s));
    }

    #[test]
    fn associativity(b in -1000i64..1000, s in -1000i64..1000) {
        let left = bind(bind(scale_and_diff(b), add_and_double), scale_and_diff);
        let right = bind(scale_and_diff(b), |a| bind(add_and_double(a), scale_and_diff));
        prop_assert_eq!(left.run(s), right.run(s));
    }

    #[test]
    fn eval_and_exec_agree_with_run(b in -1000i64..1000, s in -1000i64..1000) {
        let action = scale_and_diff(b);
        let (state, result) = run(&action, s);
        prop_assert_eq!(eval(&action, s), result);
        prop_assert_eq!(exec(&action, s), state);
    }

    #[test]
    fn state_primitives(s in any::<i64>(), v in any::<i64>(), k in -1000i64..1000) {
        prop_assert_eq!(get_state().run(s), (s, s));
        prop_assert_eq!(set_state(v).run(s), (v, ()));
        prop_assert_eq!(update_state(move |n: i64| n.wrapping_sub(k)).run(s), (s.wrapping_sub(k), ()));
    }

    #[test]
    fn all_is_a_left_to_right_fold(
        deltas in prop::collection::vec(-100i64..100, 0..8),
        s0 in -1000i64..1000,
    ) {
        let mut expected_state = s0;
        let mut expected_results = Vec::new();
        for &delta in &deltas {
            let (next, result) = step(delta).run(expected_state);
            expected_state = next;
            expected_results.push(result);
        }

        let (state, results) = all(deltas.iter().map(|&d| step(d))).run(s0);
        prop_assert_eq!(state, expected_state);
        prop_assert_eq!(results, expected_results);

        let (each_state, ()) = each(deltas.iter().map(|&d| step(d))).run(s0);
        prop_assert_eq!(each_state, expected_state);
    }

    #[test]
    fn try_all_stops_at_first_failure(
        deltas in prop::collection::vec(-100i64..100, 0..8),
        s0 in -1000i64..1000,
    ) {
        let mut expected_state = s0;
        let mut expected = Ok(Vec::new());
        for &delta in &deltas {
            let (next, outcome) = checked_step(delta).run(expected_state);
            expected_state = next;
            match outcome {
                Ok(value) => {
                    if let Ok(values) = expected.as_mut() {
                        values.push(value);
                    }
                }
                Err(e) => {
                    expected = Err(e);
                    break;
                }
            }
        }

        let (state, outcome) = try_all(deltas.iter().map(|&d| checked_step(d))).run(s0);
        prop_assert_eq!(state, expected_state);
        prop_assert_eq!(&outcome, &expected);

        let (each_state, each_outcome) = try_each(deltas.iter().map(|&d| checked_step(d))).run(s0);
        prop_assert_eq!(each_state, expected_state);
        prop_assert_eq!(each_outcome, expected.map(|_| ()));
    }

    #[test]
    fn map_laws(x in any::<i32>(), s in any::<u8>()) {
        let f = |n: i32| n.wrapping_mul(7);

        prop_assert_eq!(map(pure(x), f).run(s), pure(f(x)).run(s));
        prop_assert_eq!(
            map_ok(ok::<u8, i32, String>(x), f).run(s),
            ok::<u8, i32, String>(f(x)).run(s)
        );
        prop_assert_eq!(
            map_ok(error::<u8, i32, String>(x.to_string()), f).run(s),
            (s, Err(x.to_string()))
        );
        prop_assert_eq!(
            map_error(error::<u8, String, i32>(x), f).run(s),
            error::<u8, String, i32>(f(x)).run(s)
        );
        prop_assert_eq!(
            map_error(ok::<u8, String, i32>(x.to_string()), f).run(s),
            (s, Ok(x.to_string()))
        );
    }
}
