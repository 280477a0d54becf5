use rust_decimal::Decimal;
use std::str::FromStr;
use tempo_units::convert::DEFAULT_FORMAT_ROUNDING;
use tempo_units::{
    ConvertError, Locale, Quantity, RoundingMode, TimeUnit, best_unit, breakdown, convert,
    format_time, sum_times, to_duration,
};

const UNITS: [TimeUnit; 4] = [
    TimeUnit::Milliseconds,
    TimeUnit::Seconds,
    TimeUnit::Minutes,
    TimeUnit::Hours,
];

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_round_trip_all_unit_pairs() {
    let tolerance = d("0.000000001");
    for value in ["0", "1", "2.5", "59.999", "3665.678", "123456.789"] {
        let v = d(value);
        for from in UNITS {
            for to in UNITS {
                let there = convert(v, from, to, None, RoundingMode::default()).unwrap();
                let back = convert(there, to, from, None, RoundingMode::default()).unwrap();
                assert!(
                    (back - v).abs() <= tolerance,
                    "{} {} -> {} -> {} gave {}",
                    value,
                    from,
                    to,
                    from,
                    back
                );
            }
        }
    }
}

#[test]
fn test_known_conversions() {
    let cases = [
        ("1", TimeUnit::Hours, TimeUnit::Milliseconds, "3600000"),
        ("90", TimeUnit::Minutes, TimeUnit::Hours, "1.5"),
        ("1500", TimeUnit::Milliseconds, TimeUnit::Seconds, "1.5"),
        ("120", TimeUnit::Seconds, TimeUnit::Minutes, "2"),
    ];
    for (input, from, to, expected) in cases {
        let result = convert(d(input), from, to, None, RoundingMode::default()).unwrap();
        assert_eq!(result, d(expected), "{} {} -> {}", input, from, to);
    }
}

#[test]
fn test_sum_of_hours_and_minutes() {
    let items = [
        Quantity::new(d("1.5"), TimeUnit::Hours),
        Quantity::new(d("30"), TimeUnit::Minutes),
    ];
    let total = sum_times(TimeUnit::Seconds, &items, Some(2), RoundingMode::HalfEven).unwrap();
    assert_eq!(total, d("7200.00"));

    let hours = sum_times(TimeUnit::Hours, &items, None, RoundingMode::HalfEven).unwrap();
    assert_eq!(hours, d("2"));
}

#[test]
fn test_sum_rejects_negative_places() {
    let items = [Quantity::new(d("1"), TimeUnit::Seconds)];
    let err = sum_times(TimeUnit::Seconds, &items, Some(-2), RoundingMode::HalfEven).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_negative_inputs_are_rejected() {
    let minus_one = d("-1");
    let results = [
        convert(
            minus_one,
            TimeUnit::Seconds,
            TimeUnit::Hours,
            None,
            RoundingMode::default(),
        )
        .map(|_| ()),
        breakdown(minus_one).map(|_| ()),
        best_unit(minus_one).map(|_| ()),
        to_duration(minus_one, TimeUnit::Seconds).map(|_| ()),
        sum_times(TimeUnit::Seconds, &[], None, RoundingMode::default()).map(|_| ()),
    ];
    for result in results {
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConvertError::Validation { .. }),
            "unexpected error: {}",
            err
        );
    }
}

#[test]
fn test_best_unit_picks_largest_fitting_unit() {
    assert_eq!(
        best_unit(d("7200")).unwrap(),
        Quantity::new(d("2"), TimeUnit::Hours)
    );
    assert_eq!(
        best_unit(d("59.999")).unwrap(),
        Quantity::new(d("59.999"), TimeUnit::Seconds)
    );
    assert_eq!(
        best_unit(d("90")).unwrap(),
        Quantity::new(d("1.5"), TimeUnit::Minutes)
    );
    assert_eq!(
        best_unit(d("0")).unwrap(),
        Quantity::new(d("0"), TimeUnit::Milliseconds)
    );
}

#[test]
fn test_breakdown_reconstitutes_input() {
    let tolerance = d("0.000000000000000000000001");
    for value in [
        "3665.678",
        "0.001",
        "86399.999",
        "7200",
        "0.0001234",
        "3599.9999999999999999999999999",
        "7199.9999999999999999999999999",
        "59.99999999999999999999999999",
        "0.9999999999999999999999999999",
        "3600.0000000000000000000000001",
        "60.000000000000000000000000001",
    ] {
        let parts = breakdown(d(value)).unwrap();
        for (unit, component) in parts.iter() {
            assert!(
                !component.is_sign_negative(),
                "{} component of {} is negative: {}",
                unit.name(),
                value,
                component
            );
        }
        for unit in [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds] {
            assert_eq!(parts.get(unit).fract(), Decimal::ZERO);
        }
        assert!(
            (parts.total_seconds() - d(value)).abs() <= tolerance,
            "breakdown of {} sums to {}",
            value,
            parts.total_seconds()
        );
    }
}

#[test]
fn test_breakdown_example() {
    let parts = breakdown(d("3665.678")).unwrap();
    assert_eq!(parts.get(TimeUnit::Hours), d("1"));
    assert_eq!(parts.get(TimeUnit::Minutes), d("1"));
    assert_eq!(parts.get(TimeUnit::Seconds), d("5"));
    assert_eq!(parts.get(TimeUnit::Milliseconds), d("678"));
}

#[test]
fn test_format_is_deterministic() {
    let locale = Locale::from_tag("fr-FR").with_grouping(true);
    let first = format_time(d("98765.4321"), TimeUnit::Seconds, 2, DEFAULT_FORMAT_ROUNDING, Some(&locale));
    let second = format_time(d("98765.4321"), TimeUnit::Seconds, 2, DEFAULT_FORMAT_ROUNDING, Some(&locale));
    assert_eq!(first, second);
    assert_eq!(first, "98\u{202f}765,43 s");
}

#[test]
fn test_format_default_places_invariant() {
    let invariant = Locale::invariant();
    assert_eq!(
        format_time(
            d("1234.567"),
            TimeUnit::Minutes,
            3,
            DEFAULT_FORMAT_ROUNDING,
            Some(&invariant)
        ),
        "1234.567 min"
    );
    assert_eq!(
        format_time(d("0.5"), TimeUnit::Hours, 2, DEFAULT_FORMAT_ROUNDING, Some(&invariant)),
        "0.50 h"
    );
}

#[test]
fn test_format_rounding_modes_disagree_on_ties() {
    let invariant = Locale::invariant();
    let even = format_time(
        d("2.345"),
        TimeUnit::Seconds,
        2,
        RoundingMode::HalfEven,
        Some(&invariant),
    );
    let away = format_time(
        d("2.345"),
        TimeUnit::Seconds,
        2,
        RoundingMode::HalfAwayFromZero,
        Some(&invariant),
    );
    assert_eq!(even, "2.34 s");
    assert_eq!(away, "2.35 s");
}
