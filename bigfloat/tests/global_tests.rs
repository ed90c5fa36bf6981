//! Free functions on the process-wide context

use bigfloat::tolerance::{is_within, pow2};
use bigfloat::{acos, asin, atan, init, sqrt, BigFloat, Config, Error, MathContext};

/// Every test installs the same 256-bit context; whichever runs first wins.
fn ctx() -> &'static MathContext {
    init(Config::default()).unwrap()
}

fn assert_digits(ctx: &MathContext, actual: &BigFloat, expected: &str) {
    let expected_value = ctx.parse(expected).unwrap();
    assert!(
        is_within(actual, &expected_value, &pow2(-170)),
        "got {}, expected {}",
        ctx.to_decimal_string(actual, 60),
        expected
    );
}

#[test]
fn test_init_is_idempotent() {
    let first = ctx();
    let second = init(Config::default()).unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, bigfloat::global()));
    assert_eq!(first.precision(), 256);
}

#[test]
fn test_init_rejects_other_precision() {
    ctx();
    assert_eq!(
        init(Config::double()).map(|c| c.precision()),
        Err(Error::AlreadyInitialized {
            current: 256,
            requested: 53,
        })
    );
}

#[test]
fn test_sqrt_two() {
    let ctx = ctx();
    assert_digits(
        ctx,
        &sqrt(&ctx.float(2)).unwrap(),
        "1.41421356237309504880168872420969807856967187537694807317668",
    );
    assert!(matches!(sqrt(&ctx.float(-1)), Err(Error::NegativeSqrt(_))));
}

#[test]
fn test_atan_half() {
    let ctx = ctx();
    assert_digits(
        ctx,
        &atan(&ctx.ratio(1, 2)),
        "0.463647609000806116214256231461214402028537054286120263810933",
    );
}

#[test]
fn test_asin_acos_half() {
    let ctx = ctx();
    let half = ctx.ratio(1, 2);
    assert_digits(
        ctx,
        &asin(&half).unwrap(),
        "0.523598775598298873077107230546583814032861566562517636829157",
    );
    assert_digits(
        ctx,
        &acos(&half).unwrap(),
        "1.047197551196597746154214461093167628065723133125035273658314",
    );
}

#[test]
fn test_inputs_are_not_aliased() {
    let ctx = ctx();
    let x = ctx.ratio(1, 3);
    let before = x.clone();
    let _ = sqrt(&x).unwrap();
    let _ = atan(&x);
    let _ = asin(&x).unwrap();
    assert_eq!(x, before);
}

#[test]
fn test_wider_input_is_rounded_to_working_precision() {
    let ctx = ctx();
    let wide = MathContext::with_precision(1024).unwrap();
    let third_wide = wide.ratio(1, 3);
    let third = ctx.ratio(1, 3);
    assert_eq!(atan(&third_wide), atan(&third));
    assert_eq!(atan(&third_wide).precision(), 256);
}

#[test]
fn test_concurrent_callers() {
    let ctx = ctx();
    let expected = atan(&ctx.float(3));
    let results: Vec<BigFloat> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| atan(&ctx.float(3)))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for r in results {
        assert_eq!(r, expected);
    }
}
