//! Cross-check against dashu's own decimal square root

use bigfloat::tolerance::{is_within, pow2};
use bigfloat::MathContext;
use dashu_float::ops::SquareRoot;
use dashu_float::DBig;
use std::str::FromStr;

// Configuration for precision tests
const DBIG_DIGITS: usize = 100;

/// Decimal reference √x with DBIG_DIGITS significant digits
fn dbig_sqrt(literal: &str) -> DBig {
    DBig::from_str(literal)
        .unwrap()
        .with_precision(DBIG_DIGITS)
        .value()
        .sqrt()
}

#[test]
fn test_sqrt_against_dbig() {
    let ctx = MathContext::default();
    for literal in ["2", "3", "0.5", "10", "12345.6789", "0.000001", "987654321987654321"] {
        let x = ctx.parse(literal).unwrap();
        let ours = ctx.sqrt(&x).unwrap();
        let reference = ctx.parse(&dbig_sqrt(literal).to_string()).unwrap();

        // 256 bits is ~77 digits; allow a relative error of 2^-250
        let scale = pow2(bigfloat::ulp(&reference, 256).repr().exponent() + 6);
        assert!(
            is_within(&ours, &reference, &scale),
            "sqrt({}) = {}, reference {}",
            literal,
            ctx.to_decimal_string(&ours, 80),
            dbig_sqrt(literal)
        );
    }
}

#[test]
fn test_sqrt_matches_dbig_at_higher_precision() {
    let ctx = MathContext::with_precision(512).unwrap();
    let ours = ctx.sqrt(&ctx.float(7)).unwrap();
    let reference = ctx.parse(&dbig_sqrt("7").to_string()).unwrap();
    // The decimal reference only carries 100 digits
    assert!(is_within(&ours, &reference, &pow2(-320)));
}
