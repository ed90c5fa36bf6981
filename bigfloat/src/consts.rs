//! Shared constants of the precision-math kernel
//!
//! π is embedded as a decimal literal and parsed once per process. Each
//! [`Constants`] table rounds it (and the small integers) to one working
//! precision; the table is never mutated after construction.

use crate::BigFloat;
use dashu_float::ops::SquareRoot;
use dashu_float::DBig;
use dashu_int::IBig;
use once_cell::sync::Lazy;
use std::str::FromStr;

/// π to 1200 decimal places
pub const PI_DIGITS: &str = concat!(
    "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421",
    "170679821480865132823066470938446095505822317253594081284811174502841027019385211055596446229489",
    "549303819644288109756659334461284756482337867831652712019091456485669234603486104543266482133936",
    "072602491412737245870066063155881748815209209628292540917153643678925903600113305305488204665213",
    "841469519415116094330572703657595919530921861173819326117931051185480744623799627495673518857527",
    "248912279381830119491298336733624406566430860213949463952247371907021798609437027705392171762931",
    "767523846748184676694051320005681271452635608277857713427577896091736371787214684409012249534301",
    "465495853710507922796892589235420199561121290219608640344181598136297747713099605187072113499999",
    "983729780499510597317328160963185950244594553469083026425223082533446850352619311881710100031378",
    "387528865875332083814206171776691473035982534904287554687311595628638823537875937519577818577805",
    "321712268066130019278766111959092164201989380952572010654858632788659361533818279682303019520353",
    "018529689957736225994138912497217752834791315155748572424541506959508295331168617278558890750983",
    "81754637464939319255060400927701671139009848824013"
);

/// π parsed at full literal precision, shared by every constants table
static PI_DECIMAL: Lazy<DBig> =
    Lazy::new(|| DBig::from_str(PI_DIGITS).expect("embedded pi literal is valid"));

/// Read-only constants rounded to one working precision
#[derive(Debug, Clone)]
pub struct Constants {
    precision: usize,
    pub zero: BigFloat,
    pub one: BigFloat,
    pub two: BigFloat,
    pub minus_one: BigFloat,
    /// Crossover distance from 1 for the Euler step in `atan`
    pub half: BigFloat,
    pub pi: BigFloat,
    /// π/2, the limit of `atan` and the value of `asin(1)`
    pub half_pi: BigFloat,
    /// π/8 = atan(√2 - 1)
    pub eighth_pi: BigFloat,
    /// √2 - 1, the Euler step's shift point
    pub sqrt2_minus_one: BigFloat,
}

impl Constants {
    /// Build the table for `precision` bits
    pub fn new(precision: usize) -> Self {
        let pi: BigFloat = PI_DECIMAL
            .clone()
            .with_base_and_precision::<2>(precision)
            .value()
            .with_rounding();
        let half_pi = &pi / &integer(2, precision);
        let eighth_pi = &pi / &integer(8, precision);
        let one = integer(1, precision);
        let sqrt2_minus_one = &integer(2, precision).sqrt() - &one;

        log::debug!("built constants table at {} bits", precision);

        Self {
            precision,
            zero: integer(0, precision),
            one,
            two: integer(2, precision),
            minus_one: integer(-1, precision),
            half: BigFloat::from_parts(IBig::ONE, -1)
                .with_precision(precision)
                .value(),
            pi,
            half_pi,
            eighth_pi,
            sqrt2_minus_one,
        }
    }

    /// Working precision the table was rounded to
    pub fn precision(&self) -> usize {
        self.precision
    }
}

/// Integer `n` at `precision` bits
pub(crate) fn integer(n: i64, precision: usize) -> BigFloat {
    BigFloat::from_parts(IBig::from(n), 0)
        .with_precision(precision)
        .value()
}

#[cfg(test)]
#[path = "consts_tests.rs"]
mod tests;
