//! Angle unit conversion at the working precision

use crate::context::MathContext;
use crate::BigFloat;

/// An angle in radians (1 radian = 180/π degrees)
#[derive(Debug, Clone, PartialEq)]
pub struct Radian(BigFloat);

impl Radian {
    /// Wrap a value already in radians
    pub fn new(radians: BigFloat) -> Self {
        Self(radians)
    }

    /// Convert `degrees` to radians using `ctx`'s π
    pub fn from_degrees(ctx: &MathContext, degrees: &BigFloat) -> Self {
        Self(ctx.radians(degrees))
    }

    /// This angle in degrees
    pub fn degrees(&self, ctx: &MathContext) -> BigFloat {
        ctx.degrees(&self.0)
    }

    pub fn value(&self) -> &BigFloat {
        &self.0
    }

    pub fn into_inner(self) -> BigFloat {
        self.0
    }
}

impl MathContext {
    /// `degrees * π / 180`
    pub fn radians(&self, degrees: &BigFloat) -> BigFloat {
        let degrees = self.round(degrees);
        &(&degrees * &self.constants().pi) / &self.float(180)
    }

    /// `radians * 180 / π`
    pub fn degrees(&self, radians: &BigFloat) -> BigFloat {
        let radians = self.round(radians);
        &(&radians * &self.float(180)) / &self.constants().pi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::{is_within, pow2, within_ulps};

    #[test]
    fn test_right_angle() {
        let ctx = MathContext::default();
        let right = Radian::from_degrees(&ctx, &ctx.float(90));
        assert!(within_ulps(right.value(), &ctx.constants().half_pi, 2, ctx.precision()));
        assert!(within_ulps(&right.degrees(&ctx), &ctx.float(90), 4, ctx.precision()));
    }

    #[test]
    fn test_asin_half_is_thirty_degrees() {
        let ctx = MathContext::default();
        let angle = Radian::new(ctx.asin(&ctx.ratio(1, 2)).unwrap());
        let degrees = angle.degrees(&ctx);
        assert!(is_within(&degrees, &ctx.float(30), &pow2(-200)));
        assert_eq!(ctx.to_f64(&degrees), 30.0);
    }

    #[test]
    fn test_negative_degrees() {
        let ctx = MathContext::with_precision(128).unwrap();
        let r = ctx.radians(&ctx.float(-180));
        let minus_pi = -ctx.constants().pi.clone();
        assert!(within_ulps(&r, &minus_pi, 2, ctx.precision()));
    }
}
