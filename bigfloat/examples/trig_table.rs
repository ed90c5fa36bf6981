//! Table of atan(0.1 * k) and asin/acos at the configured precision
//!
//! Run with `RUST_LOG=bigfloat=trace` to see how many iterations each
//! series needed before the convergence monitor stopped it.

use bigfloat::{global, Result};

fn main() -> Result<()> {
    env_logger::init();

    let ctx = global();
    println!("=== bigfloat at {} bits ===\n", ctx.precision());

    println!("{:>5} | {}", "x", "atan(x)");
    println!("{}", "-".repeat(72));
    for k in 1..=20 {
        let x = ctx.ratio(k, 10);
        let z = ctx.atan(&x);
        println!("{:>5.1} | {}", k as f64 / 10.0, ctx.to_decimal_string(&z, 60));
    }

    println!("\n{:>5} | {:<34} | {}", "x", "asin(x)", "acos(x)");
    println!("{}", "-".repeat(72));
    for k in -4..=4 {
        let x = ctx.ratio(k, 4);
        let s = ctx.asin(&x)?;
        let c = ctx.acos(&x)?;
        println!(
            "{:>5.2} | {:<34} | {}",
            k as f64 / 4.0,
            ctx.to_decimal_string(&s, 30),
            ctx.to_decimal_string(&c, 30)
        );
    }

    let root2 = ctx.sqrt(&ctx.float(2))?;
    println!("\nsqrt(2) = {}", ctx.to_decimal_string(&root2, 70));
    Ok(())
}
