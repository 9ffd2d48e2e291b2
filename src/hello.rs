use std::io::Write;

use anyhow::Context;

use crate::config::HelloFile;
use crate::math;

/// Sum of `a` and `b`, wrapping on overflow
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Print the greeting and the math demo to stdout
pub fn print_hello(config: &HelloFile) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    write_hello(&mut stdout.lock(), config)
}

/// Write the greeting followed by one line per math demo
pub fn write_hello(out: &mut impl Write, config: &HelloFile) -> anyhow::Result<()> {
    writeln!(out, "{}", config.greeting).context("failed to write greeting")?;

    let (a, b) = config.demo.multiply;
    log::debug!("multiply demo: {a} * {b}");
    let product = math::checked_multiply(a, b).context("multiply demo failed")?;
    writeln!(out, "Math demo: {a} * {b} = {product}")?;

    let (base, exp) = config.demo.power;
    log::debug!("power demo: {base}^{exp}");
    let result = math::checked_power(base, exp).context("power demo failed")?;
    writeln!(out, "Math demo: {base}^{exp} = {result}")?;

    let (a, b) = config.demo.divide;
    log::debug!("divide demo: {a} / {b}");
    let quotient = math::checked_divide(a, b).context("divide demo failed")?;
    writeln!(out, "Math demo: {a} / {b} = {quotient:.2}")?;

    Ok(())
}
