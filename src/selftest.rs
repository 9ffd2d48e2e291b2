use std::fmt::Display;
use std::io::Write;

use anyhow::bail;

use crate::hello::add;
use crate::math;

/// One literal check, evaluated only when the group reaches it
struct Case<'a> {
    expr: &'a str,
    check: Box<dyn Fn() -> Result<String, String> + 'a>,
}

fn case<'a, T, F>(expr: &'a str, actual: F, expected: T) -> Case<'a>
where
    T: PartialEq + Display + 'a,
    F: Fn() -> T + 'a,
{
    Case {
        expr,
        check: Box::new(move || {
            let actual = actual();
            if actual == expected {
                Ok(expected.to_string())
            } else {
                Err(format!("{expected}, got {actual}"))
            }
        }),
    }
}

fn add_cases() -> Vec<Case<'static>> {
    vec![
        case("add(2, 3)", || add(2, 3), 5),
        case("add(-1, 1)", || add(-1, 1), 0),
        case("add(0, 0)", || add(0, 0), 0),
    ]
}

fn math_cases() -> Vec<Case<'static>> {
    vec![
        case("multiply(5, 3)", || math::multiply(5, 3), 15),
        case("power(2, 8)", || math::power(2, 8), 256),
        case("divide(10.0, 4.0)", || math::divide(10.0, 4.0), 2.5),
    ]
}

/// Run one group in order, stopping at the first failed case
fn run_group(out: &mut impl Write, label: &str, cases: Vec<Case<'_>>) -> anyhow::Result<()> {
    writeln!(out, "Testing {label} function...")?;
    for c in cases {
        match (c.check)() {
            Ok(expected) => log::trace!("pass: {} == {expected}", c.expr),
            Err(detail) => {
                log::error!("fail: {} == {detail}", c.expr);
                bail!("assertion failed: {} == {}", c.expr, detail);
            }
        }
    }
    writeln!(out, "  ✓ All {label} tests passed")?;
    Ok(())
}

/// Run the self test, writing progress to `out`.
///
/// Returns an error naming the first failed assertion.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Running tests...")?;
    run_group(out, "add", add_cases())?;
    run_group(out, "math", math_cases())?;
    writeln!(out, "\n✓ All tests passed!")?;
    Ok(())
}
