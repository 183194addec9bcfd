//! Fixed demonstration printed by the `run` command.

use std::io::Write;

use anyhow::Result;
use calculator_sdk::{BinaryOp, CalculatorClientV1};

pub const BANNER: &str = "Calculator App";

/// Example computations shown after the banner, in order.
pub const EXAMPLES: [(BinaryOp, f64, f64); 4] = [
    (BinaryOp::Add, 2.0, 3.0),
    (BinaryOp::Subtract, 5.0, 2.0),
    (BinaryOp::Multiply, 4.0, 3.0),
    (BinaryOp::Divide, 8.0, 2.0),
];

/// Render one example as `a <op> b = result`.
///
/// # Errors
/// Propagates the calculator error for a rejected operand.
pub fn render_line(client: &dyn CalculatorClientV1, op: BinaryOp, a: f64, b: f64) -> Result<String> {
    let result = client.apply(op, a, b)?;
    Ok(format!("{a} {op} {b} = {result}"))
}

/// Write the banner followed by every example line.
///
/// # Errors
/// Returns an error if a computation is rejected or the writer fails.
pub fn write_demo(client: &dyn CalculatorClientV1, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    for (op, a, b) in EXAMPLES {
        let line = render_line(client, op, a, b)?;
        tracing::debug!(%op, a, b, "rendered example");
        writeln!(out, "{line}")?;
    }
    Ok(())
}
