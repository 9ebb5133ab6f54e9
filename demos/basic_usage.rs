// ============================================================================
// Basic Usage Example
// ============================================================================

use chain_calc::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Chain Calc Example ===\n");

    let mut calc = CalculatorBuilder::new()
        .standard_operations()
        .event_handler(Arc::new(LoggingEventHandler))
        .build();

    // Chained calls fold left to right; there is no operator precedence
    let q = calc.apply('*', &[2.0, 2.0]).apply('+', &[2.0]).result();
    println!("2 + 2 * 2 (left to right) = {}", q);

    let w = calc.apply('+', &[2.0, 2.0]).apply('*', &[2.0]).result();
    println!("(2 + 2) * 2 = {}", w);

    // Inner chains hand their result to the enclosing operation
    let left = calc.apply('*', &[2.0, 2.0]).result();
    let right = calc.apply('*', &[2.0, 2.0]).result();
    let e = calc.apply('+', &[left, right]).result();
    println!("(2 * 2) + (2 * 2) = {}", e);

    let quotient = calc.apply('/', &[4.0, 2.0, 2.0]).result();
    let product = calc.apply('*', &[15.0, 4.0, 10.0]).result();
    let r = calc
        .apply('+', &[quotient, product])
        .apply('-', &[0.01])
        .result();
    println!("(4 / 2 / 2) + (15 * 4 * 10) - 0.01 = {}", r);

    // The first failure latches and poisons the instance
    println!("\n=== Error Latching ===");
    let bad = calc.apply('/', &[1.0, 0.0]).result();
    println!("1 / 0 = {}", bad);
    if let Some(error) = calc.error() {
        println!("latched error: {}", error);
    }

    let after = calc.apply('+', &[2.0, 2.0]).result();
    println!("2 + 2 on the poisoned calculator = {}", after);

    // Constructing a new calculator is the only recovery path
    let mut fresh = CalculatorBuilder::new().standard_operations().build();
    println!(
        "2 + 2 on a fresh calculator = {}",
        fresh.apply('+', &[2.0, 2.0]).result()
    );
}
