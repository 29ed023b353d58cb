//! A tour of the Monic algebra engine.
//!
//! Parses and divides polynomials, solves equations with printed
//! derivation steps, classifies linear systems, and computes eigenvalues.
//!
//! Run with: cargo run --example equations

use monic::core::{checked_log, checked_nth_root, checked_powf};
use monic::linalg::{eigen_2x2_explained, solve_system_2x2_explained, Matrix2};
use monic::poly::Polynomial;
use monic::solve::{solve_cubic_explained, solve_quadratic_explained};

// Helper to parse a known-good polynomial literal
fn p(text: &str) -> Polynomial {
    text.parse().unwrap()
}

fn divider(title: &str) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{title}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          Monic: Equations, Systems & Eigenvalues           ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    example_1_polynomial_division();
    example_2_quadratic_with_complex_pair();
    example_3_cubic_by_newton_scan();
    example_4_system_classification();
    example_5_eigenvalues();
    example_6_checked_operations();
}

/// Example 1: Polynomial parsing and long division
fn example_1_polynomial_division() {
    divider("Example 1: Polynomial Long Division");

    let dividend = p("x^3 - 2x^2 - 5x + 6");
    let divisor = p("x - 1");
    println!("  ({dividend}) / ({divisor})\n");

    let division = dividend.divide_explained(&divisor).unwrap();
    for step in &division.steps {
        println!("  {step}");
    }
    println!("\n  quotient:  {}", division.value.quotient);
    println!("  remainder: {}\n", division.value.remainder);
}

/// Example 2: A quadratic whose roots are a conjugate pair
fn example_2_quadratic_with_complex_pair() {
    divider("Example 2: Quadratic With a Complex Pair");

    let result = solve_quadratic_explained(1.0, 2.0, 5.0);
    for step in &result.steps {
        println!("  {step}");
    }
    println!();
}

/// Example 3: A cubic solved by the bounded Newton scan
fn example_3_cubic_by_newton_scan() {
    divider("Example 3: Cubic by Newton Scan");

    // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
    let result = solve_cubic_explained(1.0, -6.0, 11.0, -6.0);
    for step in &result.steps {
        println!("  {step}");
    }
    println!();
}

/// Example 4: 2×2 systems, including an inconsistent one
fn example_4_system_classification() {
    divider("Example 4: System Classification");

    // x + y = 3, x - y = 1 has the unique solution (2, 1)
    let unique = solve_system_2x2_explained(1.0, 1.0, 3.0, 1.0, -1.0, 1.0);
    for step in &unique.steps {
        println!("  {step}");
    }
    println!("  => {:?}\n", unique.value);

    // Parallel lines: x + y = 2, 2x + 2y = 5
    let inconsistent = solve_system_2x2_explained(1.0, 1.0, 2.0, 2.0, 2.0, 5.0);
    for step in &inconsistent.steps {
        println!("  {step}");
    }
    println!("  => {:?}\n", inconsistent.value);
}

/// Example 5: Eigenvalues of a symmetric matrix
fn example_5_eigenvalues() {
    divider("Example 5: Eigenvalues");

    let m = Matrix2::new([[3.0, 1.0], [1.0, 3.0]]);
    let eigen = eigen_2x2_explained(&m);
    for step in &eigen.steps {
        println!("  {step}");
    }
    println!("  => {:?}\n", eigen.value);
}

/// Example 6: Domain-checked elementary operations
fn example_6_checked_operations() {
    divider("Example 6: Checked Operations");

    println!("  2^10      = {:?}", checked_powf(2.0, 10.0));
    println!("  ln(1)     = {:?}", checked_log(1.0));
    println!("  cbrt(-27) = {:?}", checked_nth_root(-27.0, 3));

    // Out-of-domain inputs come back as typed errors, not NaN.
    if let Err(err) = checked_log(-1.0) {
        println!("  ln(-1)    rejected: {err}");
    }
    if let Err(err) = checked_powf(-2.0, 0.5) {
        println!("  (-2)^0.5  rejected: {err}");
    }
}
