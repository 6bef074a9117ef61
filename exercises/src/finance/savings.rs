//! Take-home savings after tax and expenses.
//!
//! Variables:
//!   gross    = gross pay in centavos
//!   tax_rate = fraction of gross withheld, 0.0..=1.0
//!   expenses = expenses in centavos
//!
//! Equation:
//!   savings = floor(gross * (1 - tax_rate)) - expenses
//!
//! The result is allowed to go negative.

pub fn savings(gross_pay: i64, tax_rate: f64, expenses: i64) -> i64 {
    let after_tax = (gross_pay as f64 * (1.0 - tax_rate)).floor() as i64;
    after_tax - expenses
}
