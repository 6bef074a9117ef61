//! Simple interest.
//!
//! Equation:
//!   final = floor(principal + principal * rate * periods)

pub fn interest(principal: i64, rate: f64, periods: i64) -> i64 {
    let p = principal as f64;
    (p + p * rate * periods as f64).floor() as i64
}
