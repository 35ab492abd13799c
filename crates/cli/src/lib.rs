//! Demonstration programs for the `rat-trig` library.
//!
//! - `fibonacci <n> [-v|-V]`: print the n-th Fibonacci number.
//! - `basic-usage [--json] [--out PATH] [-v|-V]`: sample invocations of every formula.

pub mod args;
pub mod logging;
pub mod provenance;
pub mod showcase;

/// Line printed by the `fibonacci` binary.
pub fn fib_message(n: u64) -> String {
    format!("The {}-th Fibonacci number is {}", n, rat_trig::fib(n))
}
