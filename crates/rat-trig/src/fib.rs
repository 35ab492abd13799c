//! Iterative Fibonacci numbers (demo utility, unrelated to the trig formulas).

/// Largest `n` for which `fib(n)` fits in a `u64`.
pub const MAX_FIB_INDEX: u64 = 93;

/// The `n`-th Fibonacci number with `fib(1) == fib(2) == 1`.
///
/// Panics if `n == 0` or if the result overflows `u64` (`n > MAX_FIB_INDEX`).
///
/// ```
/// use rat_trig::fib;
///
/// assert_eq!(fib(1), 1);
/// assert_eq!(fib(2), 1);
/// assert_eq!(fib(6), 8);
/// ```
///
/// ```text
/// F(1)=1  F(2)=1  F(3)=2  F(4)=3  F(5)=5  F(6)=8  ...
/// ```
pub fn fib(n: u64) -> u64 {
    assert!(n > 0, "fib(n) requires n >= 1");
    checked_fib(n).unwrap_or_else(|| panic!("fib({n}) overflows u64"))
}

/// Like [`fib`], but returns `None` for `n == 0` or on overflow.
pub fn checked_fib(n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 2..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}
