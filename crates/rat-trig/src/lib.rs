//! Rational trigonometry over generic numeric scalars.
//!
//! Norman Wildberger's rational trigonometry replaces distance with
//! *quadrance* (squared distance) and angle with *spread* (squared sine), so
//! every formula is a short algebraic expression: no square roots, no
//! transcendental functions, no limits. With an exact scalar such as
//! `num_rational::Ratio` all results are exact.
//!
//! Layout
//! - `numeric`: the `Numeric` scalar contract (blanket-implemented).
//! - `vector`: `quad`, `dot`, `cross`, `spread` on `[T; 2]` vectors.
//! - `triangle`: `archimedes`, `spread_law`, `triple_quad_formula` on quadrances.
//! - `fib`: a standalone Fibonacci helper used by the demo CLI.
//!
//! Every function is pure, allocation-free, and monomorphized per scalar type.
//! Division by a zero denominator (in `spread` and `spread_law`) is not
//! guarded; it behaves however `T`'s own division does.
//!
//! ```text
//!           A
//!           |\
//!           | \
//!        q1 |  \ q3
//!           |   \
//!           B----C
//!             q2
//!
//!      where q1, q2, q3 are quadrances (squared distances)
//! ```

pub mod fib;
pub mod numeric;
pub mod triangle;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fib::{checked_fib, fib, MAX_FIB_INDEX};
pub use numeric::Numeric;
pub use triangle::{archimedes, spread_law, triple_quad_formula};
pub use vector::{cross, dot, quad, spread, Vector2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::numeric::Numeric;
    pub use crate::triangle::{archimedes, spread_law, triple_quad_formula};
    pub use crate::vector::{cross, dot, quad, spread, Vector2};
}
