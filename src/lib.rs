//! Complex numbers and n-dimensional vectors.
//!
//! Both types are immutable values: every operation returns a new value.
//! Operations that can fail (division, reciprocal, normalization, combining
//! vectors of different dimension) return [`Result`].
//!
//! ```
//! use mathcustom::{vector, Complex};
//!
//! let z = Complex::new(3.0, 4.0) + Complex::new(1.0, 1.0);
//! assert_eq!(z, Complex::new(4.0, 5.0));
//! assert_eq!(z.to_string(), "(4 + 5i)");
//!
//! let dot = (&vector![1, 2, 3]? * &vector![4, 5, 6]?)?;
//! assert_eq!(dot, 32.0);
//! # Ok::<(), mathcustom::Error>(())
//! ```

/// Builds a [`Vector`] from one or more numbers of any [`Real`] type.
///
/// Expands to [`Vector::new`] and so returns a [`Result`].
#[macro_export]
macro_rules! vector {
	($($x:expr),+ $(,)?) => {
		$crate::Vector::new([$($crate::Real::as_f64($x)),+])
	};
}

#[macro_use]
mod num;

mod complex;
mod error;
mod vector;

pub use complex::Complex;
pub use error::{Error, Result};
pub use num::{approx, Real};
pub use vector::Vector;

/// Default tolerance for `approx_eq` comparisons.
pub const EPSILON: f64 = 1e-10;
