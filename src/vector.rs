use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::num::{approx, Real};

const TARGET: &str = "math::vector";

/// A vector of one or more components. The dimension is fixed at construction.
///
/// Components are checked to be finite only by [`Vector::new`]; arithmetic
/// results follow IEEE 754 and may overflow to infinity.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
	coords: Box<[f64]>,
}

impl Vector {
	/// Builds a vector from the given components, in order.
	///
	/// Fails if there are no components or if any component is NaN or infinite.
	pub fn new<I: IntoIterator<Item = f64>>(coords: I) -> Result<Self> {
		let coords: Box<[f64]> = coords.into_iter().collect();

		if coords.is_empty() {
			return Err(Error::invalid_construction(TARGET, "a vector needs at least one component".into()));
		}

		if let Some((i, c)) = coords.iter().enumerate().find(|(_, c)| !c.is_finite()) {
			return Err(Error::invalid_construction(TARGET, format!("component {} is not finite: {}", i, c)));
		}

		Ok(Self { coords })
	}

	fn from_coords(coords: impl Iterator<Item = f64>) -> Self {
		Self { coords: coords.collect() }
	}

	/// The number of components.
	pub fn dim(&self) -> usize {
		self.coords.len()
	}

	pub fn get(&self, index: usize) -> Option<f64> {
		self.coords.get(index).copied()
	}

	pub fn as_slice(&self) -> &[f64] {
		&self.coords
	}

	pub fn iter(&self) -> std::slice::Iter<'_, f64> {
		self.coords.iter()
	}

	pub fn is_zero(&self) -> bool {
		self.coords.iter().all(|&c| c == 0.0)
	}

	/// Same dimension and every component within `eps`.
	pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
		self.dim() == other.dim() && self.iter().zip(other.iter()).all(|(&a, &b)| approx(a, b, eps))
	}

	fn check_dim(&self, other: &Self) -> Result<()> {
		if self.dim() != other.dim() {
			return Err(Error::dimension_mismatch(TARGET, self.dim(), other.dim()));
		}
		Ok(())
	}

	fn map(&self, f: impl Fn(f64) -> f64) -> Self {
		Self::from_coords(self.iter().map(|&c| f(c)))
	}

	fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
		self.check_dim(other)?;
		Ok(Self::from_coords(self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b))))
	}
}

impl Vector {
	pub fn try_add(&self, rhs: &Self) -> Result<Self> {
		self.zip_with(rhs, |a, b| a + b)
	}

	pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
		self.zip_with(rhs, |a, b| a - b)
	}

	/// Sum of component-wise products.
	pub fn dot(&self, rhs: &Self) -> Result<f64> {
		self.check_dim(rhs)?;
		Ok(self.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum())
	}

	/// Component-wise multiplication.
	pub fn cmul(&self, rhs: &Self) -> Result<Self> {
		self.zip_with(rhs, |a, b| a * b)
	}

	/// Component-wise division. Fails if any component of `rhs` is zero.
	pub fn cdiv(&self, rhs: &Self) -> Result<Self> {
		if rhs.iter().any(|&c| c == 0.0) {
			return Err(Error::division_by_zero(TARGET, "component-wise division"));
		}
		self.zip_with(rhs, |a, b| a / b)
	}

	pub fn scale<T: Real>(&self, k: T) -> Self {
		let k = k.as_f64();
		self.map(|c| c * k)
	}

	/// Multiplies every component by `1 / k`.
	pub fn checked_div<T: Real>(&self, k: T) -> Result<Self> {
		let k = k.as_f64();
		if k == 0.0 {
			return Err(Error::division_by_zero(TARGET, "division"));
		}
		Ok(self.scale(1.0 / k))
	}

	pub fn norm_sq(&self) -> f64 {
		self.iter().map(|c| c * c).sum()
	}

	/// Returns the Euclidean norm `sqrt(Σ xi²)`.
	pub fn norm(&self) -> f64 {
		// Scale by the largest magnitude so the squares neither overflow nor underflow.
		let scale = self.iter().fold(0.0f64, |m, c| m.max(c.abs()));
		if scale == 0.0 || scale.is_infinite() {
			return scale;
		}
		self.iter().map(|c| (c / scale).powi(2)).sum::<f64>().sqrt() * scale
	}

	/// Same as [`Vector::norm`].
	pub fn abs(&self) -> f64 {
		self.norm()
	}

	/// Returns this vector scaled to unit norm.
	pub fn normalize(&self) -> Result<Self> {
		let norm = self.norm();
		if norm == 0.0 {
			return Err(Error::division_by_zero(TARGET, "normalization"));
		}
		Ok(self.map(|c| c / norm))
	}
}

impl fmt::Display for Vector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, c) in self.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", c)?;
		}
		f.write_str(")")
	}
}

impl Index<usize> for Vector {
	type Output = f64;

	fn index(&self, index: usize) -> &Self::Output {
		&self.coords[index]
	}
}

impl<'a> IntoIterator for &'a Vector {
	type Item = &'a f64;
	type IntoIter = std::slice::Iter<'a, f64>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl TryFrom<Vec<f64>> for Vector {
	type Error = Error;

	fn try_from(coords: Vec<f64>) -> Result<Self> {
		Self::new(coords)
	}
}

impl TryFrom<&[f64]> for Vector {
	type Error = Error;

	fn try_from(coords: &[f64]) -> Result<Self> {
		Self::new(coords.iter().copied())
	}
}

impl Add for &Vector {
	type Output = Result<Vector>;

	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(rhs)
	}
}

impl Sub for &Vector {
	type Output = Result<Vector>;

	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(rhs)
	}
}

/// Dot product.
impl Mul for &Vector {
	type Output = Result<f64>;

	fn mul(self, rhs: Self) -> Self::Output {
		self.dot(rhs)
	}
}

impl Neg for &Vector {
	type Output = Vector;

	fn neg(self) -> Self::Output {
		self.map(|c| -c)
	}
}

impl Neg for Vector {
	type Output = Vector;

	fn neg(self) -> Self::Output {
		-&self
	}
}

/// Mixed operations with a plain number, applied to every component.
macro_rules! vector_scalar_ops {
	($t:ident) => {
		impl Add<$t> for &Vector {
			type Output = Vector;

			fn add(self, rhs: $t) -> Self::Output {
				let k = rhs.as_f64();
				self.map(|c| c + k)
			}
		}

		impl Add<&Vector> for $t {
			type Output = Vector;

			fn add(self, rhs: &Vector) -> Self::Output {
				rhs + self
			}
		}

		impl Sub<$t> for &Vector {
			type Output = Vector;

			fn sub(self, rhs: $t) -> Self::Output {
				let k = rhs.as_f64();
				self.map(|c| c - k)
			}
		}

		impl Sub<&Vector> for $t {
			type Output = Vector;

			fn sub(self, rhs: &Vector) -> Self::Output {
				let k = self.as_f64();
				rhs.map(|c| k - c)
			}
		}

		impl Mul<$t> for &Vector {
			type Output = Vector;

			fn mul(self, rhs: $t) -> Self::Output {
				self.scale(rhs)
			}
		}

		impl Mul<&Vector> for $t {
			type Output = Vector;

			fn mul(self, rhs: &Vector) -> Self::Output {
				rhs.scale(self)
			}
		}

		impl Div<$t> for &Vector {
			type Output = Result<Vector>;

			fn div(self, rhs: $t) -> Self::Output {
				self.checked_div(rhs)
			}
		}

		impl Div<&Vector> for $t {
			type Output = Result<Vector>;

			fn div(self, rhs: &Vector) -> Self::Output {
				if rhs.iter().any(|&c| c == 0.0) {
					return Err(Error::division_by_zero(TARGET, "division"));
				}
				let k = self.as_f64();
				Ok(rhs.map(|c| k / c))
			}
		}
	}
}

for_each_real!(vector_scalar_ops);
