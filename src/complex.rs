use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::num::{approx, Real};

const TARGET: &str = "math::complex";

/// A complex number `re + im·i`.
///
/// Equality is exact on both parts. Use [`Complex::approx_eq`] to compare
/// results of inexact arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
	re: f64,
	im: f64,
}

impl Complex {
	pub const ZERO: Self = Self::new(0.0, 0.0);
	pub const ONE: Self = Self::new(1.0, 0.0);
	pub const I: Self = Self::new(0.0, 1.0);

	pub const fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}

	/// Like [`Complex::new`], but rejects NaN and infinite parts.
	pub fn try_new(re: f64, im: f64) -> Result<Self> {
		if !re.is_finite() || !im.is_finite() {
			return Err(Error::invalid_construction(TARGET, format!("non-finite part in ({}, {})", re, im)));
		}
		Ok(Self::new(re, im))
	}

	/// Constructs a purely real complex number `(n, 0)`.
	pub fn from_real<T: Real>(n: T) -> Self {
		Self::new(n.as_f64(), 0.0)
	}

	/// Constructs a complex number from its norm and angle, the inverse of [`Complex::trig`].
	pub fn from_polar(r: f64, theta: f64) -> Self {
		let (sin, cos) = theta.sin_cos();
		Self::new(r * cos, r * sin)
	}

	pub fn from_native(z: Complex64) -> Self {
		Self::new(z.re, z.im)
	}

	pub fn to_native(self) -> Complex64 {
		Complex64::new(self.re, self.im)
	}

	pub fn re(&self) -> f64 {
		self.re
	}

	pub fn im(&self) -> f64 {
		self.im
	}

	pub fn is_zero(&self) -> bool {
		self.re == 0.0 && self.im == 0.0
	}

	pub fn approx_eq(&self, other: Self, eps: f64) -> bool {
		approx(self.re, other.re, eps) && approx(self.im, other.im, eps)
	}
}

impl Complex {
	/// Returns the squared norm `re² + im²`.
	pub fn norm_sq(&self) -> f64 {
		self.re * self.re + self.im * self.im
	}

	/// Returns the Euclidean magnitude `sqrt(re² + im²)`.
	pub fn norm(&self) -> f64 {
		self.re.hypot(self.im)
	}

	/// Same as [`Complex::norm`].
	pub fn abs(&self) -> f64 {
		self.norm()
	}

	/// The real part when this number is purely real, otherwise the norm.
	pub fn to_f64(&self) -> f64 {
		if self.im == 0.0 {
			self.re
		} else {
			self.norm()
		}
	}

	/// Returns the principal angle in radians, in `(-π, π]`.
	pub fn arg(&self) -> f64 {
		self.im.atan2(self.re)
	}

	/// Returns the trigonometric form `(norm, angle)`.
	pub fn trig(&self) -> (f64, f64) {
		(self.norm(), self.arg())
	}

	pub fn conj(&self) -> Self {
		Self::new(self.re, -self.im)
	}

	/// Returns `conj / norm²`.
	pub fn recip(&self) -> Result<Self> {
		if self.is_zero() {
			return Err(Error::division_by_zero(TARGET, "reciprocal"));
		}

		// Scale by the larger part so the squared norm neither overflows nor underflows.
		let scale = self.re.abs().max(self.im.abs());
		let (re, im) = (self.re / scale, self.im / scale);
		let denom = (re * re + im * im) * scale;
		Ok(Self::new(re / denom, -im / denom))
	}

	/// Divides by `rhs` by multiplying with its reciprocal.
	pub fn checked_div(self, rhs: Self) -> Result<Self> {
		Ok(self * rhs.recip()?)
	}

	/// Raises this number to an integer power by repeated squaring.
	///
	/// A negative exponent raises the reciprocal to `|exp|`, so zero to a
	/// negative power fails. Any number to the power zero is one.
	pub fn powi(self, exp: i32) -> Result<Self> {
		let mut base = if exp < 0 { self.recip()? } else { self };
		let mut n = exp.unsigned_abs();
		let mut result = Self::ONE;

		while n > 0 {
			if n & 1 == 1 {
				result *= base;
			}
			n >>= 1;
			if n > 0 {
				base = base * base;
			}
		}

		Ok(result)
	}

	/// Raises this number to a real power using the principal branch of its polar form.
	pub fn powf(self, exp: f64) -> Result<Self> {
		if exp == 0.0 {
			return Ok(Self::ONE);
		}

		if self.is_zero() {
			return if exp > 0.0 {
				Ok(Self::ZERO)
			} else {
				Err(Error::division_by_zero(TARGET, "power"))
			};
		}

		let (r, theta) = self.trig();
		Ok(Self::from_polar(r.powf(exp), theta * exp))
	}
}

impl fmt::Display for Complex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_zero() {
			return f.write_str("0");
		}

		f.write_str("(")?;

		if self.re != 0.0 {
			write!(f, "{}", self.re)?;
		}

		if self.im != 0.0 {
			let sign = if self.im < 0.0 { "-" } else { "+" };
			if self.re != 0.0 {
				write!(f, " {} ", sign)?;
			} else if self.im < 0.0 {
				f.write_str(sign)?;
			}

			// A unit coefficient is written as just `i`.
			let coefficient = self.im.abs();
			if coefficient != 1.0 {
				write!(f, "{}", coefficient)?;
			}
			f.write_str("i")?;
		}

		f.write_str(")")
	}
}

impl From<Complex64> for Complex {
	fn from(z: Complex64) -> Self {
		Self::from_native(z)
	}
}

impl From<Complex> for Complex64 {
	fn from(z: Complex) -> Self {
		z.to_native()
	}
}

impl AddAssign for Complex {
	fn add_assign(&mut self, rhs: Self) {
		self.re += rhs.re;
		self.im += rhs.im;
	}
}

impl Add for Complex {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result += rhs;
		result
	}
}

impl SubAssign for Complex {
	fn sub_assign(&mut self, rhs: Self) {
		self.re -= rhs.re;
		self.im -= rhs.im;
	}
}

impl Sub for Complex {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result -= rhs;
		result
	}
}

impl Mul for Complex {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		Self::new(
			self.re * rhs.re - self.im * rhs.im,
			self.re * rhs.im + self.im * rhs.re,
		)
	}
}

impl MulAssign for Complex {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Div for Complex {
	type Output = Result<Self>;

	fn div(self, rhs: Self) -> Self::Output {
		self.checked_div(rhs)
	}
}

impl Neg for Complex {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self::new(-self.re, -self.im)
	}
}

/// Mixed operations with a plain number `n`, which acts as `(n, 0)`.
macro_rules! complex_scalar_ops {
	($t:ident) => {
		impl From<$t> for Complex {
			fn from(n: $t) -> Self {
				Self::from_real(n)
			}
		}

		impl PartialEq<$t> for Complex {
			fn eq(&self, rhs: &$t) -> bool {
				*self == Complex::from_real(*rhs)
			}
		}

		impl AddAssign<$t> for Complex {
			fn add_assign(&mut self, rhs: $t) {
				self.re += rhs.as_f64();
			}
		}

		impl Add<$t> for Complex {
			type Output = Complex;

			fn add(self, rhs: $t) -> Self::Output {
				self + Complex::from_real(rhs)
			}
		}

		impl Add<Complex> for $t {
			type Output = Complex;

			fn add(self, rhs: Complex) -> Self::Output {
				Complex::from_real(self) + rhs
			}
		}

		impl SubAssign<$t> for Complex {
			fn sub_assign(&mut self, rhs: $t) {
				self.re -= rhs.as_f64();
			}
		}

		impl Sub<$t> for Complex {
			type Output = Complex;

			fn sub(self, rhs: $t) -> Self::Output {
				self - Complex::from_real(rhs)
			}
		}

		impl Sub<Complex> for $t {
			type Output = Complex;

			fn sub(self, rhs: Complex) -> Self::Output {
				Complex::from_real(self) - rhs
			}
		}

		impl MulAssign<$t> for Complex {
			fn mul_assign(&mut self, rhs: $t) {
				let k = rhs.as_f64();
				self.re *= k;
				self.im *= k;
			}
		}

		impl Mul<$t> for Complex {
			type Output = Complex;

			fn mul(self, rhs: $t) -> Self::Output {
				let mut result = self;
				result *= rhs;
				result
			}
		}

		impl Mul<Complex> for $t {
			type Output = Complex;

			fn mul(self, rhs: Complex) -> Self::Output {
				rhs * self
			}
		}

		impl Div<$t> for Complex {
			type Output = Result<Complex>;

			fn div(self, rhs: $t) -> Self::Output {
				let k = rhs.as_f64();
				if k == 0.0 {
					return Err(Error::division_by_zero(TARGET, "division"));
				}
				Ok(Complex::new(self.re / k, self.im / k))
			}
		}

		impl Div<Complex> for $t {
			type Output = Result<Complex>;

			fn div(self, rhs: Complex) -> Self::Output {
				Complex::from_real(self).checked_div(rhs)
			}
		}
	}
}

for_each_real!(complex_scalar_ops);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::EPSILON;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};
	use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

	fn random(rng: &mut StdRng) -> Complex {
		Complex::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
	}

	#[test]
	fn construction() {
		let c = Complex::new(3.0, 4.0);
		assert_eq!((c.re(), c.im()), (3.0, 4.0));
		assert_eq!(Complex::default(), Complex::ZERO);
		assert_eq!(1.0 + Complex::I, Complex::new(1.0, 1.0));
		assert_eq!(Complex::from(2), Complex::new(2.0, 0.0));

		assert_eq!(Complex::try_new(1.0, -2.0), Ok(Complex::new(1.0, -2.0)));
		assert!(matches!(Complex::try_new(f64::NAN, 0.0), Err(Error::InvalidConstruction(_))));
		assert!(matches!(Complex::try_new(0.0, f64::INFINITY), Err(Error::InvalidConstruction(_))));
	}

	#[test]
	fn native_round_trip() {
		let z = Complex64::new(1.5, -2.0);
		let c = Complex::from(z);
		assert_eq!(c, Complex::new(1.5, -2.0));
		assert_eq!(Complex64::from(c), z);

		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			let x = random(&mut rng);
			assert_eq!(Complex::from_native(x.to_native()), x);
		}
	}

	#[test]
	fn norm() {
		assert_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
		assert_eq!(Complex::new(-3.0, 4.0).abs(), 5.0);
		assert_eq!(Complex::new(3.0, 4.0).norm_sq(), 25.0);

		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..100 {
			let (a, b): (f64, f64) = (rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3));
			let expected = (a * a + b * b).sqrt();
			assert!(approx(Complex::new(a, b).norm(), expected, 1e-9 * expected.max(1.0)), "Incorrect norm for ({}, {})", a, b);
		}
	}

	#[test]
	fn conjugate() {
		assert_eq!(Complex::new(3.0, 4.0).conj(), Complex::new(3.0, -4.0));
		assert_eq!(Complex::new(3.0, 4.0).conj().to_string(), "(3 - 4i)");
	}

	#[test]
	fn trig() {
		assert_eq!(Complex::new(3.0, 4.0).trig(), (5.0, 4.0f64.atan2(3.0)));

		let (r, theta) = Complex::new(1.0, 1.0).trig();
		assert!(approx(r, 2f64.sqrt(), EPSILON));
		assert!(approx(theta, FRAC_PI_4, EPSILON));

		assert_eq!(Complex::new(-1.0, 0.0).arg(), PI);
		assert_eq!(Complex::new(0.0, -2.0).arg(), -FRAC_PI_2);

		let c = Complex::new(-2.5, 1.25);
		let (r, theta) = c.trig();
		assert!(Complex::from_polar(r, theta).approx_eq(c, EPSILON));
	}

	#[test]
	fn display() {
		assert_eq!(Complex::new(3.0, 4.0).to_string(), "(3 + 4i)");
		assert_eq!(Complex::new(1.0, 1.0).to_string(), "(1 + i)");
		assert_eq!(Complex::new(1.0, -1.0).to_string(), "(1 - i)");
		assert_eq!(Complex::new(0.6, -0.8).to_string(), "(0.6 - 0.8i)");
		assert_eq!(Complex::new(0.0, 1.0).to_string(), "(i)");
		assert_eq!(Complex::new(0.0, -2.0).to_string(), "(-2i)");
		assert_eq!(Complex::new(2.0, 0.0).to_string(), "(2)");
		assert_eq!(Complex::new(-2.5, 0.0).to_string(), "(-2.5)");
		assert_eq!(Complex::ZERO.to_string(), "0");
	}

	#[test]
	fn addition() {
		assert_eq!(Complex::new(3.0, 4.0) + Complex::new(1.0, 1.0), Complex::new(4.0, 5.0));
		assert_eq!(Complex::new(1.0, 2.0) + 5.0, Complex::new(6.0, 2.0));
		assert_eq!(5 + Complex::new(1.0, 2.0), Complex::new(6.0, 2.0));

		let mut rng = StdRng::seed_from_u64(2);
		for _ in 0..100 {
			let (x, y) = (random(&mut rng), random(&mut rng));
			assert_eq!(x + y, y + x);
		}
	}

	#[test]
	fn subtraction() {
		assert_eq!(Complex::new(3.0, 4.0) - Complex::new(1.0, 2.0), Complex::new(2.0, 2.0));
		assert_eq!(Complex::new(3.0, 4.0) - 2.0, Complex::new(1.0, 4.0));
		assert_eq!(2.0 - Complex::new(3.0, 4.0), Complex::new(-1.0, -4.0));
		assert_eq!(-Complex::new(3.0, -4.0), Complex::new(-3.0, 4.0));
	}

	#[test]
	fn multiplication() {
		assert_eq!(Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0), Complex::new(-5.0, 10.0));
		assert_eq!(Complex::new(1.0, 2.0) * 2.0, Complex::new(2.0, 4.0));
		assert_eq!(3 * Complex::I, Complex::new(0.0, 3.0));

		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..100 {
			let (x, y) = (random(&mut rng), random(&mut rng));
			assert_eq!(x * y, y * x);
		}
	}

	#[test]
	fn reciprocal() {
		assert!(Complex::new(3.0, 4.0).recip().unwrap().approx_eq(Complex::new(0.12, -0.16), EPSILON));
		assert_eq!(Complex::ZERO.recip(), Err(Error::DivisionByZero("reciprocal")));

		let mut rng = StdRng::seed_from_u64(4);
		for _ in 0..100 {
			let x = random(&mut rng);
			assert!((x * x.recip().unwrap()).approx_eq(Complex::ONE, EPSILON), "x * 1/x != 1 for {}", x);
		}
	}

	#[test]
	fn reciprocal_extreme_magnitudes() {
		let tiny = Complex::new(1e-200, 0.0);
		let r = tiny.recip().unwrap();
		assert!(r.re().is_finite() && r.im() == 0.0, "Incorrect reciprocal {:?}", r);
		assert!((tiny * r).approx_eq(Complex::ONE, EPSILON));

		let huge = Complex::new(1e200, 1e200);
		let r = huge.recip().unwrap();
		assert!(r.approx_eq(Complex::new(5e-201, -5e-201), 1e-210), "Incorrect reciprocal {:?}", r);
		assert!((huge * r).approx_eq(Complex::ONE, EPSILON));

		let q = (Complex::new(3e-250, 4e-250) / Complex::new(1e-250, 2e-250)).unwrap();
		assert!(q.approx_eq(Complex::new(2.2, -0.4), EPSILON));
		let q = (huge / huge).unwrap();
		assert!(q.approx_eq(Complex::ONE, EPSILON));
	}

	#[test]
	fn real_conversion() {
		assert_eq!(Complex::new(-2.5, 0.0).to_f64(), -2.5);
		assert_eq!(Complex::new(3.0, 4.0).to_f64(), 5.0);
		assert_eq!(Complex::ZERO.to_f64(), 0.0);
	}

	#[test]
	fn division() {
		let c = (Complex::new(3.0, 4.0) / Complex::new(1.0, 2.0)).unwrap();
		assert!(c.approx_eq(Complex::new(2.2, -0.4), EPSILON));

		assert_eq!(Complex::new(3.0, 4.0) / 2.0, Ok(Complex::new(1.5, 2.0)));
		assert!((1.0f64 / Complex::I).unwrap().approx_eq(-Complex::I, EPSILON));

		assert!(matches!(Complex::ONE / Complex::ZERO, Err(Error::DivisionByZero(_))));
		assert!(matches!(Complex::ONE / 0, Err(Error::DivisionByZero(_))));
		assert!(matches!(1.0 / Complex::ZERO, Err(Error::DivisionByZero(_))));
	}

	#[test]
	fn integer_power() {
		let c = Complex::new(1.0, 1.0);
		assert_eq!(c.powi(2), Ok(Complex::new(0.0, 2.0)));
		assert_eq!(c.powi(0), Ok(Complex::ONE));
		assert_eq!(c.powi(1), Ok(c));
		assert_eq!(c.powi(-2), Ok(Complex::new(0.0, -0.5)));
		assert_eq!(Complex::I.powi(4), Ok(Complex::ONE));

		assert_eq!(Complex::ZERO.powi(2), Ok(Complex::ZERO));
		assert_eq!(Complex::ZERO.powi(0), Ok(Complex::ONE));
		assert!(matches!(Complex::ZERO.powi(-1), Err(Error::DivisionByZero(_))));

		let x = Complex::new(0.5, -1.5);
		let mut repeated = Complex::ONE;
		for n in 0..10 {
			assert!(x.powi(n).unwrap().approx_eq(repeated, 1e-9), "Incorrect power {}", n);
			repeated *= x;
		}
	}

	#[test]
	fn real_power() {
		let c = Complex::new(1.0, 1.0);
		assert!(c.powf(2.0).unwrap().approx_eq(Complex::new(0.0, 2.0), EPSILON));
		assert!(Complex::new(-4.0, 0.0).powf(0.5).unwrap().approx_eq(Complex::new(0.0, 2.0), EPSILON));
		assert_eq!(c.powf(0.0), Ok(Complex::ONE));

		assert_eq!(Complex::ZERO.powf(1.5), Ok(Complex::ZERO));
		assert!(matches!(Complex::ZERO.powf(-0.5), Err(Error::DivisionByZero(_))));
	}

	#[test]
	fn equality() {
		assert_eq!(Complex::new(3.0, 4.0), Complex::new(3.0, 4.0));
		assert_ne!(Complex::new(3.0, 4.0), Complex::new(4.0, 3.0));
		assert_eq!(Complex::ZERO, 0.0);
		assert_eq!(Complex::new(5.0, 0.0), 5);
		assert_ne!(Complex::new(3.0, 4.0), 5.0);

		assert_ne!(Complex::new(0.1 + 0.2, 0.0), Complex::new(0.3, 0.0));
		assert!(Complex::new(0.1 + 0.2, 0.0).approx_eq(Complex::new(0.3, 0.0), EPSILON));
	}

	#[test]
	fn compound_assignment() {
		let mut c = Complex::new(1.0, 1.0);
		c += Complex::new(2.0, 2.0);
		assert_eq!(c, Complex::new(3.0, 3.0));

		c -= Complex::new(1.0, 1.0);
		assert_eq!(c, Complex::new(2.0, 2.0));

		c *= Complex::new(2.0, 0.0);
		assert_eq!(c, Complex::new(4.0, 4.0));

		c *= Complex::I;
		assert_eq!(c, Complex::new(-4.0, 4.0));

		c += 1;
		c -= 0.5;
		c *= 2.0;
		assert_eq!(c, Complex::new(-7.0, 8.0));
	}
}
