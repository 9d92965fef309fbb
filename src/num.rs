/// A plain number that may stand on either side of an operator with a
/// [`Complex`](crate::Complex) or a [`Vector`](crate::Vector).
///
/// Because several primitive types implement this trait, a bare literal such
/// as `2` or `1.0` next to one of those types may need a suffix (`2i32`,
/// `1.0f64`) when a method is called directly on the result.
pub trait Real: Copy {
	fn as_f64(self) -> f64;
}

macro_rules! real_impl {
	($t:ident) => {
		impl Real for $t {
			#[inline]
			fn as_f64(self) -> f64 {
				self as f64
			}
		}
	}
}

/// Invokes `$m!(t)` once for every primitive type implementing [`Real`].
macro_rules! for_each_real {
	($m:ident) => {
		$m!(u8);
		$m!(i8);
		$m!(u16);
		$m!(i16);
		$m!(u32);
		$m!(i32);
		$m!(i64);
		$m!(f32);
		$m!(f64);
	}
}

for_each_real!(real_impl);

/// Returns true if `a` and `b` differ by less than `eps`.
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
	(a - b).abs() < eps
}
