use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	/// Two vectors of different dimension were combined.
	#[error("dimension mismatch: expected {expected}, found {found}")]
	DimensionMismatch { expected: usize, found: usize },

	/// The payload names the operation that divided by zero.
	#[error("division by zero in {0}")]
	DivisionByZero(&'static str),

	#[error("invalid construction: {0}")]
	InvalidConstruction(String),
}

impl Error {
	pub(crate) fn dimension_mismatch(target: &str, expected: usize, found: usize) -> Self {
		log::debug!(target: target, "dimension mismatch: {} vs {}", expected, found);
		Self::DimensionMismatch { expected, found }
	}

	pub(crate) fn division_by_zero(target: &str, op: &'static str) -> Self {
		log::debug!(target: target, "division by zero in {}", op);
		Self::DivisionByZero(op)
	}

	pub(crate) fn invalid_construction(target: &str, reason: String) -> Self {
		log::debug!(target: target, "invalid construction: {}", reason);
		Self::InvalidConstruction(reason)
	}
}
