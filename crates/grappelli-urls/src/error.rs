//! Error types for pattern compilation and route matching.

use thiserror::Error;

/// Error raised while compiling a path pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
	/// Pattern string exceeds the maximum allowed length.
	#[error("pattern length {length} exceeds maximum allowed length of {max} bytes")]
	TooLong {
		/// Actual pattern length in bytes.
		length: usize,
		/// Maximum allowed length.
		max: usize,
	},
	/// Pattern has too many path segments.
	#[error("pattern has {count} path segments, exceeding maximum of {max}")]
	TooManySegments {
		/// Actual segment count.
		count: usize,
		/// Maximum allowed segments.
		max: usize,
	},
	/// Pattern compiled to an invalid or oversized regex.
	#[error("failed to compile pattern regex: {0}")]
	InvalidRegex(String),
}

/// Error type for path parameter extraction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
	/// Failed to parse a parameter value.
	#[error("failed to parse parameter[{param_index}] '{raw_value}' as {param_type}: {source}")]
	ParseError {
		/// Index of the parameter that failed to parse.
		param_index: usize,
		/// Expected type name.
		param_type: &'static str,
		/// Raw string value that failed to parse.
		raw_value: String,
		/// Error message from parsing.
		// Spelled `r#source` so thiserror's derive does not treat this plain
		// message string as the `Error::source()` field; it is the same
		// identifier as `source` to all callers.
		r#source: String,
	},
	/// Parameter count mismatch.
	#[error("parameter count mismatch: expected {expected}, got {actual}")]
	CountMismatch {
		/// Expected number of parameters.
		expected: usize,
		/// Actual number of parameters.
		actual: usize,
	},
}

/// Error type for matcher operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatcherError {
	/// No route matched the given path.
	#[error("route not found: {0}")]
	NotFound(String),
	/// No route registered under the given name.
	#[error("invalid route name: {0}")]
	InvalidRouteName(String),
	/// A parameter required to reverse a named route was missing.
	#[error("missing parameter: {0}")]
	MissingParameter(String),
	/// Path parameter extraction failed.
	#[error("path extraction error: {0}")]
	PathExtraction(#[from] PathError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_path_error_display() {
		let err = PathError::ParseError {
			param_index: 0,
			param_type: "i32",
			raw_value: "abc".to_string(),
			source: "invalid digit".to_string(),
		};
		assert!(err.to_string().contains("parameter[0]"));
		assert!(err.to_string().contains("abc"));
		assert!(err.to_string().contains("i32"));
	}

	#[rstest]
	fn test_path_error_count_mismatch() {
		let err = PathError::CountMismatch {
			expected: 2,
			actual: 1,
		};
		assert!(err.to_string().contains("expected 2"));
		assert!(err.to_string().contains("got 1"));
	}

	#[rstest]
	fn test_matcher_error_display() {
		assert_eq!(
			MatcherError::NotFound("/test/".to_string()).to_string(),
			"route not found: /test/"
		);
		assert_eq!(
			MatcherError::InvalidRouteName("test".to_string()).to_string(),
			"invalid route name: test"
		);
	}

	#[rstest]
	fn test_matcher_error_from_path_error() {
		let err: MatcherError = PathError::CountMismatch {
			expected: 1,
			actual: 0,
		}
		.into();
		assert!(matches!(err, MatcherError::PathExtraction(_)));
	}

	#[rstest]
	fn test_pattern_error_display() {
		let err = PatternError::TooLong {
			length: 2000,
			max: 1024,
		};
		assert!(err.to_string().contains("exceeds maximum allowed length"));
	}
}
