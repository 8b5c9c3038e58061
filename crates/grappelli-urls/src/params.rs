//! Typed path parameter extraction.
//!
//! A [`RouteMatch`](crate::route::RouteMatch) carries raw string values;
//! this module converts them into typed values via [`FromPath`].

use std::collections::HashMap;
use std::ops::Deref;

use crate::error::PathError;

/// Context for parameter extraction.
///
/// Holds both named parameters and ordered parameter values. The ordered
/// values guarantee that tuple extraction works by index, matching the
/// order of parameters in the pattern.
#[derive(Debug, Clone)]
pub struct ParamContext {
	/// Named parameters extracted from the path.
	params: HashMap<String, String>,
	/// Parameter values in pattern order.
	param_values: Vec<String>,
}

impl ParamContext {
	/// Creates a new parameter context.
	pub fn new(params: HashMap<String, String>, param_values: Vec<String>) -> Self {
		Self {
			params,
			param_values,
		}
	}

	/// Returns the raw value for a named parameter.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Returns the ordered parameter values.
	pub fn values(&self) -> &[String] {
		&self.param_values
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.param_values.len()
	}

	/// Returns whether there are no parameters.
	pub fn is_empty(&self) -> bool {
		self.param_values.is_empty()
	}
}

/// Trait for extracting typed values from path parameters.
pub trait FromPath: Sized {
	/// Extracts Self from the parameter context.
	///
	/// # Errors
	///
	/// Returns [`PathError::CountMismatch`] if the number of parameters
	/// doesn't match, or [`PathError::ParseError`] if parsing fails.
	fn from_path(ctx: &ParamContext) -> Result<Self, PathError>;
}

/// Single path parameter extractor.
///
/// # Example
///
/// ```ignore
/// use grappelli_urls::params::Path;
///
/// fn user_detail(Path(id): Path<i64>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
	/// Unwraps the inner value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> Deref for Path<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> AsRef<T> for Path<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

macro_rules! impl_from_path_for_primitive {
	($($ty:ty => $type_name:expr),* $(,)?) => {
		$(
			impl FromPath for $ty {
				fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
					if ctx.param_values.len() != 1 {
						return Err(PathError::CountMismatch {
							expected: 1,
							actual: ctx.param_values.len(),
						});
					}

					ctx.param_values[0]
						.parse::<$ty>()
						.map_err(|e| PathError::ParseError {
							param_index: 0,
							param_type: $type_name,
							raw_value: ctx.param_values[0].clone(),
							source: format!("{}", e),
						})
				}
			}
		)*
	};
}

impl_from_path_for_primitive! {
	i32 => "i32",
	i64 => "i64",
	u32 => "u32",
	u64 => "u64",
	bool => "bool",
}

// String needs no parsing
impl FromPath for String {
	fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
		if ctx.param_values.len() != 1 {
			return Err(PathError::CountMismatch {
				expected: 1,
				actual: ctx.param_values.len(),
			});
		}

		Ok(ctx.param_values[0].clone())
	}
}

impl<T: FromPath> FromPath for Path<T> {
	fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
		T::from_path(ctx).map(Path)
	}
}

macro_rules! impl_from_path_for_tuple {
	($(($($name:ident : $idx:tt),+) => $len:expr),* $(,)?) => {
		$(
			impl<$($name),+> FromPath for ($($name,)+)
			where
				$($name: SingleFromPath,)+
			{
				fn from_path(ctx: &ParamContext) -> Result<Self, PathError> {
					if ctx.param_values.len() != $len {
						return Err(PathError::CountMismatch {
							expected: $len,
							actual: ctx.param_values.len(),
						});
					}

					Ok(($($name::from_path_at(ctx, $idx)?,)+))
				}
			}
		)*
	};
}

impl_from_path_for_tuple! {
	(T1: 0) => 1,
	(T1: 0, T2: 1) => 2,
	(T1: 0, T2: 1, T3: 2) => 3,
}

/// Trait for extracting a single value at a specific index from path
/// parameters. Supports multi-parameter tuple extraction.
pub trait SingleFromPath: Sized {
	/// Extracts a single value at the given index.
	fn from_path_at(ctx: &ParamContext, index: usize) -> Result<Self, PathError>;
}

impl<T> SingleFromPath for T
where
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	fn from_path_at(ctx: &ParamContext, index: usize) -> Result<Self, PathError> {
		if index >= ctx.param_values.len() {
			return Err(PathError::CountMismatch {
				expected: index + 1,
				actual: ctx.param_values.len(),
			});
		}

		ctx.param_values[index]
			.parse::<T>()
			.map_err(|e| PathError::ParseError {
				param_index: index,
				param_type: std::any::type_name::<T>(),
				raw_value: ctx.param_values[index].clone(),
				source: format!("{}", e),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ctx(values: &[&str]) -> ParamContext {
		let params = values
			.iter()
			.enumerate()
			.map(|(i, v)| (format!("p{}", i), v.to_string()))
			.collect();
		let param_values = values.iter().map(|v| v.to_string()).collect();
		ParamContext::new(params, param_values)
	}

	#[test]
	fn test_from_path_i64() {
		let value = i64::from_path(&ctx(&["42"])).unwrap();
		assert_eq!(value, 42);
	}

	#[test]
	fn test_from_path_string() {
		let value = String::from_path(&ctx(&["hello-world"])).unwrap();
		assert_eq!(value, "hello-world");
	}

	#[test]
	fn test_from_path_parse_failure() {
		let err = i32::from_path(&ctx(&["abc"])).unwrap_err();
		assert!(matches!(err, PathError::ParseError { .. }));
	}

	#[test]
	fn test_from_path_count_mismatch() {
		let err = i32::from_path(&ctx(&["1", "2"])).unwrap_err();
		assert_eq!(
			err,
			PathError::CountMismatch {
				expected: 1,
				actual: 2
			}
		);
	}

	#[test]
	fn test_path_wrapper_deref() {
		let wrapped = Path::<i64>::from_path(&ctx(&["7"])).unwrap();
		assert_eq!(*wrapped, 7);
		assert_eq!(wrapped.into_inner(), 7);
	}

	#[test]
	fn test_tuple_extraction() {
		let (a, b): (i64, String) = FromPath::from_path(&ctx(&["10", "abc"])).unwrap();
		assert_eq!(a, 10);
		assert_eq!(b, "abc");
	}

	#[test]
	fn test_tuple_extraction_three() {
		let (a, b, c): (String, i64, bool) =
			FromPath::from_path(&ctx(&["acme", "5", "true"])).unwrap();
		assert_eq!(a, "acme");
		assert_eq!(b, 5);
		assert!(c);
	}

	#[test]
	fn test_single_from_path_out_of_range() {
		let err = <i64 as SingleFromPath>::from_path_at(&ctx(&["1"]), 3).unwrap_err();
		assert!(matches!(err, PathError::CountMismatch { .. }));
	}

	#[test]
	fn test_param_context_named_access() {
		let context = ctx(&["42"]);
		assert_eq!(context.get("p0"), Some("42"));
		assert_eq!(context.get("missing"), None);
		assert_eq!(context.len(), 1);
		assert!(!context.is_empty());
	}
}
