//! Transform pipeline infrastructure
//!
//! A composable, type-safe transformation system connecting the processing
//! stages. Any transform can be chained with another if their types are
//! compatible.
//!
//! The pieces:
//!
//! - The `Runnable<I, O>` trait: the interface implemented by individual
//!   processing stages (tokenization, tree building).
//! - The `Transform<I, O>` wrapper: composition via `.then()`, with the
//!   compiler enforcing that output types match input types at each stage.
//! - Pre-built pipelines in [`standard`], exposed as
//!   `once_cell::sync::Lazy` statics so library code, tooling, and tests
//!   share the same processing paths.

pub mod standard;

use crate::atxt::lexing::SyntaxError;
use std::fmt;

/// Error that can occur during transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Generic error with message
    Error(String),
    /// Stage failed with specific error
    StageFailed { stage: String, message: String },
    /// The lexer rejected the source; carries the structured error so
    /// position and context survive the pipeline.
    Syntax(SyntaxError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
            TransformError::Syntax(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

impl From<SyntaxError> for TransformError {
    fn from(err: SyntaxError) -> Self {
        TransformError::Syntax(err)
    }
}

/// Trait for anything that can transform an input to an output.
///
/// This is implemented by individual transformation stages. The
/// `Transform` struct composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from type `I` to type `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with
    /// extended output type. The compiler ensures that the stage's input
    /// type matches this transform's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built transform to this transform. The referenced
    /// transform must have a static lifetime (typically a `Lazy` static).
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DoubleNumber;
    impl Runnable<i32, i32> for DoubleNumber {
        fn run(&self, input: i32) -> Result<i32, TransformError> {
            Ok(input * 2)
        }
    }

    struct IntToString;
    impl Runnable<i32, String> for IntToString {
        fn run(&self, input: i32) -> Result<String, TransformError> {
            Ok(input.to_string())
        }
    }

    struct FailingStage;
    impl Runnable<i32, i32> for FailingStage {
        fn run(&self, _input: i32) -> Result<i32, TransformError> {
            Err(TransformError::Error("intentional failure".to_string()))
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|x: i32| Ok(x * 2));
        assert_eq!(transform.run(5).unwrap(), 10);
    }

    #[test]
    fn test_type_changing_composition() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(DoubleNumber)
            .then(IntToString);
        assert_eq!(transform.run(5).unwrap(), "10");
    }

    #[test]
    fn test_error_propagation_skips_later_stages() {
        let transform = Transform::from_fn(|x: i32| Ok(x))
            .then(FailingStage)
            .then(DoubleNumber);
        assert_eq!(
            transform.run(5).unwrap_err(),
            TransformError::Error("intentional failure".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        let stage_err = TransformError::StageFailed {
            stage: "tokenization".to_string(),
            message: "invalid token".to_string(),
        };
        assert_eq!(
            format!("{}", stage_err),
            "Stage 'tokenization' failed: invalid token"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: TransformError = "string error".into();
        assert_eq!(err, TransformError::Error("string error".to_string()));
    }
}
