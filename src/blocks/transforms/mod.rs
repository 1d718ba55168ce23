//! Transform pipeline infrastructure
//!
//! A small composable transformation system: any processing stage implements
//! [`Runnable`], and stages chain into a [`Transform`] whose input/output
//! types the compiler checks at each step. Pre-built pipelines for the
//! common paths live in [`standard`] as lazy statics.
//!
//! The typed entry points in [`parsing`](crate::blocks::parsing) remain the
//! primary API; these stages delegate to the same functions and exist for
//! callers that want to compose custom pipelines (tokenize-only tooling,
//! parse-without-merge comparisons, additional tree passes).

pub mod merge_text;
pub mod stages;
pub mod standard;

use std::fmt;

/// Error produced by a pipeline stage, tagged with the stage name.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformError {
    pub stage: &'static str,
    pub message: String,
}

impl TransformError {
    pub fn new(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage '{}' failed: {}", self.stage, self.message)
    }
}

impl std::error::Error for TransformError {}

/// Anything that can transform an input into an output.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform { run_fn: Box::new(f) }
    }

    /// Chain a stage onto this transform; the stage's input type must match
    /// this transform's output type.
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

    /// Execute this transform on the given input.
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
