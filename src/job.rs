//! Configured scaling runs
//!
//! A [`ScaleJob`] takes the component lists from [`JobConfig`], fixes their
//! dimension, and applies the uniform, axis-aligned and arbitrary-axis scales
//! to a vector. The result is a [`ScaleReport`] that renders every step as text.

use std::fmt;
use std::ops::{Add, Mul};

use linscale_math::{scale, Mat2, Mat3, Mat4, MathError, Vec2, Vec3, Vec4};

use crate::config::JobConfig;

/// A vector type with matching square matrix and scale builders
pub trait Dimension:
    Copy
    + PartialEq
    + fmt::Display
    + Add<Output = Self>
    + Mul<f32, Output = Self>
    + for<'a> TryFrom<&'a [f32], Error = MathError>
{
    /// Square matrix acting on this vector type
    type Matrix: Copy + fmt::Display + Mul<Self, Output = Self>;

    /// Number of components
    const DIM: usize;

    fn uniform_scale(s: f32) -> Self::Matrix;
    fn diagonal_scale(factors: Self) -> Self::Matrix;
    fn scale_along(s: f32, axis: Self) -> Result<Self::Matrix, MathError>;
    fn project(self, onto: Self) -> Self;
    fn reject(self, from: Self) -> Self;
    fn component_mul(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
}

impl Dimension for Vec2 {
    type Matrix = Mat2;
    const DIM: usize = 2;

    fn uniform_scale(s: f32) -> Mat2 {
        scale::uniform_scale2(s)
    }

    fn diagonal_scale(factors: Self) -> Mat2 {
        Mat2::from_diagonal(factors)
    }

    fn scale_along(s: f32, axis: Self) -> Result<Mat2, MathError> {
        scale::scale_along2(s, axis)
    }

    fn project(self, onto: Self) -> Self {
        Vec2::project(self, onto)
    }

    fn reject(self, from: Self) -> Self {
        Vec2::reject(self, from)
    }

    fn component_mul(self, other: Self) -> Self {
        Vec2::component_mul(self, other)
    }

    fn is_finite(self) -> bool {
        Vec2::is_finite(self)
    }
}

impl Dimension for Vec3 {
    type Matrix = Mat3;
    const DIM: usize = 3;

    fn uniform_scale(s: f32) -> Mat3 {
        scale::uniform_scale3(s)
    }

    fn diagonal_scale(factors: Self) -> Mat3 {
        Mat3::from_diagonal(factors)
    }

    fn scale_along(s: f32, axis: Self) -> Result<Mat3, MathError> {
        scale::scale_along3(s, axis)
    }

    fn project(self, onto: Self) -> Self {
        Vec3::project(self, onto)
    }

    fn reject(self, from: Self) -> Self {
        Vec3::reject(self, from)
    }

    fn component_mul(self, other: Self) -> Self {
        Vec3::component_mul(self, other)
    }

    fn is_finite(self) -> bool {
        Vec3::is_finite(self)
    }
}

impl Dimension for Vec4 {
    type Matrix = Mat4;
    const DIM: usize = 4;

    fn uniform_scale(s: f32) -> Mat4 {
        scale::uniform_scale4(s)
    }

    fn diagonal_scale(factors: Self) -> Mat4 {
        Mat4::from_diagonal(factors)
    }

    fn scale_along(s: f32, axis: Self) -> Result<Mat4, MathError> {
        scale::scale_along4(s, axis)
    }

    fn project(self, onto: Self) -> Self {
        Vec4::project(self, onto)
    }

    fn reject(self, from: Self) -> Self {
        Vec4::reject(self, from)
    }

    fn component_mul(self, other: Self) -> Self {
        Vec4::component_mul(self, other)
    }

    fn is_finite(self) -> bool {
        Vec4::is_finite(self)
    }
}

/// Error type for building or running a scaling job
#[derive(Debug, Clone, PartialEq)]
pub enum JobError {
    /// The configured vector has a length other than 2, 3 or 4
    UnsupportedDimension(usize),
    /// A math precondition failed (mismatched lengths, zero axis)
    Math(MathError),
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::UnsupportedDimension(n) => {
                write!(f, "unsupported dimension {} (expected 2, 3 or 4)", n)
            }
            JobError::Math(err) => write!(f, "math error: {}", err),
        }
    }
}

impl std::error::Error for JobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobError::UnsupportedDimension(_) => None,
            JobError::Math(err) => Some(err),
        }
    }
}

impl From<MathError> for JobError {
    fn from(err: MathError) -> Self {
        JobError::Math(err)
    }
}

/// Scaling job for one fixed dimension
#[derive(Debug, Clone, PartialEq)]
pub struct Job<V: Dimension> {
    pub vector: V,
    pub factors: V,
    pub uniform_factor: f32,
    /// Scale factor and axis for the arbitrary-axis scale
    pub along: Option<(f32, V)>,
}

impl<V: Dimension> Job<V> {
    fn parse(config: &JobConfig) -> Result<Self, JobError> {
        let vector = V::try_from(config.vector.as_slice())?;
        let factors = V::try_from(config.factors.as_slice())?;
        let axis = config
            .axis
            .as_deref()
            .map(|a| V::try_from(a))
            .transpose()?;

        Ok(Self {
            vector,
            factors,
            uniform_factor: config.uniform_factor,
            along: axis.map(|a| (config.axis_factor, a)),
        })
    }

    fn run(&self) -> Result<ScaleReport, JobError> {
        let v = self.vector;
        let mut report = ScaleReport::new(V::DIM);
        report.push("v", v);

        let s = self.uniform_factor;
        let uniform = V::uniform_scale(s);
        log::debug!("uniform scale by {}:\n{}", s, uniform);
        report.push(format!("uniform scale by {}", s), uniform);
        report.push("uniform * v", uniform * v);
        report.push(format!("{} * v", s), v * s);

        let diagonal = V::diagonal_scale(self.factors);
        log::debug!("axis-aligned scale by {}:\n{}", self.factors, diagonal);
        let scaled = diagonal * v;
        let hadamard = self.factors.component_mul(v);
        if products_disagree(scaled, hadamard) {
            log::warn!(
                "axis-aligned scale {} differs from Hadamard product {}",
                scaled, hadamard
            );
        }
        report.push(format!("axis-aligned scale by {}", self.factors), diagonal);
        report.push("axis-aligned * v", scaled);
        report.push("factors (Hadamard) v", hadamard);

        if let Some((s, axis)) = self.along {
            let m = V::scale_along(s, axis)?;
            log::debug!("scale by {} along {}:\n{}", s, axis, m);
            report.push(format!("scale by {} along {}", s, axis), m);
            report.push("along * v", m * v);
            report.push(
                format!("{} * Proj(v, a) + Reject(v, a)", s),
                v.project(axis) * s + v.reject(axis),
            );
        }

        log::info!("ran {}D scaling job with {} steps", V::DIM, report.steps.len());
        Ok(report)
    }
}

/// True when two finite results differ
///
/// With an infinite component the matrix product can pick up `inf * 0 = NaN`
/// terms that the Hadamard product never forms, so only finite results are
/// compared.
fn products_disagree<V: Dimension>(scaled: V, hadamard: V) -> bool {
    scaled.is_finite() && hadamard.is_finite() && scaled != hadamard
}

/// Scaling job of any supported dimension
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleJob {
    Two(Job<Vec2>),
    Three(Job<Vec3>),
    Four(Job<Vec4>),
}

impl ScaleJob {
    /// Build a job from configuration
    ///
    /// The dimension is taken from `vector`; `factors` and `axis` must match it.
    pub fn from_config(config: &JobConfig) -> Result<Self, JobError> {
        match config.vector.len() {
            2 => Ok(ScaleJob::Two(Job::parse(config)?)),
            3 => Ok(ScaleJob::Three(Job::parse(config)?)),
            4 => Ok(ScaleJob::Four(Job::parse(config)?)),
            n => Err(JobError::UnsupportedDimension(n)),
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            ScaleJob::Two(_) => Vec2::DIM,
            ScaleJob::Three(_) => Vec3::DIM,
            ScaleJob::Four(_) => Vec4::DIM,
        }
    }

    /// Apply every configured scale and collect the results
    pub fn run(&self) -> Result<ScaleReport, JobError> {
        match self {
            ScaleJob::Two(job) => job.run(),
            ScaleJob::Three(job) => job.run(),
            ScaleJob::Four(job) => job.run(),
        }
    }
}

/// One labelled result in a [`ScaleReport`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStep {
    pub label: String,
    pub value: String,
}

/// Rendered results of a scaling job
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleReport {
    pub dimension: usize,
    pub steps: Vec<ReportStep>,
}

impl ScaleReport {
    fn new(dimension: usize) -> Self {
        Self {
            dimension,
            steps: Vec::new(),
        }
    }

    fn push(&mut self, label: impl Into<String>, value: impl fmt::Display) {
        self.steps.push(ReportStep {
            label: label.into(),
            value: value.to_string(),
        });
    }

    /// Rendered value of the first step with `label`
    pub fn value(&self, label: &str) -> Option<&str> {
        self.steps
            .iter()
            .find(|step| step.label == label)
            .map(|step| step.value.as_str())
    }
}

impl fmt::Display for ScaleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            // Matrices go on their own lines below the label
            if step.value.contains('\n') {
                writeln!(f, "{} =\n{}", step.label, step.value)?;
            } else {
                writeln!(f, "{} = {}", step.label, step.value)?;
            }
        }
        Ok(())
    }
}
