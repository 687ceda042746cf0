//! Image similarity metrics on tensors.

pub mod mse;
pub mod mssim;
pub mod psnr;

pub use mse::*;
pub use mssim::*;
pub use psnr::*;

pub use burn::tensor::{backend::Backend, ElementConversion, Tensor};

/// A metric comparing a value against a target.
pub trait Metric<B: Backend> {
    /// Evaluate the value against the target.
    ///
    /// ## Returns
    ///
    /// The metric value with shape `[1]`.
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1>;

    /// Evaluate the value against the target as a scalar.
    #[inline]
    fn evaluate_scalar<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> f64 {
        self.evaluate(value, target).into_scalar().elem()
    }
}
