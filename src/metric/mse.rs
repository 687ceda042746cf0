//! Mean square error (MSE) metric.

pub use super::*;

/// Computing the mean square error (MSE) between the inputs:
///
/// `mean((value - target) ^ 2)`
///
/// The mean covers every sample of every channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeanSquareError;

impl MeanSquareError {
    /// Initialize the metric.
    #[inline]
    pub fn init() -> Self {
        Self
    }
}

impl<B: Backend> Metric<B> for MeanSquareError {
    /// ## Returns
    ///
    /// The mean square error (MSE) with shape `[1]`.
    #[inline]
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        let error = value.sub(target);
        (error.to_owned() * error).mean()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn evaluate() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let metric = MeanSquareError::init();

        let input_0 = Tensor::<NdArray, 4>::zeros([1, 3, 8, 8], &device);
        let input_1 = Tensor::<NdArray, 4>::zeros([1, 3, 8, 8], &device);
        let score = metric.evaluate_scalar(input_0, input_1);
        assert_eq!(score, 0.0);

        let input_0 = Tensor::<NdArray, 4>::zeros([1, 3, 8, 8], &device);
        let input_1 = Tensor::<NdArray, 4>::ones([1, 3, 8, 8], &device);
        let score = metric.evaluate_scalar(input_0, input_1);
        assert_eq!(score, 1.0);

        // Only the last channel differs by 0.5
        let input_0 = Tensor::<NdArray, 3>::zeros([3, 4, 4], &device);
        let input_1 = Tensor::<NdArray, 3>::cat(
            vec![
                Tensor::zeros([2, 4, 4], &device),
                Tensor::full([1, 4, 4], 0.5, &device),
            ],
            0,
        );
        let score = metric.evaluate_scalar(input_0, input_1);
        assert!((score - 0.25 / 3.0).abs() < 1e-6, "score: {score}");
    }

    #[test]
    fn evaluate_is_symmetric() {
        use super::*;
        use burn::{backend::NdArray, tensor::Distribution};

        let device = Default::default();
        let metric = MeanSquareError::init();

        let input_0 = Tensor::<NdArray, 4>::random(
            [1, 3, 16, 16],
            Distribution::Uniform(0.0, 1.0),
            &device,
        );
        let input_1 = Tensor::<NdArray, 4>::random(
            [1, 3, 16, 16],
            Distribution::Uniform(0.0, 1.0),
            &device,
        );
        let score_0 = metric.evaluate_scalar(input_0.to_owned(), input_1.to_owned());
        let score_1 = metric.evaluate_scalar(input_1, input_0);
        assert_eq!(score_0, score_1);
    }
}
