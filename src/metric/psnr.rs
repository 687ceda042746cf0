//! Peak signal-to-noise ratio (PSNR) metric.

pub use super::*;

/// Computing the peak signal-to-noise ratio (PSNR) between the inputs:
///
/// `10 * log10(L^2 / MSE) = -10 / log(10) * log(MSE / L^2)`
///
/// ## Details
///
/// * `L` is the data range ([`Psnr::peak`]), `1.0` by default.
/// * It relies on [`MSE`](MeanSquareError).
/// * Identical inputs yield `+inf`.
#[derive(Clone, Debug)]
pub struct Psnr<B: Backend> {
    /// Coefficient for PSNR.
    pub coefficient: Tensor<B, 1>,
    /// Inner metric.
    pub mse: MeanSquareError,
    /// The data range of the inputs.
    pub peak: f64,
}

impl<B: Backend> Psnr<B> {
    /// Initialize the metric for inputs ranging from `0.0` to `1.0`.
    #[inline]
    pub fn init(device: &B::Device) -> Self {
        Self::init_with_peak(1.0, device)
    }

    /// Initialize the metric for inputs ranging from `0.0` to `peak`.
    pub fn init_with_peak(
        peak: f64,
        device: &B::Device,
    ) -> Self {
        let ten = Tensor::<B, 1>::from_floats([10.0], device);
        let coefficient = ten.to_owned().neg().div(ten.log());
        let mse = MeanSquareError::init();
        Self {
            coefficient,
            mse,
            peak,
        }
    }
}

impl<B: Backend> Metric<B> for Psnr<B> {
    /// ## Returns
    ///
    /// The peak signal-to-noise ratio (PSNR) in decibels with shape `[1]`.
    #[inline]
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        let mse = self.mse.evaluate(value, target);
        let mse_normalized = mse.div_scalar(self.peak * self.peak);
        self.coefficient.to_owned().mul(mse_normalized.log())
    }
}

impl<B: Backend> Default for Psnr<B> {
    fn default() -> Self {
        Self::init(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn default() {
        use super::*;
        use burn::backend::NdArray;

        let target = -10.0 / 10.0_f32.ln();
        let metric = Psnr::<NdArray>::default();
        let output = metric.coefficient.into_scalar();
        assert!((output - target).abs() < 1e-6, "output: {output}");
        assert_eq!(metric.peak, 1.0);
    }

    #[test]
    fn evaluate() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let metric = Psnr::init(&device);

        let input_0 = Tensor::<NdArray, 4>::zeros([1, 3, 16, 16], &device);
        let input_1 = Tensor::<NdArray, 4>::zeros([1, 3, 16, 16], &device);
        let score = metric.evaluate_scalar(input_0, input_1);
        assert_eq!(score, f64::INFINITY);

        let input_0 = Tensor::<NdArray, 4>::ones([1, 3, 16, 16], &device);
        let input_1 = Tensor::<NdArray, 4>::ones([1, 3, 16, 16], &device);
        let score = metric.evaluate_scalar(input_0, input_1);
        assert_eq!(score, f64::INFINITY);

        let input_0 = Tensor::<NdArray, 4>::zeros([1, 3, 16, 16], &device);
        let input_1 = Tensor::<NdArray, 4>::ones([1, 3, 16, 16], &device);
        let score = metric.evaluate_scalar(input_0, input_1);
        assert_eq!(score, 0.0);

        // MSE = 0.25 => 10 * log10(4)
        let input_0 = Tensor::<NdArray, 2>::from_floats(
            [[0.0, 0.1, 0.2], [0.5, 0.4, 0.3]],
            &device,
        );
        let input_1 = Tensor::<NdArray, 2>::from_floats(
            [[0.5, 0.6, 0.7], [0.0, 0.9, 0.8]],
            &device,
        );
        let score = metric.evaluate_scalar(input_0, input_1);
        assert!((score - 6.0206).abs() < 1e-3, "score: {score}");
    }

    #[test]
    fn evaluate_matches_reference() {
        use super::*;
        use burn::{backend::NdArray, tensor::TensorData};

        let device = Default::default();
        let metric = Psnr::<NdArray<f64>>::init(&device);

        let samples_0 = (0..3 * 8 * 9)
            .map(|i| (i * 7 % 23) as f64 / 22.0)
            .collect::<Vec<_>>();
        let samples_1 = (0..3 * 8 * 9)
            .map(|i| (i * 5 % 19) as f64 / 18.0)
            .collect::<Vec<_>>();
        let mse = samples_0
            .iter()
            .zip(&samples_1)
            .map(|(v0, v1)| (v0 - v1).powi(2))
            .sum::<f64>()
            / samples_0.len() as f64;
        let target = 10.0 * (1.0 / mse).log10();

        let input_0 = Tensor::<NdArray<f64>, 3>::from_data(
            TensorData::new(samples_0, [3, 8, 9]),
            &device,
        );
        let input_1 = Tensor::<NdArray<f64>, 3>::from_data(
            TensorData::new(samples_1, [3, 8, 9]),
            &device,
        );
        let score = metric.evaluate_scalar(input_0, input_1);
        assert!((score - target).abs() < 1e-9, "score: {score}, target: {target}");
        assert!(score.is_finite() && score > 0.0, "score: {score}");
    }

    #[test]
    fn evaluate_with_peak() {
        use super::*;
        use burn::backend::NdArray;

        let device = Default::default();
        let metric = Psnr::<NdArray>::init_with_peak(255.0, &device);

        // An error of 1 out of 255 on every sample
        let input_0 = Tensor::<NdArray, 3>::full([3, 8, 8], 100.0, &device);
        let input_1 = Tensor::<NdArray, 3>::full([3, 8, 8], 101.0, &device);
        let score = metric.evaluate_scalar(input_0, input_1);
        let target = 20.0 * 255.0_f64.log10();
        assert!((score - target).abs() < 1e-2, "score: {score}");
    }

    #[test]
    fn evaluate_is_symmetric() {
        use super::*;
        use burn::{backend::NdArray, tensor::Distribution};

        let device = Default::default();
        let metric = Psnr::init(&device);

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
        assert!(score_0.is_finite() && score_0 > 0.0, "score: {score_0}");
    }
}
