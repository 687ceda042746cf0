//! Mean of structural similarity index (MSSIM) metric.

pub use super::*;
pub use burn::module::Module;

use burn::nn::{self, conv};

/// The side length of the square comparison window.
pub const WINDOW_SIZE: usize = 7;

/// Computing the mean of structural similarity index (MSSIM) between the inputs
/// using the approaches described in the paper:
///
/// *Wang, J., Bovik, A. C., Sheikh, H. R., & Simoncelli, E. P. (2004). Image quality assessment: from error visibility to structural similarity. IEEE Transactions on Image Processing, 13(4), 600–612.*
/// https://www.cns.nyu.edu/pub/lcv/wang03-preprint.pdf
///
/// ## Details
///
/// - `self.filter.weight`: `[C, 1, 7, 7]`
///   - A uniform filter, one per channel
/// - The filter is unpadded, so only the windows lying fully inside
///   the inputs are compared.
///
#[derive(Debug, Module)]
pub struct MeanStructuralSimilarity<B: Backend, const C: usize> {
    filter: conv::Conv2d<B>,
}

impl<B: Backend, const C: usize> MeanStructuralSimilarity<B, C> {
    /// Initialize the metric with a uniform window.
    pub fn init(device: &B::Device) -> Self {
        const WEIGHT_AREA: f64 = (WINDOW_SIZE * WINDOW_SIZE) as f64;

        let mut filter = conv::Conv2dConfig::new([C; 2], [WINDOW_SIZE; 2])
            .with_bias(false)
            .with_groups(C)
            .with_initializer(nn::Initializer::Zeros)
            .with_padding(nn::PaddingConfig2d::Valid)
            .init(device);

        // [C, 1, 7, 7]
        filter.weight = filter.weight.map(|weight| {
            // w[C, 1, 7, 7] = 1 / 49
            weight.ones_like().div_scalar(WEIGHT_AREA)
        });

        Self { filter }
    }

    /// Computing the mean of structural similarity index (MSSIM) between the inputs
    /// using the equations 13-16 in the paper with a uniform window and
    /// the sample covariance.
    ///
    /// ## Details
    ///
    /// - `(input_0, input_1)`: `([n, C, h, w], [n, C, h, w])`
    ///   - The values are expected to fall within the range of `0.0` to `1.0`
    ///   - `h` and `w` should be at least [`WINDOW_SIZE`]
    /// - Return: `[1]`
    ///
    pub fn forward(
        &self,
        input_0: Tensor<B, 4>,
        input_1: Tensor<B, 4>,
    ) -> Tensor<B, 1> {
        const K1: f64 = 0.01;
        const K2: f64 = 0.03;
        const L: f64 = 1.0;
        const C1: f64 = (K1 * L) * (K1 * L);
        const C2: f64 = (K2 * L) * (K2 * L);
        const N: f64 = (WINDOW_SIZE * WINDOW_SIZE) as f64;
        // Sample covariance instead of the population one
        const COVARIANCE_NORM: f64 = N / (N - 1.0);

        debug_assert_eq!(input_0.dims(), input_1.dims());
        debug_assert_eq!(input_0.dims()[1], C);
        debug_assert!(input_0.dims()[2] >= WINDOW_SIZE);
        debug_assert!(input_0.dims()[3] >= WINDOW_SIZE);

        let input = (input_0, input_1);
        // F(x) = sum(weight * x)
        let filter = &self.filter;
        // m0 = F(x0)
        // m1 = F(x1)
        let mean = (
            filter.forward(input.0.to_owned()),
            filter.forward(input.1.to_owned()),
        );
        // m0^2 = m0 * m0
        // m1^2 = m1 * m1
        let mean2 = (
            mean.0.to_owned() * mean.0.to_owned(),
            mean.1.to_owned() * mean.1.to_owned(),
        );
        // s0^2 = k * (F(x0^2) - m0^2)
        // s1^2 = k * (F(x1^2) - m1^2)
        let std2 = (
            filter
                .forward(input.0.to_owned() * input.0.to_owned())
                .sub(mean2.0.to_owned())
                .mul_scalar(COVARIANCE_NORM),
            filter
                .forward(input.1.to_owned() * input.1.to_owned())
                .sub(mean2.1.to_owned())
                .mul_scalar(COVARIANCE_NORM),
        );
        // m_01 = m0 * m1
        let mean_01 = mean.0 * mean.1;
        // s_01 = k * (F(x0 * x1) - m_01)
        let std_01 = filter
            .forward(input.0 * input.1)
            .sub(mean_01.to_owned())
            .mul_scalar(COVARIANCE_NORM);
        // I(x0, x1) =
        // (2 * m_01 + C1) * (2 * s_01 + C2) /
        // ((m0^2 + m1^2 + C1) * (s0^2 + s1^2 + C2))
        let indexes = (mean_01.mul_scalar(2.0).add_scalar(C1))
            * (std_01.mul_scalar(2.0).add_scalar(C2))
            / ((mean2.0 + mean2.1).add_scalar(C1)
                * (std2.0 + std2.1).add_scalar(C2));

        // MI(x0, x1) = mean(I(x0, x1))
        indexes.mean()
    }
}

impl<B: Backend, const C: usize> Metric<B> for MeanStructuralSimilarity<B, C> {
    /// ## Arguments
    ///
    /// * `value` - The input tensor with shape `[N?, C, H, W]`.
    /// * `target` - The target tensor with shape `[N?, C, H, W]`.
    ///
    /// ## Returns
    ///
    /// The mean of structural similarity index (MSSIM) with shape `[1]`.
    fn evaluate<const D: usize>(
        &self,
        value: Tensor<B, D>,
        target: Tensor<B, D>,
    ) -> Tensor<B, 1> {
        debug_assert!(D >= 3, "D: {D}");

        let dims = value.dims();
        let (h, w) = (dims[D - 2], dims[D - 1]);
        let n = dims.iter().product::<usize>() / (C * h * w);

        self.forward(value.reshape([n, C, h, w]), target.reshape([n, C, h, w]))
    }
}

impl<B: Backend, const C: usize> Default for MeanStructuralSimilarity<B, C> {
    #[inline]
    fn default() -> Self {
        Self::init(&Default::default())
    }
}
