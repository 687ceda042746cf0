//! Image to tensor conversion.

pub use burn::tensor::{backend::Backend, Tensor, TensorData};
pub use image::RgbImage;

/// Converting the image to a tensor with shape `[3, H, W]`.
///
/// The samples are scaled from `0 ..= 255` to `0.0 ..= 1.0`.
pub fn get_tensor_from_image<B: Backend>(
    image: &RgbImage,
    device: &B::Device,
) -> Tensor<B, 3> {
    let (width, height) = image.dimensions();
    let samples = image
        .as_raw()
        .iter()
        .map(|&sample| sample as f32)
        .collect::<Vec<_>>();
    let data = TensorData::new(samples, [height as usize, width as usize, 3])
        .convert::<B::FloatElem>();

    // [H, W, 3] -> [3, H, W]
    Tensor::<B, 3>::from_data(data, device)
        .permute([2, 0, 1])
        .div_scalar(255.0)
}
