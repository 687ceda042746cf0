//! Average PSNR and SSIM between generated and real IHC images

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod evaluate;
pub mod function;
pub mod metric;
pub mod pair;

pub use burn::tensor::{backend::Backend, Tensor};
pub use config::EvaluatorConfig;
pub use error::Error;
pub use evaluate::{Evaluator, Report};
