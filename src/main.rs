use std::path::PathBuf;

use burn::backend::NdArray;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use ihc_evaluator::{pair::ImagePair, EvaluatorConfig, Error};

type B = NdArray<f64>;

const DIRECTORY_ENV: &str = "IHC_EVALUATOR_DIRECTORY";

/// Average PSNR and SSIM between generated and real IHC images.
///
/// Every `*merged_Generated IHC*` image in the directory is compared with
/// its `*merged_IHC*` counterpart. Pairs that cannot be read, are smaller
/// than 7x7, or differ in size are skipped.
#[derive(Debug, Parser)]
#[command(name = "ihc-evaluator", version, about, long_about = None)]
struct Cli {
    /// Directory holding the generated and real images.
    #[arg(env = DIRECTORY_ENV)]
    directory: Option<PathBuf>,

    /// Evaluator config in JSON. The directory argument takes precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn evaluator_config(&self) -> Result<EvaluatorConfig, Error> {
        EvaluatorConfig::resolve(self.config.as_deref(), self.directory.as_deref())
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let cli = Cli::parse();

    let evaluator = cli.evaluator_config()?.init::<B>(&Default::default());
    let pairs = ImagePair::scan(evaluator.config.directory_path())?;

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new(pairs.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress
    };

    let report = evaluator.run_pairs(pairs, |pair, outcome| {
        if let Err(reason) = outcome {
            progress.suspend(|| println!("Skipping {}: {reason}", pair.generated_file_name));
        }
        progress.inc(1);
    });
    progress.finish_and_clear();

    println!("{report}");

    Ok(())
}
