//! Region aligner
//!
//!     Aligns two token streams (as written by the transcoder) region by region
//!     with the Gale-Church length model. The streams carry two levels of
//!     delimiters:
//!
//!         - hard delimiters (`.PARA`) split a file into hard regions. Both files
//!           must have the same number, and hard region j of one file is only ever
//!           aligned with hard region j of the other.
//!         - soft delimiters (`.End of Sentence`) split a hard region into soft
//!           regions. The aligner may merge soft regions (2-1, 1-2, 2-2) or leave one
//!           unmatched (1-0, 0-1) to line the two sides up.
//!
//!     Output mirrors the input: every alignment step becomes one soft region in
//!     each output file, so `FILE1.al` and `FILE2.al` end up with the same number
//!     of soft and hard delimiters.

pub mod cost;
pub mod regions;
pub mod sequence;

pub use cost::{Distance, GaleChurchCost, Move};
pub use regions::{find_sub_regions, region_length, region_lengths};
pub use sequence::{seq_align, Alignment};

use crate::config::{AlignConfig, LengthUnit};
use crate::error::{AlignError, ResourceError};
use crate::files::{read_text, LineWriter};
use crate::text::split_lines;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One alignment step with the lines it pairs up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair<'a> {
    pub step: Alignment,
    pub left: Vec<&'a str>,
    pub right: Vec<&'a str>,
}

/// Aligns sequences of soft regions.
#[derive(Debug, Clone)]
pub struct GaleChurchAligner<D = GaleChurchCost> {
    distance: D,
    unit: LengthUnit,
}

impl GaleChurchAligner<GaleChurchCost> {
    pub fn from_config(config: &AlignConfig) -> Self {
        Self::new(GaleChurchCost::new(config.costs.clone()), config.length_unit)
    }
}

impl Default for GaleChurchAligner<GaleChurchCost> {
    fn default() -> Self {
        Self::from_config(&AlignConfig::default())
    }
}

impl<D: Distance> GaleChurchAligner<D> {
    pub fn new(distance: D, unit: LengthUnit) -> Self {
        Self { distance, unit }
    }

    /// Alignment steps for two sequences of soft regions.
    pub fn steps<S: AsRef<str>>(&self, left: &[&[S]], right: &[&[S]]) -> Vec<Alignment> {
        let x = region_lengths(left, self.unit);
        let y = region_lengths(right, self.unit);
        seq_align(&x, &y, &self.distance)
    }

    /// Align two sequences of soft regions and gather the lines of each step.
    pub fn align<'a, S: AsRef<str>>(
        &self,
        left: &[&'a [S]],
        right: &[&'a [S]],
    ) -> Vec<AlignedPair<'a>> {
        self.steps(left, right)
            .into_iter()
            .map(|step| AlignedPair {
                left: gather(left, step.x_range()),
                right: gather(right, step.y_range()),
                step,
            })
            .collect()
    }
}

fn gather<'a, S: AsRef<str>>(regions: &[&'a [S]], range: std::ops::Range<usize>) -> Vec<&'a str> {
    regions[range]
        .iter()
        .copied()
        .flat_map(|region| region.iter().map(|line| line.as_ref()))
        .collect()
}

/// Extra records written alongside the aligned regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignOptions {
    /// Write a `.Score <cost>` line before every step.
    pub verbose: bool,
    /// Write region counts and per-step lengths.
    pub debug: bool,
}

/// Paths written by [`align_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignOutputs {
    pub left: PathBuf,
    pub right: PathBuf,
    pub hard_regions: usize,
}

/// Output path for `input`: the input path with the configured suffix appended.
pub fn aligned_path_for(input: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Align `left` and `right` and write `<left><suffix>` and `<right><suffix>`.
pub fn align_files(
    left: &Path,
    right: &Path,
    config: &AlignConfig,
    options: AlignOptions,
) -> Result<AlignOutputs, AlignError> {
    let left_text = read_text(left)?;
    let right_text = read_text(right)?;
    let left_lines: Vec<&str> = split_lines(&left_text).collect();
    let right_lines: Vec<&str> = split_lines(&right_text).collect();

    let left_hard = find_sub_regions(&left_lines, &config.hard_delimiter);
    let right_hard = find_sub_regions(&right_lines, &config.hard_delimiter);
    if left_hard.len() != right_hard.len() {
        return Err(AlignError::HardRegionMismatch {
            delimiter: config.hard_delimiter.clone(),
            left: left.to_path_buf(),
            left_count: left_hard.len(),
            right: right.to_path_buf(),
            right_count: right_hard.len(),
        });
    }

    let mut outputs = PairWriter {
        left: LineWriter::create(aligned_path_for(left, &config.output_suffix))?,
        right: LineWriter::create(aligned_path_for(right, &config.output_suffix))?,
    };
    tracing::info!(
        "Outputting to: {} and {}",
        outputs.left.path().display(),
        outputs.right.path().display()
    );

    let aligner = GaleChurchAligner::from_config(config);
    let hard_pairs = left_hard.iter().copied().zip(right_hard.iter().copied());
    for (hard_index, (left_region, right_region)) in hard_pairs.enumerate() {
        let left_soft = find_sub_regions(left_region, &config.soft_delimiter);
        let right_soft = find_sub_regions(right_region, &config.soft_delimiter);
        if options.debug {
            outputs
                .left
                .write_line(&format!("number of soft regions={}", left_soft.len()))?;
            outputs
                .right
                .write_line(&format!("number of soft regions={}", right_soft.len()))?;
        }

        let pairs = aligner.align(&left_soft, &right_soft);
        tracing::trace!(
            hard_region = hard_index,
            left_soft = left_soft.len(),
            right_soft = right_soft.len(),
            steps = pairs.len(),
            "aligned hard region"
        );
        for (i, pair) in pairs.iter().enumerate() {
            if options.debug {
                let record = debug_record(
                    &pair.step,
                    i,
                    pairs.len(),
                    &left_soft,
                    &right_soft,
                    aligner.unit,
                );
                outputs.both(&record)?;
            }
            if options.verbose || options.debug {
                outputs.both(&format!(".Score {}", pair.step.cost))?;
            }
            for line in &pair.left {
                outputs.left.write_line(line)?;
            }
            outputs.left.write_line(&config.soft_delimiter)?;
            for line in &pair.right {
                outputs.right.write_line(line)?;
            }
            outputs.right.write_line(&config.soft_delimiter)?;
        }
        outputs.both(&config.hard_delimiter)?;
    }

    let PairWriter {
        left: left_out,
        right: right_out,
    } = outputs;
    let left_path = left_out.path().to_path_buf();
    let right_path = right_out.path().to_path_buf();
    left_out.finish()?;
    right_out.finish()?;
    Ok(AlignOutputs {
        left: left_path,
        right: right_path,
        hard_regions: left_hard.len(),
    })
}

struct PairWriter {
    left: LineWriter,
    right: LineWriter,
}

impl PairWriter {
    fn both(&mut self, line: &str) -> Result<(), ResourceError> {
        self.left.write_line(line)?;
        self.right.write_line(line)
    }
}

/// `n=<steps> i=<index> x1=.. y1=.. x2=.. y2=..`, lengths of the regions a step
/// consumed, with 0 standing for "none".
fn debug_record(
    step: &Alignment,
    index: usize,
    total: usize,
    left: &[&[&str]],
    right: &[&[&str]],
    unit: LengthUnit,
) -> String {
    let lengths = |regions: &[&[&str]], range: std::ops::Range<usize>| {
        let mut found = regions[range].iter().map(|r| region_length(*r, unit));
        (found.next().unwrap_or(0), found.next().unwrap_or(0))
    };
    let (x1, x2) = lengths(left, step.x_range());
    let (y1, y2) = lengths(right, step.y_range());
    format!("n={total} i={index} x1={x1} y1={y1} x2={x2} y2={y2}")
}
