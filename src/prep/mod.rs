//! Line transcoder
//!
//!     Turns plain-text files into the one-token-per-line stream the region aligner
//!     consumes. For every input path, in order, the whole file is read, an output
//!     name is derived from the input's file name, and the transformed stream is
//!     written:
//!
//!         # Title            ->  .PARA
//!         The quick fox      ->  The
//!                                quick
//!                                fox
//!                                .End of Sentence
//!
//!     Outputs are named `<file name><suffix>` and land in the output directory
//!     (the working directory unless [`Transcoder::with_output_dir`] says otherwise),
//!     never next to the input. Inputs sharing a file name therefore overwrite each
//!     other's output and the last one processed wins.
//!
//!     Files are handled one at a time. Only one input and one output are open at
//!     any moment, and the output is closed before the next input is touched.

pub mod line_classification;

pub use line_classification::{classify_line, LineKind};

use crate::config::{ErrorPolicy, PrepConfig};
use crate::error::{PrepError, ResourceError};
use crate::files::{read_text, LineWriter};
use crate::text::split_lines;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Outcome of a transcoder run.
#[derive(Debug, Default)]
pub struct PrepReport {
    /// Output files written, in input order.
    pub written: Vec<PathBuf>,
    /// Inputs that failed under [`ErrorPolicy::Skip`], with the reason.
    pub skipped: Vec<(PathBuf, ResourceError)>,
}

/// Converts text files into paragraph/sentence token streams.
#[derive(Debug, Clone)]
pub struct Transcoder {
    config: PrepConfig,
    output_dir: Option<PathBuf>,
}

impl Transcoder {
    pub fn new(config: PrepConfig) -> Self {
        Self {
            config,
            output_dir: None,
        }
    }

    /// Write outputs into `dir` instead of the working directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Derive the output path for `input` from its final component alone.
    pub fn output_path_for(&self, input: &Path) -> Result<PathBuf, ResourceError> {
        let name = input.file_name().ok_or_else(|| ResourceError::NoFileName {
            path: input.to_path_buf(),
        })?;
        let mut file_name = OsString::from(name);
        file_name.push(&self.config.output_suffix);
        Ok(match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        })
    }

    /// Transform source text into output lines, without terminators.
    pub fn transcode<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        split_lines(text)
            .flat_map(move |line| self.render(classify_line(line, &self.config.comment_marker)))
    }

    fn render<'a>(&'a self, kind: LineKind<'a>) -> Vec<&'a str> {
        match kind {
            LineKind::Paragraph => vec![self.config.paragraph_marker.as_str()],
            LineKind::Sentence(mut tokens) => {
                tokens.push(self.config.sentence_marker.as_str());
                tokens
            }
        }
    }

    /// Read, transform and write one input. Returns the output path.
    pub fn transcode_file(&self, input: &Path) -> Result<PathBuf, ResourceError> {
        let text = read_text(input)?;
        let output = self.output_path_for(input)?;
        tracing::info!("Outputting to: {}", output.display());

        let mut writer = LineWriter::create(&output)?;
        for line in self.transcode(&text) {
            writer.write_line(line)?;
        }
        let written = writer.finish()?;
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            lines = written,
            "transcoded file"
        );
        Ok(output)
    }

    /// Process every path in order, honoring the configured error policy.
    pub fn process<P: AsRef<Path>>(&self, paths: &[P]) -> Result<PrepReport, PrepError> {
        let mut report = PrepReport::default();
        for path in paths {
            let path = path.as_ref();
            match self.transcode_file(path) {
                Ok(output) => report.written.push(output),
                Err(err) => match self.config.on_error {
                    ErrorPolicy::Abort => return Err(err.into()),
                    ErrorPolicy::Skip => {
                        tracing::warn!(
                            input = %path.display(),
                            failed = %err.path().display(),
                            "skipping input: {}",
                            err
                        );
                        report.skipped.push((path.to_path_buf(), err));
                    }
                },
            }
        }
        if report.written.is_empty() && !report.skipped.is_empty() {
            return Err(PrepError::NothingProcessed {
                failed: report.skipped.len(),
            });
        }
        Ok(report)
    }
}

/// Transcode `paths` into the working directory with `config`.
pub fn process<P: AsRef<Path>>(paths: &[P], config: &PrepConfig) -> Result<PrepReport, PrepError> {
    Transcoder::new(config.clone()).process(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcoder() -> Transcoder {
        Transcoder::new(PrepConfig::default())
    }

    fn transcode(text: &str) -> Vec<String> {
        transcoder().transcode(text).map(str::to_string).collect()
    }

    #[test]
    fn test_comment_then_sentence() {
        assert_eq!(
            transcode("#intro\nHello world\n"),
            vec![".PARA", "Hello", "world", ".End of Sentence"]
        );
    }

    #[test]
    fn test_empty_text_produces_nothing() {
        assert!(transcode("").is_empty());
    }

    #[test]
    fn test_blank_and_whitespace_lines_end_sentences() {
        assert_eq!(
            transcode("\n  \t\n"),
            vec![".End of Sentence", ".End of Sentence"]
        );
    }

    #[test]
    fn test_output_path_uses_file_name_only() {
        let output = transcoder()
            .output_path_for(Path::new("dir/sample.txt"))
            .unwrap();
        assert_eq!(output, PathBuf::from("sample.txt.out"));
    }

    #[test]
    fn test_output_path_in_output_dir() {
        let output = transcoder()
            .with_output_dir("/tmp/outputs")
            .output_path_for(Path::new("/data/corpus/fr.txt"))
            .unwrap();
        assert_eq!(output, PathBuf::from("/tmp/outputs/fr.txt.out"));
    }

    #[test]
    fn test_output_path_without_file_name() {
        let err = transcoder().output_path_for(Path::new("..")).unwrap_err();
        assert!(matches!(err, ResourceError::NoFileName { .. }));
    }

    #[test]
    fn test_custom_markers() {
        let config = PrepConfig {
            comment_marker: "//".to_string(),
            paragraph_marker: "<p>".to_string(),
            sentence_marker: "<s>".to_string(),
            ..PrepConfig::default()
        };
        let transcoder = Transcoder::new(config);
        let lines: Vec<_> = transcoder.transcode("// heading\n# kept\n").collect();
        assert_eq!(lines, vec!["<p>", "#", "kept", "<s>"]);
    }

    #[test]
    fn test_mongolian_vowel_separator_splits_tokens() {
        assert_eq!(
            transcode("a\u{180e}b\n"),
            vec!["a", "b", ".End of Sentence"]
        );
    }
}
