use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::{MentalHealthNN, Result, RunConfig};

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub classified: usize,
    pub skipped: usize,
}

/// Classifies one sample per input line and writes one JSON report per line.
///
/// Blank lines and lines starting with `#` are ignored. Malformed lines are skipped with a
/// warning, or end the run with their error when the config says so.
///
/// # Errors
/// `NnErr::Io` on read/write failures, `NnErr::Json` if a report can't be written, or the
/// parse error of the first malformed line when skipping is disabled.
pub fn run<R, W>(
    config: &RunConfig,
    nn: &mut MentalHealthNN,
    input: R,
    mut output: W,
) -> Result<RunStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = RunStats::default();

    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let sample = match config.input().parse_sample(line) {
            Ok(sample) => sample,
            Err(e) if config.skip_invalid() => {
                warn!("skipping line {}: {e}", i + 1);
                stats.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let prediction = nn.classify(&sample);
        debug!(line = i + 1; "classified as {}", prediction.status);

        serde_json::to_writer(&mut output, &prediction.report())?;
        writeln!(output)?;
        stats.classified += 1;
    }

    output.flush()?;
    info!(
        "run finished: classified={} skipped={}",
        stats.classified, stats.skipped
    );

    Ok(stats)
}
