/// A single CPU-utilization measurement taken from one log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSample {
    pub total_cpu: f64,
}

/// Samples of one log file, trimmed to start at the first threshold crossing.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    pub samples: Vec<LogSample>,

    /// Index of the first crossing sample in the untrimmed sequence.
    /// None if no sample exceeded the threshold (nothing was trimmed).
    pub aligned_at: Option<usize>,

    /// Non-summary lines that did not yield a sample.
    pub skipped_lines: usize,
}

impl ParsedLog {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.total_cpu)
    }
}
