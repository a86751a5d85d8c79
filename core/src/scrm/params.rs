//! Run parameters.

use std::str::FromStr;

use super::ParseError;

/// The flag after which the recombination rate and the sequence length are given.
const RECOMBINATION_FLAG: &str = "-r";

/// Parameters of a simulation run needed for conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunParameters {
    sample_count: usize,
    window_size: Option<u64>,
}

impl RunParameters {
    /// Creates new parameters from the number of haploid samples.
    ///
    /// Returns an error if the sample count is odd.
    pub fn new(sample_count: usize) -> Result<Self, ParseError> {
        if sample_count % 2 == 0 {
            Ok(Self {
                sample_count,
                window_size: None,
            })
        } else {
            Err(ParseError::OddSampleCount(sample_count))
        }
    }

    /// Sets the size of the window simulated in each replicate.
    pub fn with_window_size(mut self, window_size: u64) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Returns the number of diploid individuals.
    pub fn individuals(&self) -> usize {
        self.sample_count / 2
    }

    /// Returns the number of haploid samples.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns the size of the window simulated in each replicate, if set.
    pub fn window_size(&self) -> Option<u64> {
        self.window_size
    }
}

/// The command line echoed as the first line of simulator output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandLine(String);

impl CommandLine {
    /// Creates a new command line from the raw line.
    pub fn new<S>(line: S) -> Self
    where
        S: Into<String>,
    {
        Self(line.into())
    }

    /// Returns the raw command line.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Returns the number of haploid samples, given as the first argument to the simulator.
    pub fn sample_count(&self) -> Result<usize, ParseError> {
        let raw = self.tokens().nth(1).ok_or(ParseError::MissingSampleCount)?;

        usize::from_str(raw).map_err(|source| ParseError::InvalidSampleCount {
            raw: raw.to_string(),
            source,
        })
    }

    /// Returns the simulated sequence length, given as the second value of the recombination
    /// flag, i.e. `-r <rho> <length>`.
    pub fn window_size(&self) -> Result<u64, ParseError> {
        let raw = self
            .tokens()
            .skip_while(|&token| token != RECOMBINATION_FLAG)
            .nth(2)
            .ok_or(ParseError::MissingWindowSize)?;

        u64::from_str(raw).map_err(|source| ParseError::InvalidWindowSize {
            raw: raw.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individuals() -> Result<(), ParseError> {
        assert_eq!(RunParameters::new(4)?.individuals(), 2);
        assert_eq!(RunParameters::new(0)?.individuals(), 0);

        Ok(())
    }

    #[test]
    fn test_odd_sample_count() {
        assert_eq!(RunParameters::new(3), Err(ParseError::OddSampleCount(3)));
    }

    #[test]
    fn test_command_line_sample_count() {
        let command = CommandLine::new("scrm 20 10 -t 5 -r 4 1000 -transpose-segsites");

        assert_eq!(command.sample_count(), Ok(20));
    }

    #[test]
    fn test_command_line_window_size() {
        let command = CommandLine::new("scrm 20 10 -t 5 -r 4 1000 -transpose-segsites");

        assert_eq!(command.window_size(), Ok(1000));
    }

    #[test]
    fn test_command_line_window_size_flag_moved() {
        let command = CommandLine::new("scrm 4 1 -r 3.2 50000 -t 10 -SC abs");

        assert_eq!(command.window_size(), Ok(50000));
    }

    #[test]
    fn test_command_line_missing_tokens() {
        let command = CommandLine::new("scrm");
        assert_eq!(command.sample_count(), Err(ParseError::MissingSampleCount));
        assert_eq!(command.window_size(), Err(ParseError::MissingWindowSize));

        let command = CommandLine::new("scrm 4 1 -t 5 -r 4");
        assert_eq!(command.window_size(), Err(ParseError::MissingWindowSize));
    }

    #[test]
    fn test_command_line_not_numeric() {
        let command = CommandLine::new("scrm four 1 -t 5 -r 4 1e3");

        assert!(matches!(
            command.sample_count(),
            Err(ParseError::InvalidSampleCount { raw, .. }) if raw == "four"
        ));
        assert!(matches!(
            command.window_size(),
            Err(ParseError::InvalidWindowSize { raw, .. }) if raw == "1e3"
        ));
    }
}
