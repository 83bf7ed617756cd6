//! Defines the enums & structs returned / shared by the complexity analysis functions.

use std::{
    fmt::{Display, Formatter},
    time::Duration,
};
use super::measurements::{duration_measurement, rate_measurement};

/// Possible time complexity analysis results, in big-O notation.
/// Results are for a single operation -- remember a pass may have several operations,
/// so the time for the analysis should have '* 2 * p' added -- 'p' being the size
/// for each one of the 2 passes required for the analysis.\
/// Variants are declared in increasing order of "badness", so they may be compared with `as u32`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BigOAlgorithmComplexity {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    BetweenON2AndON3,
    ON3,
    BetweenON3AndON4,
    ON4,
    BetweenON4AndOkN,
    OkN,
    WorseThanExponential,
}
impl BigOAlgorithmComplexity {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1)",
            Self::O1                   => "O(1)",
            Self::BetweenO1AndOLogN    => "Worse than O(1) but better than O(log(n))",
            Self::OLogN                => "O(log(n))",
            Self::BetweenOLogNAndON    => "Worse than O(log(n)) but better than O(n)",
            Self::ON                   => "O(n)",
            Self::BetweenONAndONLogN   => "Worse than O(n) but better than O(n.log(n))",
            Self::ONLogN               => "O(n.log(n))",
            Self::BetweenONLogNAndON2  => "Worse than O(n.log(n)) but better than O(n²)",
            Self::ON2                  => "O(n²)",
            Self::BetweenON2AndON3     => "Worse than O(n²) but better than O(n³)",
            Self::ON3                  => "O(n³)",
            Self::BetweenON3AndON4     => "Worse than O(n³) but better than O(n⁴)",
            Self::ON4                  => "O(n⁴)",
            Self::BetweenON4AndOkN     => "Worse than O(n⁴) but better than O(kⁿ)",
            Self::OkN                  => "O(kⁿ)",
            Self::WorseThanExponential => "Worse than O(kⁿ)",
        }
    }
    /// same as [Self::as_pretty_str()], with additional info for time analysis
    pub fn as_time_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1) -- aren't the machines idle? too many threads? too little RAM?",
            Self::WorseThanExponential => "Worse than O(kⁿ) -- really bad algorithm or were the measurements too short to be meaningful?",
            _ => self.as_pretty_str(),
        }
    }
}

/// The `n`s for each of the 2 passes required for the analysis --
/// set sizes, number of elements processed or any other measure of the input size
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmPassesInfo {
    /// `n` when running "pass 1"
    pub pass1_n: u32,
    /// `n` when running "pass 2"
    pub pass2_n: u32,
}

/// Represents the pass information for "iterator algorithms" that don't alter the set size of the data
/// they operate on -- lookups, updates, searches... where the algorithm is repeated several times over a set
#[derive(Debug, Clone, Copy)]
pub struct ConstantSetIteratorAlgorithmPassesInfo {
    /// set size when running "pass 1"
    pub pass_1_set_size: u32,
    /// set size when running "pass 2"
    pub pass_2_set_size: u32,
    /// number of times the algorithm ran on each pass
    pub repetitions: u32,
}

/// represents an algorithm's run-time time measurements for passes 1 & 2, so that it can have its time complexity analysed
#[derive(Debug, Clone, Copy, Default)]
pub struct BigOTimeMeasurements {
    pub pass_1_measurements: Duration,
    pub pass_2_measurements: Duration,
}

/// All data gathered when running an algorithm's passes, for presentation purposes
pub struct AlgorithmMeasurements<'a> {
    /// a name for these measurements, for presentation purposes
    pub measurement_name:  &'a str,
    /// each pass' `n`
    pub passes_info:       AlgorithmPassesInfo,
    /// how many times the algorithm ran on each pass -- 1 for regular, non-iterator algorithms
    pub repetitions:       u32,
    pub time_measurements: BigOTimeMeasurements,
}
impl Display for AlgorithmMeasurements<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} don't work on implementers of Display
        let pass_time = |elapsed: Duration| format!("{}", duration_measurement(elapsed));
        let pass_rate = |elapsed: Duration| format!("{}", rate_measurement(self.repetitions as f64 / elapsed.as_secs_f64().max(f64::MIN_POSITIVE), "ops"));
        let per_op    = |elapsed: Duration| format!("{}", duration_measurement(elapsed / self.repetitions.max(1)));
        write!(f, "'{}' algorithm measurements:\n\
                   pass          Δt              n            ⊆r            t⁻            r/t\n\
                   1) {:>13}  {:>12}  {:>12}  {:>12}  {:>14}\n\
                   2) {:>13}  {:>12}  {:>12}  {:>12}  {:>14}\n",
               self.measurement_name,
               pass_time(self.time_measurements.pass_1_measurements), self.passes_info.pass1_n, self.repetitions,
               per_op(self.time_measurements.pass_1_measurements), pass_rate(self.time_measurements.pass_1_measurements),
               pass_time(self.time_measurements.pass_2_measurements), self.passes_info.pass2_n, self.repetitions,
               per_op(self.time_measurements.pass_2_measurements), pass_rate(self.time_measurements.pass_2_measurements))
    }
}

/// The outcome of an algorithm's time complexity analysis, along with the measurements it was based on
pub struct BigOAlgorithmAnalysis<'a> {
    pub time_complexity:        BigOAlgorithmComplexity,
    pub algorithm_measurements: AlgorithmMeasurements<'a>,
}
impl Display for BigOAlgorithmAnalysis<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\
                   --> Algorithm Time Analysis: {}\n",
               self.algorithm_measurements,
               self.time_complexity.as_time_pretty_str())
    }
}
