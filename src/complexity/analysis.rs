//! Contains functions to perform an Algorithm's Time Complexity Analysis
//! out of the measurements of two passes with different `n`s.

use crate::features::PERCENT_TOLERANCE;
use super::types::{
    AlgorithmPassesInfo,
    BigOAlgorithmComplexity,
    BigOTimeMeasurements,
    ConstantSetIteratorAlgorithmPassesInfo,
};


/// Performs the Algorithm Complexity Analysis on the resource denoted by `u`, where `u1` & `u2` are the resource
/// utilization on passes 1 & 2 and, likewise, `n1` & `n2` represent the number of element, iterations or computations
/// -- in other words, represents the `n` in the Big-O notation... `O(n)`, `O(log(n))`, `O(n²)`, etc...
///
/// Each class is accepted within `±PERCENT_TOLERANCE` of its theoretical growth; growths falling between two
/// classes are reported as the `Between*` variant. A zero `u1` makes the ratios undefined and the analysis
/// yields [BigOAlgorithmComplexity::WorseThanExponential].
pub fn analyse_complexity(u1: f64, u2: f64, n1: f64, n2: f64) -> BigOAlgorithmComplexity {
    let growth = u2 / u1;
    let log_n_ratio   = n2.log2() / n1.log2();
    let n_ratio       = n2 / n1;
    let n_log_n_ratio = (n2 * n2.log2()) / (n1 * n1.log2());

    let is_below = |observed: f64| observed < 1.0 - PERCENT_TOLERANCE;
    let is_about = |observed: f64| (observed - 1.0).abs() <= PERCENT_TOLERANCE;

    if is_below(growth) {
        BigOAlgorithmComplexity::BetterThanO1
    } else if is_about(growth) {
        BigOAlgorithmComplexity::O1
    } else if is_below(growth / log_n_ratio) {
        BigOAlgorithmComplexity::BetweenO1AndOLogN
    } else if is_about(growth / log_n_ratio) {
        BigOAlgorithmComplexity::OLogN
    } else if is_below(growth / n_ratio) {
        BigOAlgorithmComplexity::BetweenOLogNAndON
    } else if is_about(growth / n_ratio) {
        BigOAlgorithmComplexity::ON
    } else if is_below(growth / n_log_n_ratio) {
        BigOAlgorithmComplexity::BetweenONAndONLogN
    } else if is_about(growth / n_log_n_ratio) {
        BigOAlgorithmComplexity::ONLogN
    } else if is_below(growth / n_ratio.powi(2)) {
        BigOAlgorithmComplexity::BetweenONLogNAndON2
    } else if is_about(growth / n_ratio.powi(2)) {
        BigOAlgorithmComplexity::ON2
    } else if is_below(growth / n_ratio.powi(3)) {
        BigOAlgorithmComplexity::BetweenON2AndON3
    } else if is_about(growth / n_ratio.powi(3)) {
        BigOAlgorithmComplexity::ON3
    } else if is_below(growth / n_ratio.powi(4)) {
        BigOAlgorithmComplexity::BetweenON3AndON4
    } else if is_about(growth / n_ratio.powi(4)) {
        BigOAlgorithmComplexity::ON4
    } else if is_below(u2 / u1.powf(n_ratio)) {
        BigOAlgorithmComplexity::BetweenON4AndOkN
    } else if is_about(u2 / u1.powf(n_ratio)) {
        BigOAlgorithmComplexity::OkN
    } else {
        BigOAlgorithmComplexity::WorseThanExponential
    }
}

/// Performs time complexity analysis for regular, non-iterator algorithms, such as `fib(n)`, `sort(n)`, `bsearch(e, n)`, ...
pub fn analyse_time_complexity(passes_info:  &AlgorithmPassesInfo,
                               measurements: &BigOTimeMeasurements) -> BigOAlgorithmComplexity {

    // time variation
    let t1 = measurements.pass_1_measurements.as_secs_f64();
    let t2 = measurements.pass_2_measurements.as_secs_f64();

    // set sizes
    let n1 = passes_info.pass1_n as f64;
    let n2 = passes_info.pass2_n as f64;

    analyse_complexity(t1, t2, n1, n2)
}

/// Performs time complexity analysis for an iterator algorithm that does not alter the size of the set it operates on
/// -- lookups, searches, updates... -- where each call operates on a single element of a (possibly huge) set.
///
/// Both passes must run the same number of `repetitions`, which must be chosen so the elapsed times are high
/// enough to make OS latencies negligible.\
/// The returned complexity is an asymptotic indication of the time needed to execute the algorithm once, in
/// proportion to a set of `n` elements.
pub fn analyse_time_complexity_for_constant_set_iterator_algorithm(passes_info:  &ConstantSetIteratorAlgorithmPassesInfo,
                                                                   measurements: &BigOTimeMeasurements) -> BigOAlgorithmComplexity {

    // time variation
    let t1 = measurements.pass_1_measurements.as_secs_f64();
    let t2 = measurements.pass_2_measurements.as_secs_f64();

    // set sizes
    let n1 = std::cmp::min(passes_info.pass_1_set_size, passes_info.pass_2_set_size) as f64;
    let n2 = std::cmp::max(passes_info.pass_1_set_size, passes_info.pass_2_set_size) as f64;

    analyse_complexity(t1, t2, n1, n2)
}


#[cfg(test)]
mod tests {

    //! Unit tests for [analysis](super) module

    use super::*;
    use std::time::Duration;
    use serial_test::serial;


    fn micros(pass_1: u64, pass_2: u64) -> BigOTimeMeasurements {
        BigOTimeMeasurements {
            pass_1_measurements: Duration::from_micros(pass_1),
            pass_2_measurements: Duration::from_micros(pass_2),
        }
    }

    /// tests the time complexity analysis results based on some known-to-be-correct measurement times
    #[test]
    #[serial]
    fn analyse_algorithm_theoretical_test() {
        let assert = |measurement_name, expected_complexity, passes_info: AlgorithmPassesInfo, time_measurements: BigOTimeMeasurements| {
            let observed_time_complexity = analyse_time_complexity(&passes_info, &time_measurements);
            assert_eq!(observed_time_complexity, expected_complexity, "Algorithm Analysis on regular, non-iterator algorithm for '{}' check failed!", measurement_name);
        };

        let thousands = AlgorithmPassesInfo { pass1_n: 1000, pass2_n: 2000 };
        let tens      = AlgorithmPassesInfo { pass1_n: 10,   pass2_n: 70 };

        assert("Theoretical better than O(1) algorithm",               BigOAlgorithmComplexity::BetterThanO1,        thousands, micros(100, 89));
        assert("Theoretical O(1) algorithm",                           BigOAlgorithmComplexity::O1,                  thousands, micros(100, 100));
        assert("Theoretical O(log(n)) algorithm",                      BigOAlgorithmComplexity::OLogN,               thousands, micros(100, 111));
        assert("Theoretical between O(log(n)) and O(n) algorithm",     BigOAlgorithmComplexity::BetweenOLogNAndON,   thousands, micros(100, 150));
        assert("Theoretical O(n) algorithm",                           BigOAlgorithmComplexity::ON,                  thousands, micros(100, 200));
        assert("Theoretical O(n.log(n)) algorithm",                    BigOAlgorithmComplexity::ONLogN,              thousands, micros(1000, 2220));
        assert("Theoretical between O(n.log(n)) and O(n²) algorithm",  BigOAlgorithmComplexity::BetweenONLogNAndON2, thousands, micros(1000, 3000));
        assert("Theoretical O(n²) algorithm",                          BigOAlgorithmComplexity::ON2,                 thousands, micros(1000, 4000));
        assert("Theoretical O(n³) algorithm",                          BigOAlgorithmComplexity::ON3,                 thousands, micros(1000, 8000));
        assert("Theoretical O(n^4) algorithm",                         BigOAlgorithmComplexity::ON4,                 thousands, micros(1000, 16000));
        assert("Theoretical O(k^n) algorithm",                         BigOAlgorithmComplexity::OkN,                 tens,      micros(10, 1.0e7 as u64));
        assert("O(k^n) algorithm (10% lower than the theoretical value)",   BigOAlgorithmComplexity::OkN,            tens,      micros(10, (1.0e7 * 0.901) as u64));
        assert("O(k^n) algorithm (10% greater than the theoretical value)", BigOAlgorithmComplexity::OkN,            tens,      micros(10, (1.0e7 * 1.099) as u64));
        assert("Worse than exponential algorithm",                     BigOAlgorithmComplexity::WorseThanExponential, tens,     micros(10, (1.0e7 * 1.101) as u64));
    }

    /// the same, for algorithms repeated over a set whose size doesn't change
    #[test]
    #[serial]
    fn analyse_constant_set_iterator_algorithm_theoretical_test() {
        let assert = |measurement_name, expected_complexity, passes_info: ConstantSetIteratorAlgorithmPassesInfo, time_measurements: BigOTimeMeasurements| {
            let observed_time_complexity = analyse_time_complexity_for_constant_set_iterator_algorithm(&passes_info, &time_measurements);
            assert_eq!(observed_time_complexity, expected_complexity, "Algorithm Analysis on CONSTANT SET iterator algorithm for '{}' check failed!", measurement_name);
        };

        let passes_info = ConstantSetIteratorAlgorithmPassesInfo { pass_1_set_size: 1000, pass_2_set_size: 2000, repetitions: 1000 };

        assert("Theoretical better than O(1) lookup",          BigOAlgorithmComplexity::BetterThanO1,      passes_info, micros(100, 100 - (PERCENT_TOLERANCE*100.0) as u64 - 1));
        assert("Theoretical O(1) lookup",                      BigOAlgorithmComplexity::O1,                passes_info, micros(100, 100));
        assert("Theoretical O(log(n)) lookup",                 BigOAlgorithmComplexity::OLogN,             passes_info, micros(100, 111));
        assert("Theoretical between O(log(n)) and O(n) lookup", BigOAlgorithmComplexity::BetweenOLogNAndON, passes_info, micros(100, 150));
        assert("Theoretical O(n) lookup",                      BigOAlgorithmComplexity::ON,                passes_info, micros(100, 200));
        assert("Theoretical worse than O(n) lookup",           BigOAlgorithmComplexity::ONLogN,            passes_info, micros(100, 226));

        // pass order doesn't matter for the set sizes
        let reversed = ConstantSetIteratorAlgorithmPassesInfo { pass_1_set_size: 2000, pass_2_set_size: 1000, repetitions: 1000 };
        assert("Theoretical O(n) lookup, bigger set first",    BigOAlgorithmComplexity::ON,                reversed,    micros(100, 200));
    }

    /// test algorithm complexity analysis progression when resource utilization increase
    #[test]
    #[serial]
    fn smooth_transitions() {
        let mut last_complexity = BigOAlgorithmComplexity::BetterThanO1;
        let mut last_u2 = 0.0;
        let mut u2 = 0.0_f64;
        while u2 <= 2.0e7 {
            let current_complexity = analyse_complexity(10.0, u2, 2.0, 14.0);
            let delta = current_complexity as i32 - last_complexity as i32;
            assert!(delta == 0 || delta == 1, "'analyse_complexity(..., {}, ..., ...)' suddenly went from {:?} to {:?} when `u2` went from {} to {}", u2, last_complexity, current_complexity, last_u2, u2);
            if delta == 1 {
                last_complexity = current_complexity;
                eprintln!("'analyse_complexity(...)' transitioned to {:?} when `u2`={}", current_complexity, u2);
            }
            last_u2 = u2;
            u2 += f64::max(1.0, u2 / 10_000.0);
        }
        assert_eq!(last_complexity, BigOAlgorithmComplexity::WorseThanExponential, "Please update this test to cycle through all variants of `BigOAlgorithmComplexity`");
    }

    #[test]
    fn zero_first_pass_is_inconclusive() {
        assert_eq!(analyse_complexity(0.0, 0.0, 1000.0, 2000.0), BigOAlgorithmComplexity::WorseThanExponential);
    }
}
