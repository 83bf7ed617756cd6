//! Knows how to run & measure algorithms for the purpose of having their time complexities analysed.\
//! See `tests/complexity_attestation.rs` for examples.

use std::{
    hint::black_box,
    ops::Range,
    panic::resume_unwind,
    time::{Duration, Instant},
};
use keen_retry::{loggable_retry_errors, ResolvedResult, RetryProducerResult, RetryResult};
use crate::features::OUTPUT;
use super::{
    analysis::{analyse_time_complexity, analyse_time_complexity_for_constant_set_iterator_algorithm},
    types::{
        AlgorithmMeasurements,
        AlgorithmPassesInfo,
        BigOAlgorithmAnalysis,
        BigOAlgorithmComplexity,
        BigOTimeMeasurements,
        ConstantSetIteratorAlgorithmPassesInfo,
    },
};


/// How long to wait before re-running the passes of an algorithm whose measurements didn't match the expectations
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// The outcome of [timed()]: whatever the closure returned and how long it took to return it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<R> {
    pub result:  R,
    pub elapsed: Duration,
}

/// Runs `f` once, measuring the wall-clock time it took.
/// ```
/// use interview_katas::complexity::runners::timed;
/// let sorted = timed(|| interview_katas::quick_sort(&[3, 1, 2]));
/// assert_eq!(sorted.result, vec![1, 2, 3]);
/// ```
pub fn timed<R>(f: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let result = black_box(f());
    Timed { result, elapsed: start.elapsed() }
}

/// wrap around the original [run_sync_pass()] to output progress & intermediate results
pub fn run_sync_pass_verbosely(result_prefix:  &str,
                               result_suffix:  &str,
                               algorithm:      impl FnMut() -> u32,
                               mut output:     impl FnMut(&str))
                              -> (Duration, u32) {
    let (elapsed, r) = run_sync_pass(algorithm);
    output(&format!("{}{:?}{}", result_prefix, elapsed, result_suffix));
    (elapsed, r)
}

/// wrap around the original [run_iterator_pass()] to output progress & intermediate results
pub fn run_iterator_pass_verbosely<IteratorAlgorithmClosure: Fn(u32) -> u32 + Sync>
                                  (result_prefix:      &str,
                                   result_suffix:      &str,
                                   iterator_algorithm: &IteratorAlgorithmClosure,
                                   range:              Range<u32>,
                                   threads:            u32,
                                   mut output:         impl FnMut(&str))
                                  -> (Duration, u32) {
    let (elapsed, r) = run_iterator_pass(iterator_algorithm, range, threads);
    output(&format!("{}{:?}{}", result_prefix, elapsed, result_suffix));
    (elapsed, r)
}

/// Runs a pass on the given synchronous `algorithm` callback function or closure,
/// measuring (and returning) the time it took to run it.\
/// See [run_iterator_pass()] for algorithms which operate on a single element per call.
/// ```
///     /// Algorithm function under analysis.
///     /// Returns a(ny) computed number to avoid compiler call cancellation optimizations
///     fn algorithm() -> u32 {0}
/// ```
/// returns: tuple with (elapsed time, computed_number: u32)
pub fn run_sync_pass(mut algorithm: impl FnMut() -> u32) -> (Duration, u32) {
    let Timed { result, elapsed } = timed(|| algorithm());
    (elapsed, result)
}

/// Runs a pass on the given `iterator_algorithm` callback function or closure, measuring (and returning) the time it
/// took to run all iterations specified in `range` -- spread among the given number of `threads`, in which case
/// the returned time is the average time each thread spent.\
/// The iterator algorithm receives the iteration number and returns a(ny) computed number based on it
/// -- to avoid compiler call cancellation optimizations.
///
/// A panic in `iterator_algorithm` is propagated to the caller.
pub fn run_iterator_pass<IteratorAlgorithmClosure: Fn(u32) -> u32 + Sync>
                        (iterator_algorithm: &IteratorAlgorithmClosure,
                         range:              Range<u32>,
                         threads:            u32)
                        -> (Duration, u32) {

    type ThreadLoopResult = (Duration, u32);

    fn thread_loop(iterator_algorithm: &(impl Fn(u32) -> u32 + Sync), range: Range<u32>) -> ThreadLoopResult {
        let mut thread_r = range.end;
        let thread_start = Instant::now();
        for e in range {
            thread_r ^= iterator_algorithm(e);
        }
        (thread_start.elapsed(), thread_r)
    }

    let threads = threads.max(1);
    let chunk_size = range.len() as u32 / threads;

    // crossbeam's scoped threads don't require a 'static lifetime for the algorithm's closure
    crossbeam::scope(|scope| {

        // start all threads -- the last one also takes the remainder of the division
        let thread_handlers: Vec<_> = (0..threads)
            .map(|n| {
                let chunk_start = range.start + chunk_size * n;
                let chunk_end = if n == threads - 1 { range.end } else { chunk_start + chunk_size };
                scope.spawn(move |_| thread_loop(iterator_algorithm, chunk_start..chunk_end))
            })
            .collect();

        // wait for them all to finish
        let mut r = range.start + 1;
        let mut elapsed_seconds_average = 0.0f64;
        for handler in thread_handlers {
            let (thread_duration, thread_r) = handler.join()
                .unwrap_or_else(|panic_payload| resume_unwind(panic_payload));
            elapsed_seconds_average += thread_duration.as_secs_f64() / threads as f64;
            r ^= thread_r;
        }

        (Duration::from_secs_f64(elapsed_seconds_average), black_box(r))

    }).unwrap_or_else(|panic_payload| resume_unwind(panic_payload))
}

/// Runs [analyse_algorithm()], trying to match the given maximum time complexity to the one observed in runtime when running the algorithm
/// -- retrying as much as `max_retry_attempts` to avoid flaky test results.\
/// In case of rejection, a detailed run log with measurements & analysis results is issued through [OUTPUT]
/// and this function panics -- so it may be used directly in tests.
///
/// `pass2_n` must be greater than `pass1_n` -- any other arrangement panics right away, without retries.
pub fn test_algorithm(test_name:                &str,
                      max_retry_attempts:       u32,
                      mut reset_fn:             impl FnMut(),
                      pass1_n:                  u32,
                      mut pass1_algorithm:      impl FnMut() -> u32,
                      pass2_n:                  u32,
                      mut pass2_algorithm:      impl FnMut() -> u32,
                      max_time_complexity:      BigOAlgorithmComplexity) {
    let result = analyse_algorithm(test_name, &mut reset_fn, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, max_time_complexity)
        .retry_with(|_| analyse_algorithm(test_name, &mut reset_fn, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, max_time_complexity))
        .with_delays((0..max_retry_attempts).map(|_| RETRY_DELAY));
    panic_on_failure(result, max_retry_attempts);
}

/// Similar to [test_algorithm()], but for "iterator algorithms" that don't change the size of the set they operate on
/// -- such as lookups or searches. Each pass calls `reset_fn` with its set size (so the set may be (re)built)
/// then runs `iterator_algorithm` `repetitions` times, spread among `threads`.
pub fn test_constant_set_iterator_algorithm<IteratorAlgorithmClosure: Fn(u32) -> u32 + Sync>
                                           (test_name:           &str,
                                            max_retry_attempts:  u32,
                                            mut reset_fn:        impl FnMut(u32),
                                            pass_1_set_size:     u32,
                                            pass_2_set_size:     u32,
                                            repetitions:         u32,
                                            iterator_algorithm:  &IteratorAlgorithmClosure,
                                            threads:             u32,
                                            max_time_complexity: BigOAlgorithmComplexity) {
    let passes_info = ConstantSetIteratorAlgorithmPassesInfo { pass_1_set_size, pass_2_set_size, repetitions };
    let result = analyse_constant_set_iterator_algorithm(test_name, &mut reset_fn, &passes_info, iterator_algorithm, threads, max_time_complexity)
        .retry_with(|_| analyse_constant_set_iterator_algorithm(test_name, &mut reset_fn, &passes_info, iterator_algorithm, threads, max_time_complexity))
        .with_delays((0..max_retry_attempts).map(|_| RETRY_DELAY));
    panic_on_failure(result, max_retry_attempts);
}

/// Translates the final outcome of the retries into a test failure, if needed
fn panic_on_failure(result: ResolvedResult<(), (), String, String>, max_retry_attempts: u32) {
    let failure_msg = match result {
        ResolvedResult::Ok { .. } => None,
        ResolvedResult::Fatal { error, .. } => Some(error),
        ResolvedResult::Recovered { .. } => None,
        ResolvedResult::GivenUp { retry_errors, fatal_error, .. } => Some(format!("Given up with '{}' after {max_retry_attempts} attempts. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
        ResolvedResult::Unrecoverable { retry_errors, fatal_error, .. } => Some(format!("Stopped after retrying for {max_retry_attempts} attempts due to the fatal outcome '{}'. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
    };
    if let Some(failure_msg) = failure_msg {
        panic!("{}", failure_msg);
    }
}

/// Internal version of [test_algorithm()], allowing retries
fn analyse_algorithm(test_name:           &str,
                     reset_fn:            &mut impl FnMut(),
                     pass1_n:             u32,
                     pass1_algorithm:     &mut impl FnMut() -> u32,
                     pass2_n:             u32,
                     pass2_algorithm:     &mut impl FnMut() -> u32,
                     max_time_complexity: BigOAlgorithmComplexity)
                    -> RetryProducerResult<String, String> {

    if pass2_n <= pass1_n {
        let msg = format!("\n ** Aborted '{}': pass 2's `n` ({}) must be greater than pass 1's ({})\n\n", test_name, pass2_n, pass1_n);
        OUTPUT(&msg);
        return RetryResult::Fatal { input: (), error: msg }
    }

    OUTPUT(&format!("Running '{}' algorithm:\n", test_name));
    let (_reset_elapsed, r0) = run_sync_pass_verbosely("  Resetting: ", "", || {reset_fn(); 0}, OUTPUT);
    let (pass1_elapsed,  r1) = run_sync_pass_verbosely("; Pass 1: ", "", pass1_algorithm, OUTPUT);
    let (pass2_elapsed,  r2) = run_sync_pass_verbosely("; Pass 2: ", "", pass2_algorithm, OUTPUT);
    let measurements = AlgorithmMeasurements {
        measurement_name: test_name,
        passes_info: AlgorithmPassesInfo { pass1_n, pass2_n },
        repetitions: 1,
        time_measurements: BigOTimeMeasurements {
            pass_1_measurements: pass1_elapsed,
            pass_2_measurements: pass2_elapsed,
        },
    };
    let observed_time_complexity = analyse_time_complexity(&measurements.passes_info, &measurements.time_measurements);
    report_and_judge(test_name, observed_time_complexity, max_time_complexity, measurements, r0 ^ r1 ^ r2)
}

/// Internal version of [test_constant_set_iterator_algorithm()], allowing retries
fn analyse_constant_set_iterator_algorithm<IteratorAlgorithmClosure: Fn(u32) -> u32 + Sync>
                                          (test_name:           &str,
                                           reset_fn:            &mut impl FnMut(u32),
                                           passes_info:         &ConstantSetIteratorAlgorithmPassesInfo,
                                           iterator_algorithm:  &IteratorAlgorithmClosure,
                                           threads:             u32,
                                           max_time_complexity: BigOAlgorithmComplexity)
                                          -> RetryProducerResult<String, String> {

    if passes_info.pass_1_set_size == passes_info.pass_2_set_size || passes_info.repetitions == 0 {
        let msg = format!("\n ** Aborted '{}': set sizes must differ & repetitions must be positive -- got {:?}\n\n", test_name, passes_info);
        OUTPUT(&msg);
        return RetryResult::Fatal { input: (), error: msg }
    }

    OUTPUT(&format!("Running '{}' iterator algorithm:\n", test_name));
    let repetitions = 0..passes_info.repetitions;
    let (_reset1_elapsed, r0) = run_sync_pass_verbosely("  Building set #1: ", "", || {reset_fn(passes_info.pass_1_set_size); 0}, OUTPUT);
    let (pass1_elapsed,   r1) = run_iterator_pass_verbosely("; Pass 1: ", "", iterator_algorithm, repetitions.clone(), threads, OUTPUT);
    let (_reset2_elapsed, r2) = run_sync_pass_verbosely("; Building set #2: ", "", || {reset_fn(passes_info.pass_2_set_size); 0}, OUTPUT);
    let (pass2_elapsed,   r3) = run_iterator_pass_verbosely("; Pass 2: ", "", iterator_algorithm, repetitions, threads, OUTPUT);
    let time_measurements = BigOTimeMeasurements {
        pass_1_measurements: pass1_elapsed,
        pass_2_measurements: pass2_elapsed,
    };
    let observed_time_complexity = analyse_time_complexity_for_constant_set_iterator_algorithm(passes_info, &time_measurements);
    let measurements = AlgorithmMeasurements {
        measurement_name: test_name,
        passes_info: AlgorithmPassesInfo { pass1_n: passes_info.pass_1_set_size, pass2_n: passes_info.pass_2_set_size },
        repetitions: passes_info.repetitions,
        time_measurements,
    };
    report_and_judge(test_name, observed_time_complexity, max_time_complexity, measurements, r0 ^ r1 ^ r2 ^ r3)
}

/// Outputs the analysis report, deciding if the measurements are acceptable or if they should be retried
fn report_and_judge(test_name:                &str,
                    observed_time_complexity: BigOAlgorithmComplexity,
                    max_time_complexity:      BigOAlgorithmComplexity,
                    measurements:             AlgorithmMeasurements,
                    r:                        u32)
                   -> RetryProducerResult<String, String> {

    let algorithm_analysis = BigOAlgorithmAnalysis {
        time_complexity: observed_time_complexity,
        algorithm_measurements: measurements,
    };

    OUTPUT("\n\n");
    OUTPUT(&format!("{}\n", algorithm_analysis));

    if observed_time_complexity as u32 > max_time_complexity as u32 {
        let msg = format!("\n ** TIME complexity mismatch on '{}' operation: maximum: {:?}, measured: {:?} -- a reattempt may be performed...\n\n", test_name, max_time_complexity, observed_time_complexity);
        OUTPUT(&msg);
        RetryResult::Transient { input: (), error: msg }
    } else {
        let msg = format!("r={}\n\n", r);
        OUTPUT(&msg);
        RetryResult::Ok { reported_input: (), output: msg }
    }
}
