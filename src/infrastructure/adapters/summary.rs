//! Parsing of the `unittest` text runner summary
//!
//! ```text
//! Ran 5 tests in 0.002s
//!
//! FAILED (failures=1, errors=1, skipped=2)
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::value_objects::TestCounts;

fn ran_line() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^Ran (\d+) tests? in ").ok())
        .as_ref()
}

fn failed_line() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^FAILED \(([^)]*)\)").ok())
        .as_ref()
}

/// Extract counts from runner output.
///
/// `None` means no summary was printed at all, i.e. the run itself broke
/// (import error, syntax error, crash) and the output is a traceback.
/// passed = ran - failures - errors.
pub fn parse_unittest_summary(output: &str) -> Option<TestCounts> {
    let run: usize = ran_line()?
        .captures_iter(output)
        .last()
        .and_then(|c| c[1].parse().ok())?;

    let mut failed = 0usize;
    if let Some(caps) = failed_line().and_then(|re| re.captures_iter(output).last()) {
        for item in caps[1].split(',') {
            let mut kv = item.trim().splitn(2, '=');
            let key = kv.next().unwrap_or_default().trim();
            let value: usize = kv.next().and_then(|v| v.trim().parse().ok()).unwrap_or(0);
            if key == "failures" || key == "errors" {
                failed += value;
            }
        }
    }

    Some(TestCounts::new(run.saturating_sub(failed), run))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_passing_run() {
        let out = "...\n----------------------------------------------------------------------\nRan 3 tests in 0.001s\n\nOK\n";
        assert_eq!(parse_unittest_summary(out), Some(TestCounts::new(3, 3)));
    }

    #[test]
    fn parses_failures_and_errors() {
        let out = "F.E..\nRan 5 tests in 0.010s\n\nFAILED (failures=1, errors=1)\n";
        assert_eq!(parse_unittest_summary(out), Some(TestCounts::new(3, 5)));
    }

    #[test]
    fn skipped_and_expected_failures_count_as_passed() {
        let out = "Ran 4 tests in 0.010s\n\nFAILED (failures=1, skipped=2, expected failures=1)\n";
        assert_eq!(parse_unittest_summary(out), Some(TestCounts::new(3, 4)));
    }

    #[test]
    fn parses_single_test_and_no_tests() {
        assert_eq!(
            parse_unittest_summary("Ran 1 test in 0.000s\n\nOK\n"),
            Some(TestCounts::new(1, 1))
        );
        assert_eq!(
            parse_unittest_summary("Ran 0 tests in 0.000s\n\nNO TESTS RAN\n"),
            Some(TestCounts::new(0, 0))
        );
    }

    #[test]
    fn traceback_without_summary_is_none() {
        let out = "Traceback (most recent call last):\n  File \"<string>\", line 1\nModuleNotFoundError: No module named 'nope'\n";
        assert_eq!(parse_unittest_summary(out), None);
    }

    #[test]
    fn test_output_mentioning_ran_mid_line_is_ignored() {
        let out = "we Ran 9 tests in our heads\nRan 2 tests in 0.1s\n\nOK\n";
        assert_eq!(parse_unittest_summary(out), Some(TestCounts::new(2, 2)));
    }
}
