use stream_pretty_printer::testing::oracular_pretty_print;
use stream_pretty_printer::{pretty_print, Doc, Width};

fn compare_lines(message: &str, expected: String, actual: String) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}

/// Check that printing `doc` at `width` produces `expected_lines`, and that the
/// oracle agrees with the expectation (a disagreement there means the test case
/// itself is wrong).
#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    compare_lines(
        &format!(
            "ORACLE DISAGREES WITH TEST CASE AT WIDTH {}, SO TEST CASE MUST BE WRONG",
            width
        ),
        expected_lines.join("\n"),
        oracular_pretty_print(width, doc),
    );
    compare_lines(
        &format!("IN PRETTY PRINTING WITH WIDTH {}", width),
        expected_lines.join("\n"),
        pretty_print(width, doc),
    );
}
