use super::{extract, extract_words, leading};
use std::sync::Once;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    })
}
///
/// Returns:
///  - ...
#[allow(clippy::unused_unit)]
fn init_each() -> () {}
///
/// Numbers found in free-form text.
#[test]
fn extract_test() {
    init_once();
    init_each();
    let dbgid = "test numbers.extract";
    log::debug!("\n{}", dbgid);
    #[rustfmt::skip]
    let test_data = [
        // 0
        ("",                                false, vec![]),
        ("no numbers here",                 false, vec![]),
        ("12 -3.5 .25 -.5",                 false, vec![12.0, -3.5, 0.25, -0.5]),
        ("  98.6  1234.5   140.210  0.000", false, vec![98.6, 1234.5, 140.21, 0.0]),
        ("Lightweight 8123.4 139.95 0.00",  false, vec![8123.4, 139.95, 0.0]),
        // 5
        ("7 98.6 1234.5",                   true,  vec![98.6, 1234.5]),
        ("only",                            true,  vec![]),
        ("5",                               true,  vec![]),
        ("x=1.5;y=-2",                      false, vec![1.5, -2.0]),
    ];
    for (step, (line, skip_first, target)) in test_data.into_iter().enumerate() {
        let result = extract(line, skip_first);
        assert_eq!(
            target, result,
            "{} | step={} line='{}' result={:?} target={:?}",
            dbgid, step, line, result, target
        );
    }
}
///
/// Whitespace separated numbers up to the first non-number.
#[test]
fn leading_test() {
    init_once();
    init_each();
    let dbgid = "test numbers.leading";
    log::debug!("\n{}", dbgid);
    #[rustfmt::skip]
    let test_data = [
        // 0
        ("",                     vec![]),
        ("1 2 3",                vec![1.0, 2.0, 3.0]),
        ("\t0.5   -1.25  1e2 ",  vec![0.5, -1.25, 100.0]),
        ("1 2 m3 4",             vec![1.0, 2.0]),
        ("Sounding Volume",      vec![]),
    ];
    for (step, (line, target)) in test_data.into_iter().enumerate() {
        let result = leading(line);
        assert_eq!(
            target, result,
            "{} | step={} line='{}' result={:?} target={:?}",
            dbgid, step, line, result, target
        );
    }
}
///
/// Digits glued to letters are a part of words, not numbers.
#[test]
fn extract_words_test() {
    init_once();
    init_each();
    let dbgid = "test numbers.extract_words";
    log::debug!("\n{}", dbgid);
    #[rustfmt::skip]
    let test_data = [
        // 0
        ("",                                                    false, vec![]),
        ("  H.F.O.SETT.TK2   150.0  95.0  40.1  -5.2  3.3  12.0", false, vec![150.0, 95.0, 40.1, -5.2, 3.3, 12.0]),
        ("  RHO  1.025 t/m3",                                   false, vec![1.025]),
        ("LOADING CONDITION - COND07",                          false, vec![]),
        ("12 -3.5 .25 -.5",                                     false, vec![12.0, -3.5, 0.25, -0.5]),
        // 5
        ("x=1.5;y=-2",                                          false, vec![1.5, -2.0]),
        ("7 98.6 TK2 1234.5",                                   true,  vec![98.6, 1234.5]),
    ];
    for (step, (line, skip_first, target)) in test_data.into_iter().enumerate() {
        let result = extract_words(line, skip_first);
        assert_eq!(
            target, result,
            "{} | step={} line='{}' result={:?} target={:?}",
            dbgid, step, line, result, target
        );
    }
    assert_eq!(
        extract("  H.F.O.SETT.TK2   150.0", false),
        vec![2.0, 150.0],
        "{} | unbounded extraction takes glued digits",
        dbgid
    );
}
