// File: crates/tornado-core/tests/ticks.rs
// Purpose: Validate tick spacing and quantity formatting.

use tornado_core::ticks::{format_quantity, linspace};

#[test]
fn linspace_covers_endpoints() {
    let v = linspace(-100.0, 100.0, 5);
    assert_eq!(v, vec![-100.0, -50.0, 0.0, 50.0, 100.0]);
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
}

#[test]
fn quantities_grouped_by_thousands() {
    assert_eq!(format_quantity(0.0), "0");
    assert_eq!(format_quantity(950.0), "950");
    assert_eq!(format_quantity(1050.0), "1,050");
    assert_eq!(format_quantity(1234567.0), "1,234,567");
    assert_eq!(format_quantity(-20000.0), "-20,000");
}

#[test]
fn fractional_quantities_keep_one_decimal() {
    assert_eq!(format_quantity(1234.56), "1,234.6");
    assert_eq!(format_quantity(-0.5), "-0.5");
    // A fraction that rounds away drops the decimal entirely.
    assert_eq!(format_quantity(999.96), "1,000");
}
