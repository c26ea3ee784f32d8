//! Configuration builders for integration tests.

use std::io::Write;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use rota::domain::{Configuration, DemandVector, StaffMember};

/// Staff1/Staff2/Staff3 at 50/70/90 with demand Mon-Thu 1, Fri 2, weekend 0.
pub fn three_staff() -> Configuration {
    Configuration::try_new(
        vec![
            staff("Staff1", dec!(50)),
            staff("Staff2", dec!(70)),
            staff("Staff3", dec!(90)),
        ],
        DemandVector::new([1, 1, 1, 1, 2, 0, 0]),
    )
    .unwrap()
}

pub fn staff(id: &str, cost: Decimal) -> StaffMember {
    StaffMember::try_new(id, cost).unwrap()
}

/// The three-staff week as a settings file.
pub const THREE_STAFF_TOML: &str = r#"
[logging]
level = "warn"

[[staff]]
id = "Staff1"
cost = 50

[[staff]]
id = "Staff2"
cost = 70

[[staff]]
id = "Staff3"
cost = 90

[demand]
mon = 1
tue = 1
wed = 1
thu = 1
fri = 2
sat = 0
sun = 0
"#;

pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("rota-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}
