use crate::fmt::Placeholder;
use std::process::ExitCode;

#[must_use]
pub fn cmd_codes() -> ExitCode {
    for placeholder in Placeholder::ALL {
        println!(
            "%{}  {}",
            char::from(placeholder.code()),
            placeholder.describe()
        );
    }
    ExitCode::SUCCESS
}
