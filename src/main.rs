use std::process::ExitCode;

fn main() -> ExitCode {
    blood_beacon_lib::run()
}
