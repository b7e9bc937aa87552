/// Binary entrypoint for the `passgen` executable.
///
/// Keeps the binary thin: all logic lives in `passgen_lib` so tests can
/// drive the runner directly.
fn main() {
    init_logger();
    std::process::exit(passgen_lib::run());
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
