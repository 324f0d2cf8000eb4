/// `subsets` binary: parse arguments and print the listing via `subsets_lib::run`.
fn main() -> std::process::ExitCode {
    subsets_lib::run()
}
