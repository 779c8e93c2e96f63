/// Binary entrypoint for the `formulate` executable.
///
/// Keeps the binary thin — all logic lives in the `formulate_lib` crate so
/// tests can import library functions directly.
fn main() {
    formulate_lib::run();
}
