// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example xor
fn main() {
    println!("hematite-nn: a minimal three-layer neural network trained by online backpropagation.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
