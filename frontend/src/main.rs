//! Entry point for the WASM application

pub fn main() {
    folio_frontend::mount();
}
