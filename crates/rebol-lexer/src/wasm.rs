//! WebAssembly bindings for the REBOL lexer.
//!
//! Exposes a JS-friendly API over this crate so it can be used from
//! TypeScript/JavaScript via `wasm-bindgen`. Unlike a token-stream lexer,
//! this scanner produces a whole `Value` tree per call rather than one
//! token at a time, so the binding is a single `scan` entry point rather
//! than a stateful `next_token` loop.

use wasm_bindgen::prelude::*;

use crate::lexer;
use rebol_syntax::ScanOptions;

/// Result of one scan: either the molded text of the scanned values, or an
/// error message, never both.
///
/// Getters return owned `String`s due to `wasm-bindgen` ABI requirements;
/// calling them clones the underlying data.
#[wasm_bindgen]
pub struct ScanOutcome {
    ok: bool,
    text: String,
    error: String,
}

#[wasm_bindgen]
impl ScanOutcome {
    #[wasm_bindgen(getter)]
    pub fn ok(&self) -> bool {
        self.ok
    }

    /// The scanned values, molded back to REBOL source text. Empty on error.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// The error message. Empty on success.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> String {
        self.error.clone()
    }
}

/// Stateless scanner over a REBOL source buffer in WebAssembly.
#[wasm_bindgen]
pub struct Lexer {
    source: Box<[u8]>,
}

#[wasm_bindgen]
impl Lexer {
    /// Creates a new WASM lexer over the provided bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(source: &[u8]) -> Lexer {
        Lexer { source: source.to_vec().into_boxed_slice() }
    }

    /// Scans the whole buffer with the given options and returns the
    /// outcome. `next`/`only`/`relax` mirror [`ScanOptions`]'s fields.
    #[wasm_bindgen]
    pub fn scan(&self, next: bool, only: bool, relax: bool) -> ScanOutcome {
        let options = ScanOptions::new().next(next).only(only).relax(relax);
        match lexer::scan_source(&self.source, options) {
            Ok(values) => {
                let text = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
                ScanOutcome { ok: true, text, error: String::new() }
            }
            Err(err) => ScanOutcome { ok: false, text: String::new(), error: err.to_string() },
        }
    }

    /// Returns the byte offset of a `REBOL [...]` header, or -1 if none.
    #[wasm_bindgen(js_name = scanHeader)]
    pub fn scan_header(&self) -> i32 {
        lexer::scan_header(&self.source).map(|p| p as i32).unwrap_or(-1)
    }
}
