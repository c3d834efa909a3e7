// RecoMate — stateful conversational recommendation service.
//
// Layering (one-way, atoms at the bottom):
//   atoms   — pure data types, constants, error enum. No I/O.
//   engine  — the message-processing pipeline and the selector core.
//   server  — thin axum layer mapping HTTP to engine calls.

pub mod atoms;
pub mod engine;
pub mod server;
