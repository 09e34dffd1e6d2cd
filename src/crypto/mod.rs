// MD2 message digest
//
// This module provides the digest engine, its constants and the known-answer self-test.

pub mod consts;
pub mod digest;
pub mod self_test;

pub use consts::{BLOCK_LENGTH, DIGEST_LENGTH};
pub use digest::{Digest, md2_digest, md2_hex_digest, padding_length};
pub use self_test::{SelfTestReport, run_self_test, ensure_self_test, verify_known_answers};
