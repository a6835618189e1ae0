//! Constant-time X25519 (RFC 7748) scalar multiplication over Curve25519.
//!
//! This is a self-contained implementation of the X25519 shared-secret
//! operation: a 32-byte scalar times the 32-byte little-endian
//! x-coordinate of a point on the Montgomery curve
//! v^2 = u^3 + 486662*u^2 + u over GF(2^255 - 19).
//!
//! The crate is purely computational: no allocation, no global state, no
//! I/O, and no fallible paths — every 32-byte scalar and every 32-byte
//! point is accepted, as the function is well defined for all of them.
//! Running time and memory access pattern are independent of the secret
//! scalar and of the point.

mod field;
mod ladder;

use field::Fe;

/// Little-endian encoding of the curve generator's u-coordinate, u = 9.
pub const BASEPOINT_BYTES: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0,
];

/// Apply the X25519 scalar clamp: clear the low three bits, clear the top
/// bit, set bit 254.
///
/// Clearing the low bits pins the scalar to a multiple of the cofactor so
/// the result lands in the prime-order subgroup; the high-bit edits fix
/// the scalar's magnitude so the ladder's iteration count never depends
/// on it.
pub fn clamp_scalar(mut scalar: [u8; 32]) -> [u8; 32] {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

/// X25519: compute the u-coordinate of scalar * point.
///
/// `scalar` is clamped internally (the caller's copy is untouched);
/// `point` is a 32-byte little-endian u-coordinate whose top bit is
/// ignored. The result is the canonical 32-byte encoding, always in
/// [0, 2^255 - 19).
pub fn x25519(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
    let e = clamp_scalar(*scalar);
    let x1 = Fe::from_bytes(point);
    let (x, z) = ladder::montgomery_ladder(&e, &x1);
    let z_inv = Fe::invert(&z);
    Fe::mul(&x, &z_inv).to_bytes()
}

/// X25519 against the fixed generator: the public-key half of a
/// Diffie-Hellman exchange.
pub fn x25519_base(scalar: &[u8; 32]) -> [u8; 32] {
    x25519(scalar, &BASEPOINT_BYTES)
}
