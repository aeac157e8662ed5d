//! Account address syntax check, run before any RPC that takes an address.

use crate::error::{AccountCliError, Result};
use sha2::{Digest, Sha256};
use tracing::debug;

/// version (1) + hash160 (20) + checksum (4)
pub const ADDRESS_LEN: usize = 25;
const CHECKSUM_LEN: usize = 4;

pub const NORMAL_VERSION: u8 = 0x00;
pub const MULTISIG_VERSION: u8 = 0x05;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Fails with `InvalidAddress` unless `addr` is a base58check string of a
/// normal or multi-sig account.
pub fn validate(addr: &str) -> Result<()> {
    if addr.is_empty() {
        return Err(AccountCliError::InvalidAddress);
    }

    let raw = bs58::decode(addr).into_vec().map_err(|e| {
        debug!(addr, error = %e, "address is not base58");
        AccountCliError::InvalidAddress
    })?;

    if raw.len() != ADDRESS_LEN {
        debug!(addr, len = raw.len(), "address has wrong length");
        return Err(AccountCliError::InvalidAddress);
    }

    let (payload, check) = raw.split_at(ADDRESS_LEN - CHECKSUM_LEN);
    let expected = checksum(payload);
    if check != expected.as_slice() {
        debug!(
            addr,
            expected = %hex::encode(expected),
            got = %hex::encode(check),
            "address checksum mismatch"
        );
        return Err(AccountCliError::InvalidAddress);
    }

    match payload[0] {
        NORMAL_VERSION | MULTISIG_VERSION => Ok(()),
        other => {
            debug!(addr, version = other, "unknown address version");
            Err(AccountCliError::InvalidAddress)
        }
    }
}

/// Builds a well-formed address for tests.
#[cfg(test)]
pub(crate) fn encode_for_test(version: u8, hash160: [u8; 20]) -> String {
    let mut raw = Vec::with_capacity(ADDRESS_LEN);
    raw.push(version);
    raw.extend_from_slice(&hash160);
    let check = checksum(&raw);
    raw.extend_from_slice(&check);
    bs58::encode(raw).into_string()
}
