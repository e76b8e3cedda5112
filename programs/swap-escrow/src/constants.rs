/// Seed prefix of the per-escrow state record, combined with the caller's random seed.
pub const STATE_SEED: &[u8] = b"state";

/// Seed prefix of the per-escrow vault token account, combined with the same random seed.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of the single vault authority shared by every escrow of this program.
/// The authority is a key-less signing proxy and never holds data of its own.
pub const AUTHORITY_SEED: &[u8] = b"authority";
