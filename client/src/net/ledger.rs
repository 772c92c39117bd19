//! Simulated blockchain/registry.
//!
//! Nothing here talks to a chain. Hashes and transaction ids are random
//! placeholders, not digests of the file contents, and the verification
//! verdict is a uniform random draw. Latency is a fixed timer in the browser
//! and instant elsewhere.
//!
//! ERROR HANDLING
//! ==============
//! Each operation can fail with [`LedgerError::Simulated`]; by default the
//! failure rate is zero, so the catch path only runs when a ledger is
//! configured to exercise it.

#[cfg(test)]
#[path = "ledger_test.rs"]
mod ledger_test;

use rand::Rng;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::state::notify::Notice;
use crate::state::transfer::TransferReceipt;
use crate::state::verify::{AssetDetails, Outcome, Verdict};
use crate::util::hex::random_prefixed_hex;

pub const UPLOAD_LATENCY_MS: u32 = 2_000;
pub const VERIFY_LATENCY_MS: u32 = 2_500;
pub const TRANSFER_LATENCY_MS: u32 = 2_500;

/// Owner reported for every authentic verdict.
pub const MOCK_OWNER: &str = "0x1a2b3c...7e8f9a";

/// Registration time reported for every authentic verdict.
pub const MOCK_REGISTERED_AT: OffsetDateTime = datetime!(2025-03-15 10:12:49 UTC);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Verify,
    Transfer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("simulated {operation:?} failure")]
    Simulated { operation: Operation },
}

impl LedgerError {
    #[must_use]
    pub fn notice(self) -> Notice {
        let Self::Simulated { operation } = self;
        match operation {
            Operation::Upload => Notice::destructive(
                "Upload failed",
                "There was an error uploading your file. Please try again.",
            ),
            Operation::Verify => Notice::destructive(
                "Verification failed",
                "There was an error verifying your file. Please try again.",
            ),
            Operation::Transfer => Notice::destructive(
                "Transfer failed",
                "There was an error transferring your asset. Please try again.",
            ),
        }
    }
}

/// Mock registry. `failure_rate` is the probability (0..=1) that an
/// operation reports a simulated failure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulatedLedger {
    pub failure_rate: f64,
}

impl SimulatedLedger {
    fn roll<R: Rng>(&self, rng: &mut R, operation: Operation) -> Result<(), LedgerError> {
        if self.failure_rate > 0.0 && rng.random_bool(self.failure_rate.min(1.0)) {
            return Err(LedgerError::Simulated { operation });
        }
        Ok(())
    }

    /// Register an asset and mint its 20-byte content hash.
    ///
    /// # Errors
    ///
    /// Returns a simulated failure according to `failure_rate`.
    pub fn register<R: Rng>(&self, rng: &mut R) -> Result<String, LedgerError> {
        self.roll(rng, Operation::Upload)?;
        Ok(mint_content_hash(rng))
    }

    /// Produce a verdict for a file, uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns a simulated failure according to `failure_rate`.
    pub fn verify<R: Rng>(&self, rng: &mut R, now: OffsetDateTime) -> Result<Verdict, LedgerError> {
        self.roll(rng, Operation::Verify)?;
        let outcome = Outcome::ALL[rng.random_range(0..Outcome::ALL.len())];
        Ok(match outcome {
            Outcome::Authentic => Verdict::Authentic(AssetDetails {
                owner: MOCK_OWNER.to_owned(),
                registered_at: MOCK_REGISTERED_AT,
                last_verified_at: now,
                content_hash: mint_content_hash(rng),
            }),
            Outcome::Modified => Verdict::Modified,
            Outcome::NotFound => Verdict::NotFound,
        })
    }

    /// Transfer an asset and mint a 32-byte transaction hash.
    ///
    /// # Errors
    ///
    /// Returns a simulated failure according to `failure_rate`.
    pub fn transfer<R: Rng>(&self, rng: &mut R, now: OffsetDateTime) -> Result<TransferReceipt, LedgerError> {
        self.roll(rng, Operation::Transfer)?;
        Ok(TransferReceipt { transaction_hash: mint_transaction_hash(rng), completed_at: now })
    }
}

/// `0x` + 40 hex chars.
pub fn mint_content_hash<R: Rng>(rng: &mut R) -> String {
    random_prefixed_hex::<20, _>(rng)
}

/// `0x` + 64 hex chars.
pub fn mint_transaction_hash<R: Rng>(rng: &mut R) -> String {
    random_prefixed_hex::<32, _>(rng)
}

/// Wait out the simulated network latency. Instant outside the browser.
pub async fn settle(latency_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(latency_ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = latency_ms;
    }
}
