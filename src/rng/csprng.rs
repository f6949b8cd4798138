//! ChaCha20-based CSPRNG
//!
//! A deterministic random bit generator built on the ChaCha20 block
//! function. Seeded once (from the operating system or from caller-supplied
//! seed material), it then expands the seed into an arbitrarily long stream
//! of uniform bytes.
//!
//! Two properties matter for share generation:
//! - the stream is reproducible from a seed, so statistical properties of
//!   the schemes can be checked against fixed runs
//! - the key is replaced after every request, so compromise of the current
//!   state does not reveal shares that were already generated

use super::chacha20::{BLOCK_LEN, block};
use super::source::EntropySource;
use crate::error::Result;
use crate::os::sys_random;

/// Cryptographically secure pseudorandom number generator.
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce value (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded from operating system entropy.
    pub fn from_os() -> Result<Self> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed).inspect_err(|err| {
            tracing::warn!(%err, "operating system entropy unavailable");
        })?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable unless the caller
    /// deliberately wants a reproducible stream. The local copy is wiped
    /// once it has been moved into the key.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with keystream bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(BLOCK_LEN) {
            let block = block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    /// Replaces the key with the first half of a fresh block.
    fn rekey(&mut self) {
        let block = block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl EntropySource for Csprng {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        Csprng::fill_bytes(self, buf);
        Ok(())
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.key.fill(0);
        self.counter = 0;
    }
}
