use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Hands out opaque identifiers for users, secret codes, playlists and songs.
///
/// Identifiers are decimal renderings of non-negative 63-bit integers. Every
/// identifier ever issued is remembered, so a repeat draw is thrown away and
/// no two calls to [IdGenerator::next] return the same string. The set of
/// issued values only grows, one `u64` per entity ever created, deleted ones
/// included.
///
/// Not a cryptographic generator.
pub struct IdGenerator {
    rng: StdRng,
    issued: HashSet<u64>,
}

impl IdGenerator {
    pub fn from_seed(seed: u64) -> Self {
        IdGenerator {
            rng: StdRng::seed_from_u64(seed),
            issued: HashSet::new(),
        }
    }

    /// Seed from the current wall-clock time.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since_epoch| since_epoch.as_nanos() as u64)
            .unwrap_or_default();

        Self::from_seed(seed)
    }

    pub fn next(&mut self) -> String {
        loop {
            let id = self.rng.gen::<u64>() >> 1;
            if self.issued.insert(id) {
                return id.to_string();
            }
            log::debug!("identifier generator repeated {id}, drawing again");
        }
    }
}
