//! Keeps the seed in the navigation location.

use tracing::debug;
use url::Url;

use crate::location::Location;
use crate::seed::{Seed, SeedCodec};

/// Query parameter that carries the seed.
pub const SEED_PARAM: &str = "seed";

/// Reads the seed from, and writes it back to, a [`Location`].
#[derive(Debug, Clone)]
pub struct SyncController<L> {
    location: L,
    codec: SeedCodec,
}

impl<L: Location> SyncController<L> {
    /// Sync seeds of the codec's profile into `location`.
    pub fn new(location: L, codec: SeedCodec) -> Self {
        Self { location, codec }
    }

    /// The underlying location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Give the location back.
    pub fn into_location(self) -> L {
        self.location
    }

    /// The seed in the current address, if present and of the right width.
    pub fn read_from_location(&self) -> Option<Seed> {
        let url = self.location.current();
        let raw = url
            .query_pairs()
            .find(|(k, _)| k == SEED_PARAM)
            .map(|(_, v)| v.into_owned())?;

        if self.codec.accepts(&raw) {
            Some(Seed::new(raw))
        } else {
            debug!(
                seed = %raw,
                expected = self.codec.width(),
                "ignoring seed of wrong width"
            );
            None
        }
    }

    /// Write `seed` into the current address, replacing the history entry.
    ///
    /// The first `seed` parameter is replaced in place and any later ones are
    /// removed; other parameters keep their order. The fragment is dropped.
    pub fn apply_to_location(&mut self, seed: &Seed) {
        let url = with_seed_param(self.location.current(), seed);
        debug!(%url, "replacing location");
        self.location.replace(url);
    }

    /// Absolute `<origin><path>?seed=<digits>` link for sharing.
    pub fn build_share_link(&self, seed: &Seed) -> Url {
        let mut url = self.location.current().clone();
        url.set_fragment(None);
        // Credentials are not part of the origin.
        let _ = url.set_username("");
        let _ = url.set_password(None);
        url.set_query(None);
        url.query_pairs_mut().append_pair(SEED_PARAM, seed.as_str());
        url
    }
}

fn with_seed_param(current: &Url, seed: &Seed) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (k, v) in current.query_pairs() {
        if k == SEED_PARAM {
            if !replaced {
                pairs.push((k.into_owned(), seed.as_str().to_string()));
                replaced = true;
            }
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !replaced {
        pairs.push((SEED_PARAM.to_string(), seed.as_str().to_string()));
    }

    let mut url = current.clone();
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut().extend_pairs(pairs);
    url
}
