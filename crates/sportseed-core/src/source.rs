//! The `SportSource` trait: where sport names come from.
//!
//! Implementations wrap an unstable scraping target so everything downstream
//! depends only on "a set of names", never on markup structure.

use std::{collections::BTreeSet, future::Future};

pub trait SportSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the current set of distinct, non-empty sport names.
  fn fetch_sports(
    &self,
  ) -> impl Future<Output = Result<BTreeSet<String>, Self::Error>> + Send + '_;
}
