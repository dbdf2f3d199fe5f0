use chrono::{DateTime, Utc};
use rand::Rng;

pub(crate) const ORDER_ID_PREFIX: &str = "ORD";
/// random suffix is drawn from `[0, RANDOM_SUFFIX_BOUND)`
const RANDOM_SUFFIX_BOUND: u32 = 1000;

/// Generate an order id: prefix, unix millis, then a random suffix, without padding.
///
/// Ids are only probabilistically unique: two ids minted in the same millisecond collide when the
/// suffixes match. Nothing checks them against already stored orders.
pub(crate) fn generate_order_id<R: Rng + ?Sized>(now: &DateTime<Utc>, rng: &mut R) -> String {
    let suffix = rng.gen_range(0..RANDOM_SUFFIX_BOUND);
    format!("{}{}{}", ORDER_ID_PREFIX, now.timestamp_millis(), suffix)
}
