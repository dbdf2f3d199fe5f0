pub(crate) mod order_id;
pub(crate) mod time;
