pub(crate) mod error;
pub(crate) mod frontend;
pub(crate) mod orders;
