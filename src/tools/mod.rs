pub mod async_support;
pub mod serdes;
