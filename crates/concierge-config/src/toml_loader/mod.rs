//! TOML config file loading and creation.

mod loader;
mod template;

#[cfg(test)]
mod tests;

pub(crate) use loader::{load_default, load_or_create};
