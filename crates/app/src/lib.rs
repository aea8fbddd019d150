//! Shared promotion domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
