//! Service-level test support backed by a throwaway PostgreSQL container.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
