//! Cron jobs running alongside the HTTP server.

pub mod revocation_prune;
