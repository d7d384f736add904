//! Integration tests for the Opsdesk auth core, wired over the
//! in-memory stores with a recording notifier double.


mod auth_test;
mod role_registry_test;
