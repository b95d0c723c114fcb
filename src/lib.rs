// Library half of the crate: the web layer links against these
// modules, the `fanky-lokal` binary drives them from the shell.

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;
