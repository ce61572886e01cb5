pub mod cache;
pub mod cached;
pub mod rest;
