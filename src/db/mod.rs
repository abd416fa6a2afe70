pub mod storage_service;

mod kid;
mod post;
pub mod seed;
mod session;
mod settings;
