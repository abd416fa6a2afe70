pub mod error;
pub mod feed;
pub mod kid;
pub mod post;
pub mod response;
pub mod session;
pub mod settings;
pub mod upload;
