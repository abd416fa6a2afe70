pub mod dashboard;
pub mod kids;
pub mod login;
pub mod logout;
pub mod posts;
pub mod settings;
pub mod upload;
