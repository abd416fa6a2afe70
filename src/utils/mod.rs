pub mod blob;
pub mod clock;
pub mod reveal;
pub mod session;
pub mod time;
pub mod token;
pub mod webutils;
