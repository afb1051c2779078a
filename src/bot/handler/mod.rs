pub mod interaction;
pub mod ready;
