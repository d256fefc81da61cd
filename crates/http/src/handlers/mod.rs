pub mod ratings;
pub mod songs;
pub mod votes;
