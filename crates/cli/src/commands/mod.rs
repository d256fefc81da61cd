pub(crate) mod ratings;
pub(crate) mod serve;
