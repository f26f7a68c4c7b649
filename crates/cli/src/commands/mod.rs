pub(crate) mod gallery;
pub(crate) mod play;
pub(crate) mod serve;
