pub(crate) mod constants;
pub(crate) mod elements;
pub(crate) mod render;
