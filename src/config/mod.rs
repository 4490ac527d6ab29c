pub(crate) mod badge;
pub(crate) mod theme;
