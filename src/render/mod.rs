pub(crate) mod canvas;
pub(crate) mod frame;
pub(crate) mod icon;
pub(crate) mod layers;
pub(crate) mod pipeline;
