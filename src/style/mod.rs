pub(crate) mod aspect;
pub(crate) mod color;
pub(crate) mod descriptor;
pub(crate) mod presets;
