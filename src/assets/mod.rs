pub(crate) mod cache;
pub(crate) mod icon;
pub(crate) mod raster;
