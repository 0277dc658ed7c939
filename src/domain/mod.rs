pub mod brand;
pub mod ico_file;
pub mod raster;
pub mod svg_template;

// --- public re-exports ---
// pub use brand::BrandStyle;
// pub use ico_file::ico_container::IcoFile;
// pub use ico_file::icon_image::IconImage;
// pub use raster::SvgRenderer;
// pub use svg_template::SvgDocument;
