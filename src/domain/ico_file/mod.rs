pub mod ico_container;
pub mod icon_image;
