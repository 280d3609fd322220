pub mod controls;
pub mod palette;
pub mod summary;
pub mod toplevel;
pub mod r#trait;
pub mod wheel;
