pub mod angle;
pub mod config;
pub mod gui;
pub mod msg;
pub mod notename;
pub mod scale;
pub mod session;
pub mod util;
pub mod wheel;
