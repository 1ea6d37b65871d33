pub mod net;
pub mod paths;
