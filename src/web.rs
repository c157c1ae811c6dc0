mod core;

pub use self::core::start_server;
