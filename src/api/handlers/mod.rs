mod system;

pub use system::health;
