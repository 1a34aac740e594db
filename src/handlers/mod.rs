pub mod events;

pub use events::Handler;
