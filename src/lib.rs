pub mod archetype;
pub mod clock;
pub mod collection;
pub mod config;
pub mod error;
pub mod front_matter;
pub mod logger;
pub mod post_writer;
pub mod slug;
mod test_data;
