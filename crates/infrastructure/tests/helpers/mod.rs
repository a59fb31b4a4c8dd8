pub mod mock_network;

pub use mock_network::*;
