mod favicon;

pub use favicon::FaviconServices;
