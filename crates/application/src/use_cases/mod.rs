pub mod favicon;

// Re-export use cases
pub use favicon::ResolveFaviconUseCase;
