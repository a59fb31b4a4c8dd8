mod resolve_favicon;

pub use resolve_favicon::ResolveFaviconUseCase;
