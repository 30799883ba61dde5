pub mod refresh;

pub use refresh::RefreshService;
