//! The verse reader: engine, display projection, command runtime and view.

pub mod config;
pub mod engine;
pub mod link;
pub mod projection;
pub mod runtime;
mod view;

pub use config::{Features, ReaderConfig, RetreatPolicy};
pub use engine::{
    LoadState, ReaderCommand, ReaderEngine, ReaderMsg, RequestToken, SearchStatus, Toast,
    ToastMessage,
};
pub use link::ShareLink;
pub use projection::{project, ReaderDisplay};
pub use view::ReaderView;
