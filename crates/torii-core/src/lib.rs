//! The torii resolution core.
//!
//! Maps an ambiguous title into a concrete episode list and a working
//! stream URL despite inconsistent naming across providers and unreliable
//! mirrors: alias derivation, the episode fallback cascade, mirror
//! candidate probing, sequel navigation, and genre suggestions.
//!
//! Everything here is a pure request/response pipeline — presentation
//! layers own display state only and invoke these operations explicitly.

pub mod alias;
pub mod config;
pub mod error;
pub mod relations;
pub mod resolver;
pub mod session;
pub mod slug;
pub mod stream;
pub mod suggest;

pub use config::AppConfig;
pub use error::CoreError;
pub use resolver::EpisodeResolver;
pub use session::{NavigationSession, RequestTicket};
pub use stream::{resolve_stream, MirrorSet, ResolvedStream, StreamCandidate};
