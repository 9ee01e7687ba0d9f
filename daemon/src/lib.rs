//! Usage ranking and alias-name suggestions for git alias managers.
//!
//! The host application owns the alias list (read from `git config`) and
//! asks this crate to score aliases by shell-history usage and to propose
//! names for new ones, either in-process or through the daemon socket.

pub mod alias;
pub mod config;
pub mod error;
pub mod library;
pub mod protocol;
pub mod ranking;
pub mod server;
pub mod suggestion;
pub mod transfer;
pub mod validation;

pub use alias::{Alias, AliasRef, Scope};
pub use config::Config;
pub use error::{Error, Result};
pub use library::LibraryAlias;
pub use ranking::RankingService;
pub use suggestion::{AliasSuggestion, Scheme, SuggestionEngine};
