//! # g
//!
//! A personal project-directory manager. Repositories are cloned into a
//! predictable `<root>/<host>/<owner>/<name>` layout, and `g sh <query>`
//! drops you into a shell for a project with its tools on `PATH`, its own
//! shell history and its `.env` applied.
//!
//! ## Quick Start
//!
//! ```bash
//! # Clone into ~/Projects/github.com/alice/widget
//! g clone git@github.com:alice/widget.git
//!
//! # Open a project shell by partial name
//! g sh widget
//! g sh alice/widget
//!
//! # Browse, resume, or create a new remote repository
//! g list 'github.com/alice/*'
//! g resume
//! G_GITHUB_USER=alice G_GITHUB_TOKEN=... g create gadget
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - One module per CLI command
//! - [`storage`] - Project root layout, URL resolution, query matching and the recent-projects store
//! - [`session`] - Project shell environment and launching
//! - [`config`] - Project root, credentials and optional `<root>/.g/config.toml` settings
//! - [`git`] - Git access (clone via the `git` binary, metadata discovery via git2)
//! - [`hosting`] - Repository host API client
//! - [`selection`] - Abstracts interactive prompts for testability
//! - [`traits`] - Seams for git, shell and host so commands can be tested without side effects

pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod hosting;
pub mod output;
pub mod process;
pub mod selection;
pub mod session;
pub mod storage;
pub mod traits;

pub use anyhow::Result;
