//! Self-documentation for command-line applications.
//!
//! Describe an application's command surface once with [`App`], [`Command`]
//! and [`Flag`], then expose three operations on top of it:
//!
//! - [`manual`] renders a Markdown manual through a template pipeline with
//!   per-command fragment files and an embedded default layout.
//! - [`commands`] prints every invocable command path, ready for shell
//!   completion or release smoke tests.
//! - [`envvars`] prints every environment variable any flag consumes, ready
//!   for seeding a `.env` file.
//!
//! Fragment directories are searched in the order given and the *last*
//! directory holding a fragment wins, so they are listed from least to most
//! specific. Hidden commands stay out of all three outputs, entire subtrees
//! included.
//!
//! # Quickstart
//!
//! ```
//! use clidoc::{App, BoolFlag, Command};
//!
//! let app = App::new("hike")
//!     .description("A trail journal for long walks")
//!     .flag(BoolFlag::new("verbose").alias("v").usage("Say more"))
//!     .command(
//!         Command::new("sync")
//!             .usage("Synchronize the journal")
//!             .runnable()
//!             .flag(BoolFlag::new("dry-run").env("HIKE_DRY_RUN")),
//!     );
//!
//! // No fragment directories: the embedded template still renders in full.
//! let manual = clidoc::render(&app, &[])?;
//! assert!(manual.starts_with("# hike"));
//!
//! let mut listing = Vec::new();
//! clidoc::commands(&app, false, false, &mut listing)?;
//! assert_eq!(String::from_utf8(listing)?, "hike sync\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Hosts that want the operations on their own command line splice
//! [`manual_command`], [`commands_command`] and [`envvars_command`] into
//! their tree and dispatch to the matching operation.

mod command;
mod envvars;
mod error;
mod flatten;
mod fragment;
mod ops;
mod render;

pub use command::{App, BoolFlag, Command, Flag, IntFlag, StringFlag};
pub use error::{Error, Result};
pub use flatten::{FlatCommand, flatten};
pub use ops::{commands, commands_command, envvars, envvars_command, manual, manual_command};
pub use render::render;
