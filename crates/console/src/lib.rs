//! View-state layer and terminal front end for CR Console.
//!
//! Every page follows the same synchronization protocol: fetch a collection,
//! replace the rendered table model, mutate remote state on user action,
//! then re-fetch from the source of truth. The components here are the
//! building blocks; `pages` composes one controller per page of the
//! original dashboard.

pub mod bulk;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod modal;
pub mod notify;
pub mod pages;
pub mod render;
pub mod table;
