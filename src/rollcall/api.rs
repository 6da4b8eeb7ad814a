//! # API Facade
//!
//! The single entry point for all rollcall operations, whatever the UI.
//! A thin dispatch layer: business logic lives in `commands/*.rs`, the
//! collection and its persistence in `store/`. Generic over [`DataStore`]
//! so the whole surface runs against `InMemoryStore` in tests.

use crate::commands;
use crate::commands::find::Lookup;
use crate::error::Result;
use crate::store::roster::Roster;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct RollcallApi<S: DataStore> {
    roster: Roster<S>,
    sheet_title: String,
}

impl<S: DataStore> RollcallApi<S> {
    /// Open the roster over the given storage. Seeds a fresh roster when
    /// the resource is absent.
    pub fn open(store: S, sheet_title: impl Into<String>) -> Result<Self> {
        Ok(Self {
            roster: Roster::open(store)?,
            sheet_title: sheet_title.into(),
        })
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn find(&self, lookup: &Lookup) -> Result<commands::CmdResult> {
        commands::find::run(&self.roster, lookup)
    }

    pub fn check_in(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::checkin::run(&mut self.roster, id)
    }

    pub fn check_out(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::checkout::run(&mut self.roster, id)
    }

    pub fn reset_one(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::reset::one(&mut self.roster, id)
    }

    pub fn reset_all(&mut self) -> Result<commands::CmdResult> {
        commands::reset::all(&mut self.roster)
    }

    pub fn export_spreadsheet(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::spreadsheet(&self.roster, output)
    }

    pub fn export_barcodes(
        &self,
        ids: &[String],
        output: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        commands::export::barcodes(&self.roster, ids, output, &self.sheet_title)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
