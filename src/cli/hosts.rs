//! Hosts subcommand implementation.
//!
//! Handles `pscan hosts add|list|delete` for managing the hosts list.

use crate::error::CliResult;
use crate::hosts::HostsList;
use crate::output;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;

/// Manage the hosts list.
#[derive(Parser, Debug)]
pub struct HostsCommand {
    #[command(subcommand)]
    pub action: HostsAction,
}

/// Hosts list actions.
#[derive(Subcommand, Debug)]
pub enum HostsAction {
    /// Add new hosts to the list
    #[command(alias = "a")]
    Add {
        /// Hosts to add
        #[arg(value_name = "HOST", required = true)]
        hosts: Vec<String>,
    },

    /// List hosts in the list
    #[command(alias = "l")]
    List,

    /// Delete hosts from the list
    #[command(aliases = ["d", "rm"])]
    Delete {
        /// Hosts to delete
        #[arg(value_name = "HOST", required = true)]
        hosts: Vec<String>,
    },
}

impl HostsCommand {
    /// Execute the hosts command against `hosts_file`.
    pub fn execute<W: Write>(&self, out: &mut W, hosts_file: &Path) -> CliResult<()> {
        match &self.action {
            HostsAction::Add { hosts } => add_action(out, hosts_file, hosts),
            HostsAction::List => list_action(out, hosts_file),
            HostsAction::Delete { hosts } => delete_action(out, hosts_file, hosts),
        }
    }
}

/// Add `hosts` to the list in `hosts_file`.
///
/// Either every host is added and the file saved, or nothing is written.
pub fn add_action<W: Write>(out: &mut W, hosts_file: &Path, hosts: &[String]) -> CliResult<()> {
    let mut list = HostsList::new();
    list.load(hosts_file)?;

    for host in hosts {
        list.add(host.as_str())?;
    }

    list.save(hosts_file)?;
    output::write_added(out, hosts)?;
    Ok(())
}

/// Print the hosts in `hosts_file`, one per line.
pub fn list_action<W: Write>(out: &mut W, hosts_file: &Path) -> CliResult<()> {
    let mut list = HostsList::new();
    list.load(hosts_file)?;

    output::write_hosts(out, list.iter())?;
    Ok(())
}

/// Remove `hosts` from the list in `hosts_file`.
///
/// Either every host is removed and the file saved, or nothing is written.
pub fn delete_action<W: Write>(out: &mut W, hosts_file: &Path, hosts: &[String]) -> CliResult<()> {
    let mut list = HostsList::new();
    list.load(hosts_file)?;

    for host in hosts {
        list.remove(host)?;
    }

    list.save(hosts_file)?;
    output::write_deleted(out, hosts)?;
    Ok(())
}
