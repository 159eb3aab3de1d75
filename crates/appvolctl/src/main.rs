//! appvolctl - per-process audio volume control
//!
//! Thin front-end over the platform adapter: parses and validates arguments,
//! delegates to the master or session accessor, and prints the result.
//! Argument type/arity mistakes are rejected by the parser before any
//! adapter is constructed.

use anyhow::{Context, Result};
use appvol_api::{MasterVolume, ProcessVolume};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[cfg(windows)]
use appvol_host_windows as host;

#[cfg(not(windows))]
use appvol_host_linux as host;

/// Per-process audio volume and mute control
#[derive(Parser, Debug)]
#[command(name = "appvolctl")]
#[command(about = "Per-process audio volume and mute control", long_about = None)]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "warn", env = "APPVOL_LOG")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Legacy system-wide master output volume
    Master {
        #[command(subcommand)]
        op: MasterOp,
    },

    /// Volume of the audio session owned by a process
    App {
        /// Target process id (defaults to this process)
        #[arg(short, long)]
        pid: Option<u32>,

        #[command(subcommand)]
        op: AppOp,
    },

    /// Report what the platform adapter can do
    Capabilities {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum MasterOp {
    /// Print the master volume fraction, or "nan" when unavailable
    Get,

    /// Set the master volume fraction in [0, 1] (out-of-range input is clamped)
    Set {
        /// Volume fraction
        level: f64,
    },
}

#[derive(Subcommand, Debug)]
enum AppOp {
    /// Print the session volume fraction
    Volume,

    /// Set the session volume fraction in [0, 1] (out-of-range input is clamped)
    SetVolume {
        /// Volume fraction
        level: f32,
    },

    /// Print whether the session is muted
    Muted,

    /// Set the session mute flag
    SetMuted {
        /// true to mute, false to unmute
        #[arg(action = clap::ArgAction::Set)]
        muted: bool,
    },

    /// Print the combined volume/mute status
    Status {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(windows)]
fn master_volume() -> impl MasterVolume {
    host::WindowsMasterVolume::new()
}

#[cfg(not(windows))]
fn master_volume() -> impl MasterVolume {
    host::LinuxMasterVolume::new()
}

#[cfg(windows)]
fn process_volume(pid: Option<u32>) -> impl ProcessVolume {
    host::WindowsProcessVolume::new(pid)
}

#[cfg(not(windows))]
fn process_volume(pid: Option<u32>) -> impl ProcessVolume {
    host::LinuxProcessVolume::new(pid)
}

fn run_master(op: MasterOp) -> Result<()> {
    let master = master_volume();

    match op {
        MasterOp::Get => match master.volume() {
            Some(level) => println!("{level}"),
            None => println!("nan"),
        },
        MasterOp::Set { level } => {
            master.set_volume(level).context("Unable to set volume")?;
        }
    }

    Ok(())
}

fn run_app(pid: Option<u32>, op: AppOp) -> Result<()> {
    let app = process_volume(pid);

    match op {
        AppOp::Volume => println!("{}", app.volume()),
        AppOp::SetVolume { level } => app.set_volume(level),
        AppOp::Muted => println!("{}", app.muted()),
        AppOp::SetMuted { muted } => app.set_muted(muted),
        AppOp::Status { json } => {
            let status = app.status();
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("pid: {}", app.process_id());
                println!("volume: {}", status.level);
                println!("muted: {}", status.muted);
            }
        }
    }

    Ok(())
}

fn run_capabilities(json: bool) -> Result<()> {
    let caps = host::capabilities();

    if json {
        println!("{}", serde_json::to_string_pretty(&caps)?);
    } else {
        println!("master: {}", caps.master);
        println!("per-process: {}", caps.per_process);
        println!("backend: {}", caps.backend.as_deref().unwrap_or("none"));
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Master { op } => run_master(op),
        Command::App { pid, op } => run_app(pid, op),
        Command::Capabilities { json } => run_capabilities(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_master_set() {
        let args = Args::try_parse_from(["appvolctl", "master", "set", "0.5"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Master {
                op: MasterOp::Set { level }
            } if level == 0.5
        ));
    }

    #[test]
    fn rejects_non_numeric_level() {
        assert!(Args::try_parse_from(["appvolctl", "master", "set", "loud"]).is_err());
    }

    #[test]
    fn rejects_missing_level() {
        assert!(Args::try_parse_from(["appvolctl", "master", "set"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Args::try_parse_from(["appvolctl", "master", "get", "0.5"]).is_err());
    }

    #[test]
    fn app_pid_is_optional() {
        let args = Args::try_parse_from(["appvolctl", "app", "volume"]).unwrap();
        assert!(matches!(
            args.command,
            Command::App {
                pid: None,
                op: AppOp::Volume
            }
        ));

        let args = Args::try_parse_from(["appvolctl", "app", "--pid", "42", "muted"]).unwrap();
        assert!(matches!(
            args.command,
            Command::App {
                pid: Some(42),
                op: AppOp::Muted
            }
        ));
    }

    #[test]
    fn rejects_non_boolean_mute_flag() {
        assert!(Args::try_parse_from(["appvolctl", "app", "set-muted", "maybe"]).is_err());
    }
}
