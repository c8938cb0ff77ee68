#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Sweetheart's name, set from the command line
static RECIPIENT: OnceLock<String> = OnceLock::new();

/// Get the name the question is addressed to, if one was given.
pub fn recipient_name() -> Option<&'static str> {
    RECIPIENT.get().map(String::as_str)
}

/// Will you be my Valentine? - an evasive little proposal
#[derive(Parser, Debug)]
#[command(name = "valentine-desktop")]
#[command(about = "Will you be my Valentine? - the No button has other plans")]
struct Args {
    /// Name of your valentine (woven into the window title and question)
    #[arg(short, long)]
    to: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 520.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // The image catalog is compiled in; refuse to launch with a bad one.
    valentine_core::gallery::catalog().context("image catalog failed validation")?;

    if let Some(ref name) = args.to {
        let _ = RECIPIENT.set(name.clone());
    }

    let title = match recipient_name() {
        Some(name) => format!("For {} 💝", name),
        None => "Will you be my Valentine? 💝".to_string(),
    };

    tracing::info!(window = %title, "Starting the proposal");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
