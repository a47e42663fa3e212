#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod earnings;
mod error;
mod poller;
mod prelude;
mod quantity;
mod reading;
mod settings;
mod snapshot;
mod tables;
mod webdata;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Watch(args) => args.run()?,
        Command::Poll(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
