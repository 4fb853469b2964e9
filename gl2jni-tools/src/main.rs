use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use gl2jni::error::LoadError;
use gl2jni::{Gl2JniEngine, LIBRARY_NAME, LIBRARY_PATH_ENV};
use tracing::debug;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show how the native library resolves on this machine.
    Doctor {},

    /// Load the native library, size it, and render a number of frames.
    Run {
        /// View width handed to `init`.
        #[arg(long, default_value_t = 800)]
        width: i32,

        /// View height handed to `init`.
        #[arg(long, default_value_t = 600)]
        height: i32,

        /// Frames to render before exiting.
        #[arg(long, default_value_t = 1)]
        frames: u32,

        /// Load from this file or directory instead of the loader search path.
        #[arg(long)]
        library_path: Option<PathBuf>,
    },
}

fn main() -> Result<(), LoadError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        return Ok(());
    };

    match command {
        Command::Doctor {} => {
            doctor();
            Ok(())
        }
        Command::Run {
            width,
            height,
            frames,
            library_path,
        } => run(*width, *height, *frames, library_path.as_deref()),
    }
}

fn doctor() {
    let platform_file = libloading::library_filename(LIBRARY_NAME);
    println!("gl2jni • platform file {}", platform_file.to_string_lossy());

    match std::env::var_os(LIBRARY_PATH_ENV) {
        Some(path) => println!("{LIBRARY_PATH_ENV} • {}", Path::new(&path).display()),
        None => println!("{LIBRARY_PATH_ENV} • unset, the loader search path applies"),
    }

    match Gl2JniEngine::builder().build() {
        Ok(engine) => println!(
            "load • ok, `init` and `step` resolved from {}",
            engine.library_path().display()
        ),
        Err(err) => {
            println!("load • failed: {err}");
            if let Some(source) = err.source() {
                println!("       {source}");
            }
        }
    }
}

fn run(width: i32, height: i32, frames: u32, library_path: Option<&Path>) -> Result<(), LoadError> {
    let mut builder = Gl2JniEngine::builder();
    if let Some(path) = library_path {
        builder = builder.with_library_path(path);
    }
    let engine = builder.build()?;

    debug!("driving `{}`", engine.library_path().display());
    engine.init(width, height);
    for _ in 0..frames {
        engine.step();
    }

    println!(
        "rendered {frames} frame(s) at {width}x{height} with {}",
        engine.library_path().display()
    );
    Ok(())
}
