//! Fakes preconfigured as a healthy toolchain.

use std::fs;
use std::path::Path;

use crate::domain::{CommandOutput, Invocation, ProjectName, paths};

use super::{FakeLocator, FakeRunner};

pub const ALL_PROGRAMS: [&str; 4] = ["cargo", "rustup", "dx", "zip"];

pub fn ready_locator() -> FakeLocator {
    FakeLocator::with(&ALL_PROGRAMS)
}

/// Probes report a usable toolchain, `dx build` writes a small bundle and
/// `zip` writes a placeholder archive.
pub fn ready_runner() -> FakeRunner {
    FakeRunner::new()
        .respond("cargo --version", vec![CommandOutput::ok("cargo 1.82.0 (8f40fc59f 2024-08-21)")])
        .respond(
            "rustup target list",
            vec![CommandOutput::ok("x86_64-unknown-linux-gnu\nwasm32-unknown-unknown")],
        )
        .respond("dx --version", vec![CommandOutput::ok("dioxus 0.6.3 (fc1f1c2)")])
        .on_run("dx build", write_fake_bundle)
        .on_run("zip", write_fake_archive)
}

fn write_fake_bundle(invocation: &Invocation) {
    let project_dir = invocation.cwd.as_deref().expect("dx build runs in the project dir");
    let name = project_dir.file_name().unwrap().to_string_lossy();
    let output = paths::build_output_dir(project_dir, &ProjectName::new(&name).unwrap());
    fs::create_dir_all(output.join("assets")).unwrap();
    fs::write(output.join("index.html"), "<html></html>").unwrap();
    fs::write(output.join("assets/app.wasm"), b"\0asm").unwrap();
}

fn write_fake_archive(invocation: &Invocation) {
    let archive =
        invocation.args.iter().find(|arg| arg.ends_with(".zip")).expect("archive argument");
    fs::write(Path::new(archive), b"PK fake archive").unwrap();
}
