//! Shell-script stand-ins for `cargo`, `rustup`, `dx` and `zip`.
//!
//! Every script appends its command line to `invocations.log` in the bin
//! directory. Behaviour is switched with marker files next to the scripts,
//! so a test can break one step without rewriting anything.

use std::fs;
use std::path::{Path, PathBuf};

const LOG_FILE: &str = "invocations.log";
const WASM_MARKER: &str = "wasm32-unknown-unknown.installed";

pub(crate) struct FakeToolchain {
    bin_dir: PathBuf,
}

impl FakeToolchain {
    /// Write all four tools into `bin_dir`, with the wasm target installed.
    pub(crate) fn install(bin_dir: &Path) -> Self {
        fs::create_dir_all(bin_dir).expect("Failed to create fake bin directory");
        let toolchain = Self { bin_dir: bin_dir.to_path_buf() };

        toolchain.write_script("cargo", CARGO);
        toolchain.write_script("rustup", RUSTUP);
        toolchain.write_script("dx", DX);
        toolchain.write_script("zip", ZIP);
        toolchain.touch(WASM_MARKER);
        toolchain
    }

    pub(crate) fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Remove a program so it can no longer be found on `PATH`.
    pub(crate) fn remove(&self, program: &str) {
        fs::remove_file(self.bin_dir.join(program)).expect("Failed to remove fake program");
    }

    /// Make `<program> <subcommand>` exit non-zero.
    pub(crate) fn fail(&self, program: &str, subcommand: &str) {
        self.touch(&format!("{}.{}.fail", program, subcommand));
    }

    /// Make `dx build` succeed without writing any output.
    pub(crate) fn build_without_output(&self) {
        self.touch("dx.build.no-output");
    }

    pub(crate) fn uninstall_wasm_target(&self) {
        fs::remove_file(self.bin_dir.join(WASM_MARKER)).expect("Failed to remove wasm marker");
    }

    /// Command lines seen so far, in order.
    pub(crate) fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.bin_dir.join(LOG_FILE))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn touch(&self, name: &str) {
        fs::write(self.bin_dir.join(name), "").expect("Failed to write marker file");
    }

    fn write_script(&self, program: &str, body: &str) {
        let path = self.bin_dir.join(program);
        let script = format!(
            "#!/bin/sh\nPATH=/usr/bin:/bin\nBIN='{}'\necho \"{} $* (in $PWD)\" >> \"$BIN/{}\"\nif [ -e \"$BIN/{}.$1.fail\" ]; then\n    echo \"{}: simulated failure\" >&2\n    exit 1\nfi\n{}",
            self.bin_dir.display(),
            program,
            LOG_FILE,
            program,
            program,
            body
        );
        fs::write(&path, script).expect("Failed to write fake program");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark fake program executable");
        }
    }
}

const CARGO: &str = r#"case "$1" in
    --version) echo "cargo 1.82.0 (8f40fc59f 2024-08-21)" ;;
esac
"#;

const RUSTUP: &str = r#"if [ "$1" = "target" ] && [ "$2" = "list" ]; then
    echo "x86_64-unknown-linux-gnu"
    if [ -e "$BIN/wasm32-unknown-unknown.installed" ]; then
        echo "wasm32-unknown-unknown"
    fi
elif [ "$1" = "target" ] && [ "$2" = "add" ]; then
    touch "$BIN/$3.installed"
fi
"#;

const DX: &str = r#"case "$1" in
    --version) echo "dioxus 0.6.3 (fc1f1c2)" ;;
    build)
        if [ -e "$BIN/dx.build.no-output" ]; then
            exit 0
        fi
        out="target/dx/$(basename "$PWD")/release/web/public"
        mkdir -p "$out/assets"
        echo "<html></html>" > "$out/index.html"
        printf 'wasm' > "$out/assets/app.wasm"
        ;;
esac
"#;

// Writes the sorted file list instead of a real archive.
const ZIP: &str = r#"archive="$4"
find . -type f | sort > "$archive"
"#;
