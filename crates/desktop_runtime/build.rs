use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const MANIFEST_SCHEMA_VERSION: u32 = 1;
const HOSTED_APP_CRATES: [&str; 4] = ["explorer", "notes", "browser", "settings"];

#[derive(Debug, Clone, Copy, Deserialize)]
struct Size {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    icon: String,
    single_instance: bool,
    #[serde(default)]
    external_url: Option<String>,
    #[serde(default)]
    desktop_order: Option<u8>,
    #[serde(default)]
    dock_order: Option<u8>,
    window_defaults: Size,
    window_min: Size,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = HOSTED_APP_CRATES
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect();

    let extra_dir = root.join("manifests");
    println!("cargo:rerun-if-changed={}", extra_dir.display());
    let entries = fs::read_dir(&extra_dir)
        .unwrap_or_else(|err| panic!("failed to list {}: {err}", extra_dir.display()));
    let mut extra: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to list {}: {err}", extra_dir.display()))
                .path()
        })
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".manifest.toml"))
        })
        .collect();
    extra.sort();
    paths.extend(extra);
    paths
}

fn valid_app_id(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && raw.len() <= 64
        && !raw.ends_with('-')
        && !raw.contains("--")
        && raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate(path: &Path, manifest: &AppManifest) {
    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        panic!(
            "manifest schema mismatch in {}: expected {MANIFEST_SCHEMA_VERSION} found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if !valid_app_id(&manifest.app_id) {
        panic!(
            "invalid app id `{}` in {}: expected lowercase kebab-case",
            manifest.app_id,
            path.display()
        );
    }
    let (default, min) = (manifest.window_defaults, manifest.window_min);
    if min.width <= 0 || min.height <= 0 {
        panic!("non-positive window_min in {}", path.display());
    }
    if default.width < min.width || default.height < min.height {
        panic!(
            "window_defaults smaller than window_min in {}: {}x{} < {}x{}",
            path.display(),
            default.width,
            default.height,
            min.width,
            min.height
        );
    }
}

fn render_option<T: std::fmt::Debug>(value: &Option<T>) -> String {
    match value {
        Some(value) => format!("Some({value:?})"),
        None => "None".to_string(),
    }
}

fn render_descriptor(manifest: &AppManifest) -> String {
    format!(
        "    AppDescriptor {{\n        app_id: {:?},\n        name: {:?},\n        icon: {:?},\n        default_size: WindowSize::new({}, {}),\n        min_size: WindowSize::new({}, {}),\n        allow_multiple_instances: {},\n        external_url: {},\n        desktop_order: {},\n        dock_order: {},\n    }},\n",
        manifest.app_id,
        manifest.display_name,
        manifest.icon,
        manifest.window_defaults.width,
        manifest.window_defaults.height,
        manifest.window_min.width,
        manifest.window_min.height,
        !manifest.single_instance,
        render_option(&manifest.external_url),
        render_option(&manifest.desktop_order),
        render_option(&manifest.dock_order),
    )
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        if manifests.iter().any(|seen| seen.app_id == manifest.app_id) {
            panic!(
                "duplicate app id `{}` in {}",
                manifest.app_id,
                path.display()
            );
        }
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| a.app_id.cmp(&b.app_id));
    let body: String = manifests.iter().map(render_descriptor).collect();
    let generated = format!(
        "/// Build-time generated app catalog, sorted by app id.\n\
pub const BUILTIN_APPS: [AppDescriptor; {}] = [\n{}];\n",
        manifests.len(),
        body
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
