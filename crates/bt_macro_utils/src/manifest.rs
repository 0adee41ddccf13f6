use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The Cargo.toml of the crate that invoked a derive, used to find
/// how that crate can name a `bt_*` crate.
///
/// # Example
///
/// ```rust
/// # use bt_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("bt_marshal"));
/// ```
///
/// # Resolution rules
///
/// 1. A direct dependency on the crate resolves to `::crate_name`.
/// 2. A `bt_`-prefixed crate reached through the facade resolves to
///    `::bt_core::short_name` (`bt_marshal` -> `::bt_core::marshal`).
/// 3. Rules 1-2 are repeated for `dev-dependencies`.
/// 4. Anything else falls back to `::crate_name`.
///
/// A crate deriving for its own types can keep the absolute path working
/// with `extern crate self as crate_name;` in its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "bt_core";
const CRATE_PREFIX: &str = "bt_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(source: Box<str>) -> Option<Document<Box<str>>> {
        Document::parse(source).ok()
    }

    fn path_of(name: &str) -> syn::Path {
        syn::parse_str(&format!("::{name}"))
            .unwrap_or_else(|_| panic!("`{name}` is not a valid crate name"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::path_of(name));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if !deps.contains_key(FACADE_NAME) {
            return None;
        }
        let mut path = Self::path_of(FACADE_NAME);
        let segment: syn::PathSegment = syn::parse_str(module)
            .unwrap_or_else(|_| panic!("`{module}` is not a valid path segment"));
        path.segments.push(segment);
        Some(path)
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::path_of(name))
    }

    /// Run `func` on the [`Manifest`] of the calling crate.
    ///
    /// Manifests are parsed once per path and re-read only when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::Manifest;

    fn manifest(source: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(source.into()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn render(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nbt_marshal = \"0.1\"\n");
        assert_eq!(render(&m.get_crate_path("bt_marshal")), "bt_marshal");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nbt_core = { path = \"../..\" }\n");
        assert_eq!(render(&m.get_crate_path("bt_marshal")), "bt_core::marshal");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nbt_core = \"0.1\"\n");
        assert_eq!(render(&m.get_crate_path("bt_response")), "bt_core::response");
        assert_eq!(render(&m.get_crate_path("serde_json")), "serde_json");
    }
}
