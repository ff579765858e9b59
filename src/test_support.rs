//! Fixture project trees for unit tests.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

pub fn write_file(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub fn write_package(dir: &Path, manifest: Value) {
    write_file(
        dir,
        "package.json",
        &serde_json::to_string_pretty(&manifest).unwrap(),
    );
}

/// An installed project with a cycle, a hoisted shared package, a nested
/// package and a declared-but-missing dependency:
///
/// ```text
/// fixture-root@1.0.0            deps: prod-a ; devDeps: dev-c, dev-d
/// ├── prod-a@1.0.0              deps: prod-b
/// │   └── prod-b@2.0.0          deps: prod-a (cycle)
/// ├── dev-c@1.0.0               deps: shared-e
/// └── dev-d@1.0.0               deps: shared-e, dev-f, not-installed
///     ├── shared-e@1.0.0        (hoisted, shared)
///     └── dev-f@0.1.0-beta.1    (nested under dev-d)
/// ```
pub fn fixture_project() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();

    write_package(
        root,
        json!({
            "name": "fixture-root",
            "version": "1.0.0",
            "license": "MIT",
            "dependencies": { "prod-a": "^1.0.0" },
            "devDependencies": { "dev-c": "^1.0.0", "dev-d": "^1.0.0" }
        }),
    );
    write_file(root, "LICENSE", "The MIT License\n\nCopyright (c) fixture");
    write_file(root, "README.md", "# fixture-root\n\nNothing to declare here.");

    let prod_a = root.join("node_modules/prod-a");
    write_package(
        &prod_a,
        json!({
            "name": "prod-a",
            "version": "1.0.0",
            "license": { "type": "MIT", "url": "http://opensource.org/licenses/MIT" },
            "repository": { "type": "git", "url": "git+https://github.com/example/prod-a.git" },
            "dependencies": { "prod-b": "^2.0.0" }
        }),
    );
    write_file(&prod_a, "license.md", "Licensed under the Apache License 2.0");

    write_package(
        &root.join("node_modules/prod-b"),
        json!({
            "name": "prod-b",
            "version": "2.0.0",
            "licenses": ["MIT", "GPLv2"],
            "dependencies": { "prod-a": "^1.0.0" }
        }),
    );

    let dev_c = root.join("node_modules/dev-c");
    write_package(
        &dev_c,
        json!({
            "name": "dev-c",
            "version": "1.0.0",
            "license": "ISC",
            "repository": "git://github.com/example/dev-c.git",
            "dependencies": { "shared-e": "^1.0.0" }
        }),
    );
    write_file(&dev_c, "README.md", "dev-c\n\nLicense: BSD");

    let dev_d = root.join("node_modules/dev-d");
    write_package(
        &dev_d,
        json!({
            "name": "dev-d",
            "version": "1.0.0",
            "dependencies": {
                "shared-e": "^1.0.0",
                "dev-f": "^0.1.0-beta.1",
                "not-installed": "^1.0.0"
            }
        }),
    );

    let dev_f = dev_d.join("node_modules/dev-f");
    write_package(
        &dev_f,
        json!({ "name": "dev-f", "version": "0.1.0-beta.1" }),
    );
    write_file(&dev_f, "LICENSE", "WTFPL");

    write_package(
        &root.join("node_modules/shared-e"),
        json!({ "name": "shared-e", "version": "1.0.0" }),
    );

    tmp
}
