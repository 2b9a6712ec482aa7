//! Copies the Trunk output of the frontend into `static/dist`, which `main.rs` embeds.
//! Without a frontend build the checked-in placeholder page is embedded instead.

use std::fs;
use std::path::Path;

fn main() {
    let static_dir = Path::new("static");
    let frontend_dist = Path::new("../frontend/dist");

    if frontend_dist.join("index.html").exists() {
        let _ = fs::remove_dir_all(static_dir.join("dist"));
        fs::create_dir_all(static_dir).expect("create static dir");
        fs_extra::dir::copy(
            frontend_dist,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("copy frontend bundle");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
