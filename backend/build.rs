use std::fs;
use std::path::Path;

/// Copies the trunk output of the frontend into `static/dist`, where
/// `include_dir!` embeds it. Without a built frontend the committed
/// placeholder page is embedded instead.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir.join("dist"));
        fs::create_dir_all(out_dir).expect("failed to create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
            .expect("failed to copy frontend bundle");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
