use chrono::Utc;

fn main() {
    // Baked into the --version banner.
    let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=NV_PSTATE_BUILD_TIME={stamp}");
}
