// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW & co. used by Skia's DirectWrite font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
