fn main() {
    // Link order matters: panel references ncurses symbols.
    if std::env::var_os("CARGO_FEATURE_PANELS").is_some() {
        println!("cargo:rustc-link-lib=panel");
    }
    println!("cargo:rustc-link-lib=ncurses");
}
