//! Two thousand entries, to exercise paging and filtering.
//!
//! Run: cargo run --bin menu-large

fn main() {
    let entries: Vec<(String, String)> = (0..1000)
        .map(|i| (format!("item{i:03}"), format!("note{i:03}")))
        .collect();
    let mut menu = termenu_demos::demo_menu(&entries);

    if let Err(e) = termenu_demos::run_demo(&mut menu) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
