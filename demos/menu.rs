//! Small mixed-width menu.
//!
//! Run: cargo run --bin menu

fn main() {
    let entries: Vec<(String, String)> = (1..=6)
        .map(|i| (format!("item{i:03}"), format!("note{i:03}")))
        .collect();
    let mut menu = termenu_demos::demo_menu(&entries);

    if let Err(e) = termenu_demos::run_demo(&mut menu) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
