//! Shared setup for the termenu demos.
//!
//! Every entry is added twice: once through [`Menu::add`] with a pizza note
//! and once as a prebuilt [`Item`] with a clover note, so the note column
//! has ragged wide-character widths to align.

use rand::RngExt;
use termenu_core::{Item, Menu, MenuConfig, MenuError};

/// Tag attached to every demo entry: the raw name and note.
pub type Tag = (String, String);

/// Build the demo menu from `(name, note)` pairs, sorted by name descending.
pub fn demo_menu(entries: &[(String, String)]) -> Menu<Tag> {
    let mut rng = rand::rng();
    let config = MenuConfig::default()
        .with_index(true)
        .with_cursor(" \u{27A4} ")
        .with_message("select one:")
        .with_page_size(5);
    let mut menu = Menu::with_config(config);

    for (name, note) in entries {
        let tag = (name.clone(), note.clone());
        let pizza = format!("{note}_{}", "🍕".repeat(rng.random_range(0..10)));
        let clover = format!("{note}_{}", "🍀".repeat(rng.random_range(0..20)));

        menu.add(name, &pizza, tag.clone(), |e| {
            println!("selected: {e:?}");
            Ok(())
        });
        menu.add_item(Item::new(name.as_str(), clover, tag).with_action(|e| {
            println!("new item selected: {e:?}");
            Ok(())
        }));
    }

    menu.sort_by(|a, b| b.name().cmp(a.name()));
    menu
}

/// Run `menu` on the terminal and report the outcome:
/// print the returned item, then run its action once more.
pub fn run_demo(menu: &mut Menu<Tag>) -> Result<(), MenuError> {
    match termenu_crossterm::run(menu) {
        Ok(sel) => {
            println!("return: {:?}", sel.item);
            if let Some(Err(e)) = sel.item.invoke() {
                eprintln!("action failed: {e}");
            }
            Ok(())
        }
        Err(MenuError::Cancelled) => Ok(()),
        Err(e) => Err(e),
    }
}
