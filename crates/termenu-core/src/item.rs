//! Menu entries: [`Item`] and its [`Action`].

use std::fmt;

use crate::error::ActionError;

/// Callback run when an item is confirmed. It receives the item itself.
pub type Action<T> = Box<dyn Fn(&Item<T>) -> Result<(), ActionError>>;

/// A single menu entry carrying a caller-defined `tag`.
///
/// The engine never looks at the tag. Ordinal and padded fields are derived
/// at layout time and are empty before the first [`Menu::run`](crate::Menu::run).
pub struct Item<T> {
    name: String,
    note: String,
    tag: T,
    action: Option<Action<T>>,
    pub(crate) ordinal: usize,
    pub(crate) ordinal_label: String,
    pub(crate) padded_name: String,
    pub(crate) padded_note: String,
}

impl<T> Item<T> {
    /// Create an entry without an action.
    pub fn new(name: impl Into<String>, note: impl Into<String>, tag: T) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            tag,
            action: None,
            ordinal: 0,
            ordinal_label: String::new(),
            padded_name: String::new(),
            padded_note: String::new(),
        }
    }

    /// Attach the action run on confirm (builder).
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&Item<T>) -> Result<(), ActionError> + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Primary label as supplied by the caller.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Secondary label as supplied by the caller.
    #[inline]
    pub fn note(&self) -> &str {
        &self.note
    }

    #[inline]
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// 1-based position assigned by the last layout, 0 before any layout.
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Width-aligned `[ n]:` label from the last layout.
    #[inline]
    pub fn ordinal_label(&self) -> &str {
        &self.ordinal_label
    }

    /// Name padded to the widest name in the menu.
    #[inline]
    pub fn padded_name(&self) -> &str {
        &self.padded_name
    }

    /// Note padded to the widest note in the menu.
    #[inline]
    pub fn padded_note(&self) -> &str {
        &self.padded_note
    }

    #[inline]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Run the item's action, if any.
    pub fn invoke(&self) -> Option<Result<(), ActionError>> {
        self.action.as_ref().map(|act| act(self))
    }
}

impl<T: fmt::Debug> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .field("note", &self.note)
            .field("tag", &self.tag)
            .field("action", &self.action.as_ref().map(|_| ".."))
            .finish()
    }
}
