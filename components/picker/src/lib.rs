//! Cursor model for list menus.
//!
//! The cursor is clamped to `[0, len - 1]`; moving past either end is
//! a no-op. Rendering and key handling belong to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("picker needs at least one option")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct Picker<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Picker<T> {
    pub fn new(items: Vec<T>) -> Result<Self, PickerError> {
        if items.is_empty() {
            return Err(PickerError::Empty);
        }
        Ok(Self { items, index: 0 })
    }

    pub fn up(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.index < self.items.len() - 1 {
            self.index += 1;
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected(&self) -> &T {
        &self.items[self.index]
    }

    pub fn into_selected(mut self) -> T {
        self.items.swap_remove(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_list() {
        let picker = Picker::<u8>::new(vec![]);
        assert!(matches!(picker, Err(PickerError::Empty)));
    }

    #[test]
    fn test_up_at_top_is_noop() {
        let mut picker = Picker::new(vec!["a", "b"]).unwrap();
        picker.up();
        assert_eq!(picker.index(), 0);
        assert_eq!(*picker.selected(), "a");
    }

    #[test]
    fn test_down_at_bottom_is_noop() {
        let mut picker = Picker::new(vec!["a", "b", "c"]).unwrap();
        for _ in 0..10 {
            picker.down();
        }
        assert_eq!(picker.index(), 2);
        assert_eq!(*picker.selected(), "c");
    }

    #[test]
    fn test_cursor_stays_in_bounds_under_any_walk() {
        let mut picker = Picker::new(vec![0, 1, 2, 3]).unwrap();
        // Alternate direction often enough to hit both ends.
        for step in 0..100 {
            if step % 3 == 0 {
                picker.up();
            } else {
                picker.down();
            }
            assert!(picker.index() < picker.items().len());
        }
    }

    #[test]
    fn test_into_selected_returns_cursor_item() {
        let mut picker = Picker::new(vec!["ru", "en"]).unwrap();
        picker.down();
        assert_eq!(picker.into_selected(), "en");
    }
}
