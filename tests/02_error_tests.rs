mod common;

use common::{contents, init_logging, list_of};
use singly_linked_list::{LinkedList, ListError};

/// Every operation that needs an element reports EmptyList on a fresh list.
#[test]
fn test_empty_list_errors() {
    init_logging();
    let mut list: LinkedList<i32> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert_eq!(list.get_at(0), Err(ListError::EmptyList));
    assert_eq!(list.pop_front(), Err(ListError::EmptyList));
    assert_eq!(list.pop_back(), Err(ListError::EmptyList));
    assert_eq!(list.remove(&1), Err(ListError::EmptyList));
    assert_eq!(list.remove_at(0), Err(ListError::EmptyList));
    assert_eq!(list.get_front(), Err(ListError::EmptyList));
    assert_eq!(list.get_back(), Err(ListError::EmptyList));
}

/// Negative indexes are rejected before the empty check; everything else checks emptiness first.
#[test]
fn test_error_precedence() {
    init_logging();
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(
        list.get_at(-1),
        Err(ListError::IndexOutOfRange { index: -1, len: 0 })
    );
    assert_eq!(list.remove_at(-1), Err(ListError::EmptyList));
    assert_eq!(list.remove_at(5), Err(ListError::EmptyList));
}

#[test]
fn test_get_at_out_of_range() {
    init_logging();
    let list = list_of(&[1, 2, 3]);
    assert_eq!(
        list.get_at(-1),
        Err(ListError::IndexOutOfRange { index: -1, len: 3 })
    );
    assert_eq!(
        list.get_at(list.size() as isize),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(list.get_at(2), Ok(&3));
}

#[test]
fn test_remove_at_out_of_range() {
    init_logging();
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(
        list.remove_at(3),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        list.remove_at(-2),
        Err(ListError::IndexOutOfRange { index: -2, len: 3 })
    );
    assert_eq!(contents(&list), vec![1, 2, 3]);
}

/// Asking remove() for a value that is not there reports NotFound and changes nothing.
#[test]
fn test_remove_missing_value() {
    init_logging();
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove(&4), Err(ListError::NotFound));
    assert_eq!(contents(&list), vec![1, 2, 3]);
}

#[test]
fn test_error_messages() {
    assert_eq!(ListError::EmptyList.to_string(), "List is empty");
    assert_eq!(
        ListError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
        "Index 4 is out of range for a list of length 2"
    );
    assert_eq!(ListError::NotFound.to_string(), "Value not found in list");
}
