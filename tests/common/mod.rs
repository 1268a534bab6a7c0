use singly_linked_list::LinkedList;
use std::sync;

static INIT_TESTS: sync::Once = sync::Once::new();

pub fn init_logging() {
    INIT_TESTS.call_once(|| {
        pretty_env_logger::formatted_builder()
            .is_test(true)
            .parse_filters("trace")
            .init();
    });
}

/// Reads every value out of the list by position, front to back.
pub fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    (0..list.size() as isize)
        .map(|index| {
            list.get_at(index)
                .expect("get_at failed inside the list bounds")
                .clone()
        })
        .collect()
}

pub fn list_of(values: &[i32]) -> LinkedList<i32> {
    let mut list = LinkedList::new();
    for value in values {
        list.push_back(*value);
    }
    list
}
