use std::fmt;
use std::iter::FromIterator;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The operation needs at least one element, but the list holds none
    #[error("List is empty")]
    EmptyList,
    /// The requested position is negative or not smaller than the list length. IndexOutOfRange
    /// carries the index that was asked for and the length at the time of the call
    #[error("Index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// remove() was asked for a value that no node holds
    #[error("Value not found in list")]
    NotFound,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}

/// A singly linked list. The list owns its head node and every node owns its successor, so the
/// chain has no sharing and no cycles. The length is not cached: size() walks the chain.
pub struct LinkedList<T> {
    head: Link<T>,
}

/// Maps a signed index onto a position inside a list of length `len`.
fn check_index(index: isize, len: usize) -> Result<usize, ListError> {
    if index < 0 || index as usize >= len {
        log::trace!("Index {} rejected for list of length {}", index, len);
        return Err(ListError::IndexOutOfRange { index, len });
    }
    Ok(index as usize)
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut current: &Link<T> = &self.head;
        while let Some(node) = current {
            size += 1;
            current = &node.next;
        }
        size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T) {
        let new_node: Box<Node<T>> = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
    }

    pub fn push_back(&mut self, value: T) {
        let tail = self.tail_link_mut();
        *tail = Some(Box::new(Node::new(value, None)));
    }

    /// Inserts `value` directly after the node at `index`. If there is no node at `index`
    /// (negative, or at/past the length) the list is left untouched and no error is returned.
    pub fn insert_after(&mut self, index: isize, value: T) {
        if index < 0 {
            log::trace!("insert_after({}) with negative index, nothing inserted", index);
            return;
        }
        match self.link_at_mut(index as usize).as_deref_mut() {
            Some(node) => {
                let new_node = Box::new(Node::new(value, node.next.take()));
                node.next = Some(new_node);
            }
            None => log::trace!("insert_after({}) is past the tail, nothing inserted", index),
        }
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        Self::unlink(&mut self.head).ok_or(ListError::EmptyList)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let len = self.size();
        if len == 0 {
            return Err(ListError::EmptyList);
        }
        // With one element this is the head link, which leaves the list empty.
        Self::unlink(self.link_at_mut(len - 1)).ok_or(ListError::EmptyList)
    }

    /// Removes the node at `index` and returns its value. The empty check happens before the
    /// bounds check.
    pub fn remove_at(&mut self, index: isize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        let len = self.size();
        let position = check_index(index, len)?;
        Self::unlink(self.link_at_mut(position)).ok_or(ListError::IndexOutOfRange { index, len })
    }

    pub fn get_front(&self) -> Result<&T, ListError> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    pub fn get_back(&self) -> Result<&T, ListError> {
        let mut node: &Node<T> = self.head.as_deref().ok_or(ListError::EmptyList)?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Ok(&node.value)
    }

    /// Returns the value at `index`. A negative index is rejected before the empty check.
    pub fn get_at(&self, index: isize) -> Result<&T, ListError> {
        if index < 0 {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.size(),
            });
        }
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        let position = check_index(index, self.size())?;
        let mut current: &Link<T> = &self.head;
        for _ in 0..position {
            match current {
                Some(node) => current = &node.next,
                None => break,
            }
        }
        current
            .as_ref()
            .map(|node| &node.value)
            .ok_or_else(|| ListError::IndexOutOfRange {
                index,
                len: self.size(),
            })
    }

    /// Detaches the node held by `link`, splicing its successor into its place. The removed
    /// node's own next pointer is cleared first so freeing it never touches the rest of the chain.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let mut node = link.take()?;
        *link = node.next.take();
        Some(node.value)
    }

    /// Walks `position` steps from the head and returns the link found there. Stops early at the
    /// empty link after the tail.
    fn link_at_mut(&mut self, position: usize) -> &mut Link<T> {
        let mut current = &mut self.head;
        for _ in 0..position {
            match current {
                Some(node) => current = &mut node.next,
                None => break,
            }
        }
        current
    }

    fn tail_link_mut(&mut self) -> &mut Link<T> {
        let mut current = &mut self.head;
        while let Some(node) = current {
            current = &mut node.next;
        }
        current
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first node (scanning from the head) whose value equals `value`. Fails with
    /// NotFound, leaving the list unchanged, if no node matches.
    pub fn remove(&mut self, value: &T) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        let mut position = 0;
        let mut current: &Link<T> = &self.head;
        loop {
            match current {
                Some(node) if node.value == *value => break,
                Some(node) => {
                    position += 1;
                    current = &node.next;
                }
                None => {
                    log::trace!("remove() found no matching value in {} nodes", position);
                    return Err(ListError::NotFound);
                }
            }
        }
        Self::unlink(self.link_at_mut(position)).ok_or(ListError::NotFound)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linked List:")?;
        let mut current: &Link<T> = &self.head;
        while let Some(node) = current {
            write!(f, " {}", node.value)?;
            current = &node.next;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut current: &Link<T> = &self.head;
        while let Some(node) = current {
            entries.entry(&node.value);
            current = &node.next;
        }
        entries.finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        let mut current: &Link<T> = &self.head;
        while let Some(node) = current {
            tail = &mut tail.insert(Box::new(Node::new(node.value.clone(), None))).next;
            current = &node.next;
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut current_a: &Link<T> = &self.head;
        let mut current_b: &Link<T> = &other.head;
        loop {
            match (current_a, current_b) {
                (Some(node_a), Some(node_b)) => {
                    if node_a.value != node_b.value {
                        return false;
                    }
                    current_a = &node_a.next;
                    current_b = &node_b.next;
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_link_mut();
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value, None))).next;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
