use std::fmt;

/// A last-in, first-out stack. Iteration visits elements in insertion
/// order, oldest first, which lets callers drain a stack front-to-back
/// without popping it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty stack
    pub fn new() -> Stack<T> {
        Stack {
            elements: Vec::new(),
        }
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements on the stack
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns a reference to the element at the top of the stack, if any
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Pops the element at the top of the stack, if any
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Pushes an element onto the stack
    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Removes every element from the stack
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements, oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns true if the stack contains an element equal to item
    pub fn contains(&self, item: &T) -> bool {
        self.elements.contains(item)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Builds a stack by pushing each element in turn, so the last element
    /// of the iterator ends up on top
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    /// Formats the stack as a bracketed, comma-separated list, oldest first
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);

        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.peek(), Some(&1));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');

        let seen: String = stack.iter().collect();
        assert_eq!(seen, "abc");
        assert_eq!(stack.pop(), Some('c'));

        let collected: Stack<char> = "xyz".chars().collect();
        assert_eq!(collected.peek(), Some(&'z'));
        assert_eq!(collected.into_iter().collect::<String>(), "xyz");
    }

    #[test]
    fn test_contains_and_clear() {
        let mut stack: Stack<&str> = ["(", "+", "*"].into_iter().collect();
        assert!(stack.contains(&"+"));
        assert!(!stack.contains(&"^"));

        stack.clear();
        assert!(stack.is_empty());
        assert!(!stack.contains(&"+"));
    }

    #[test]
    fn test_display() {
        let stack: Stack<i32> = Stack::default();
        assert_eq!(stack.to_string(), "[]");

        let stack: Stack<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(stack.to_string(), "[1, 2, 3]");
    }
}
