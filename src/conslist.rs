//! Persistent cons list with shared (reference counted) tails. The
//! earlier attempt at a cons list over plain `&` references forced
//! the whole spine to outlive a single stack frame; using `Rc` for
//! the links instead lets any number of lists share a suffix, with a
//! node staying alive as long as its longest-lived owner. (An `Arc`
//! variant could be generated the same way when sharing across
//! threads is needed; not done so far.)
//!
//! The node representation is private on purpose: the only way to
//! take a list apart is [`List::cases`], which hands the head and
//! tail of a `Pair` node (or nothing, for `Null`) to one of two
//! closures. Everything else in this crate, `foldr` and friends
//! included, goes through `cases`; adding a third variant would make
//! the `match` in `cases` fail to compile, there is no unreachable
//! arm anywhere.

use std::fmt::{self, Display};
use std::rc::Rc;

enum Node<T> {
    Pair(T, List<T>),
    Null,
}

/// Handle to an immutable list node. Cloning is `Rc::clone`, i.e. it
/// shares the node rather than copying elements.
pub struct List<T>(Rc<Node<T>>);

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List(Rc::clone(&self.0))
    }
}

/// The empty list.
pub fn nil<T>() -> List<T> {
    List(Rc::new(Node::Null))
}

/// A new list with `head` in front of `tail`. `tail` is taken by
/// value, but it is just a handle; clone it first if another list
/// should keep sharing it.
pub fn cons<T>(head: T, tail: List<T>) -> List<T> {
    List(Rc::new(Node::Pair(head, tail)))
}

/// Right-associative list construction, standing in for the infix
/// cons operator of languages that have one: `list![1, 2, 3]` is
/// `cons(1, cons(2, cons(3, nil())))`, and `list![]` is `nil()`.
#[macro_export]
macro_rules! list {
    () => { $crate::conslist::nil() };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::conslist::cons($head, $crate::list![$($rest),*])
    };
}

impl<T> List<T> {
    /// Destruction (elimination) for the list: inspects exactly one
    /// node and calls exactly one of the two closures, `pair_case`
    /// with the head and tail for a cons node, `null_case` for the
    /// end of the list. Does no recursion itself.
    pub fn cases<R>(
        &self,
        pair_case: impl FnOnce(&T, &List<T>) -> R,
        null_case: impl FnOnce() -> R,
    ) -> R {
        match &*self.0 {
            Node::Pair(head, tail) => pair_case(head, tail),
            Node::Null => null_case(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.cases(|_, _| false, || true)
    }

    pub fn len(&self) -> usize {
        self.cases(|_, tail| tail.len() + 1, || 0)
    }

    /// A Vec of all the values, cloned, in list order.
    pub fn to_vec(&self) -> Vec<T>
    where T: Clone
    {
        let mut vs = Vec::new();
        let mut r = self.clone();
        loop {
            let next = r.cases(
                |head, tail| {
                    vs.push(head.clone());
                    Some(tail.clone())
                },
                || None,
            );
            match next {
                Some(tail) => r = tail,
                None => break,
            }
        }
        vs
    }
}

impl<T: Display> List<T> {
    /// Textual rendering: `head &= <rendering of tail>` for each
    /// node, `nil` at the end. Read only, the list stays usable.
    pub fn render(&self) -> String {
        self.cases(
            |head, tail| format!("{} &= {}", head, tail.render()),
            || "nil".to_string(),
        )
    }
}

impl<T: Display> Display for List<T> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str(&self.render())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_general() {
        let a = cons(5, nil());
        let b = cons(7, a);
        let c = cons(9, b.clone());
        let d = cons(13, b.clone());
        let e = cons(14, c.clone());
        assert_eq!(nil::<i8>().to_vec(), Vec::<i8>::new());
        assert_eq!(b.to_vec(), vec![7, 5]);
        assert_eq!(c.to_vec(), vec![9, 7, 5]);
        assert_eq!(d.to_vec(), vec![13, 7, 5]);
        assert_eq!(e.to_vec(), vec![14, 9, 7, 5]);
        // b is still intact after serving as the tail of both c and d
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn t_cases_dispatch() {
        let xs = cons("hi", nil());
        assert_eq!(xs.cases(|head, _| *head, || "empty"), "hi");
        assert_eq!(nil::<&str>().cases(|head, _| *head, || "empty"), "empty");
        assert!(!xs.is_null());
        assert!(nil::<u8>().is_null());
    }

    #[test]
    fn t_macro() {
        let xs: List<u32> = list![1, 2, 3];
        assert_eq!(xs.to_vec(), vec![1, 2, 3]);
        assert_eq!(list![9].to_vec(), vec![9]);
        let empty: List<u32> = list![];
        assert!(empty.is_null());
    }

    #[test]
    fn t_render() {
        assert_eq!(nil::<i32>().render(), "nil");
        assert_eq!(list![1, 2, 3].render(), "1 &= 2 &= 3 &= nil");
        let xs = list![42];
        assert_eq!(xs.render(), "42 &= nil");
        // rendering must not consume the list
        assert_eq!(xs.len(), 1);
        assert_eq!(format!("{}", xs), "42 &= nil");
    }
}
