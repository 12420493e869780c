//! Higher-order functions over [`List`], all of them defined in
//! terms of `cases` alone: `foldr` eliminates the list, and `sum`,
//! `map` and `filter` are just particular folds.

use std::cell::Cell;

use num::Zero;

use crate::conslist::{cons, nil, List};

/// Right-associative fold: `f(x1, f(x2, .. f(xn, acc)))`. The fold
/// recurses all the way into the tail before combining with the
/// head, so for a non-associative `f` the right-to-left combination
/// order is part of the contract. Not tail recursive; stack usage is
/// proportional to the list length. Terminates for every list, since
/// cycles cannot be constructed.
// Both branches handed to `cases` need ownership of `acc`, but only
// one of them ever runs; route it through a Cell that either branch
// can take it out of.
pub fn foldr<T, R>(f: &impl Fn(&T, R) -> R, acc: R, list: &List<T>) -> R {
    let acc = Cell::new(Some(acc));
    list.cases(
        |head, tail| {
            let acc = acc.take().expect("cases runs exactly one branch");
            f(head, foldr(f, acc, tail))
        },
        || acc.take().expect("cases runs exactly one branch"),
    )
}

/// Sum of the elements, `T::zero()` for the empty list.
pub fn sum<T>(list: &List<T>) -> T
where T: Zero + Clone
{
    foldr(&|head: &T, acc: T| head.clone() + acc, T::zero(), list)
}

/// A new list of `f` applied to each element, in the original
/// order. `f` is called exactly once per element, eagerly; the whole
/// result is built before `map` returns.
pub fn map<T, U>(f: impl Fn(&T) -> U, list: &List<T>) -> List<U> {
    foldr(&|head, mapped| cons(f(head), mapped), nil(), list)
}

/// A new list of the elements for which `f` holds, in the original
/// order. `f` is called exactly once per element. Retained elements
/// are cloned into the new spine.
pub fn filter<T>(f: impl Fn(&T) -> bool, list: &List<T>) -> List<T>
where T: Clone
{
    foldr(
        &|head: &T, kept| {
            if f(head) {
                cons(head.clone(), kept)
            } else {
                kept
            }
        },
        nil(),
        list,
    )
}

/// Invert the boolean result of a function.
pub fn complement<T>(f: impl Fn(T) -> bool) -> impl Fn(T) -> bool {
    move |c: T| -> bool { !f(c) }
}

pub fn compose<A, B, C>(
    f: impl Fn(A) -> B,
    g: impl Fn(B) -> C,
) -> impl Fn(A) -> C {
    move |x| g(f(x))
}
