//! Sequence construction macros.
//!
//! # Example
//!
//! ```
//! use tyseq::{type_seq, TypeSeq};
//!
//! type Args = TypeSeq![u8, &'static str, Option<bool>];
//!
//! let args: Args = type_seq![u8, &'static str, Option<bool>];
//! let none: TypeSeq![] = type_seq![];
//!
//! assert_eq!(args.size(), 3);
//! assert!(none.empty());
//! ```

/// Names the sequence type of the listed element types.
///
/// `TypeSeq![A, B]` is `TypeSeq<Cons<A, Cons<B, Nil>>>`.
#[macro_export]
macro_rules! TypeSeq {
    ($($ty:ty),* $(,)?) => {
        $crate::TypeSeq<$crate::__list!($($ty),*)>
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __list {
    () => {
        $crate::list::Nil
    };
    ($head:ty $(, $tail:ty)*) => {
        $crate::list::Cons<$head, $crate::__list!($($tail),*)>
    };
}

/// Creates the sequence value of the listed element types. Usable in
/// constant expressions.
#[macro_export]
macro_rules! type_seq {
    ($($ty:ty),* $(,)?) => {
        <$crate::TypeSeq![$($ty),*]>::new()
    };
}

#[cfg(test)]
mod tests {
    use crate::list::{Cons, Nil};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(TypeSeq![], crate::TypeSeq<Nil>);
    assert_type_eq_all!(TypeSeq![u8,], crate::TypeSeq<Cons<u8, Nil>>);
    assert_type_eq_all!(
        TypeSeq![u8, Vec<u8>, (i8, i16)],
        crate::TypeSeq<Cons<u8, Cons<Vec<u8>, Cons<(i8, i16), Nil>>>>
    );

    #[test]
    fn test_value_macro() {
        let seq = type_seq![u8, u16];
        let _: TypeSeq![u8, u16] = seq;
        assert_eq!(seq.size(), 2);
    }
}
