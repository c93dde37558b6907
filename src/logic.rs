//! Type-level booleans.
//!
//! `True` and `False` are zero-sized marker types. Connectives are generic
//! associated types, so `<A as Bool>::And<B>` is itself a `Bool` that the
//! compiler resolves while type checking.

/// A boolean known to the type system.
pub trait Bool: Copy + Default + 'static {
    const VALUE: bool;

    type Not: Bool;
    type And<B: Bool>: Bool;
    type Or<B: Bool>: Bool;

    /// `True` when both sides agree.
    type Eq<B: Bool>: Bool;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct True;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;

    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type Eq<B: Bool> = B;
}

impl Bool for False {
    const VALUE: bool = false;

    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type Eq<B: Bool> = B::Not;
}

pub type Not<A> = <A as Bool>::Not;
pub type And<A, B> = <A as Bool>::And<B>;
pub type Or<A, B> = <A as Bool>::Or<B>;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_type_eq_all, const_assert};

    assert_type_eq_all!(Not<True>, False);
    assert_type_eq_all!(Not<False>, True);
    assert_type_eq_all!(And<True, True>, True);
    assert_type_eq_all!(And<True, False>, False);
    assert_type_eq_all!(And<False, True>, False);
    assert_type_eq_all!(Or<False, False>, False);
    assert_type_eq_all!(Or<False, True>, True);
    assert_type_eq_all!(<True as Bool>::Eq<True>, True);
    assert_type_eq_all!(<False as Bool>::Eq<False>, True);
    assert_type_eq_all!(<False as Bool>::Eq<True>, False);

    const_assert!(<True as Bool>::VALUE);
    const_assert!(!<And<True, Not<True>> as Bool>::VALUE);

    #[test]
    fn test_values() {
        assert!(<Or<False, True> as Bool>::VALUE);
        assert!(!<<True as Bool>::Eq<False> as Bool>::VALUE);
    }
}
