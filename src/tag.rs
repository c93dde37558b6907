use core::fmt;
use core::marker::PhantomData;

/// Zero-sized carrier of a single type.
///
/// Tags let a type be passed to and returned from the sequence operations
/// without an instance of it.
pub struct Tag<T: ?Sized>(PhantomData<fn() -> *const T>);

pub const fn tag<T: ?Sized>() -> Tag<T> {
    Tag::new()
}

impl<T: ?Sized> Tag<T> {
    pub const fn new() -> Self {
        Tag(PhantomData)
    }

    pub fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

// Manual impls: the derives would bound `T`.
impl<T: ?Sized> Clone for Tag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Tag<T> {}

impl<T: ?Sized> Default for Tag<T> {
    fn default() -> Self {
        Tag::new()
    }
}

impl<T: ?Sized> PartialEq for Tag<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for Tag<T> {}

impl<T: ?Sized> fmt::Debug for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>", self.type_name())
    }
}

/// Extracts the carried type from a tag.
pub trait Tagged {
    type Type: ?Sized;
}

impl<T: ?Sized> Tagged for Tag<T> {
    type Type = T;
}

pub type FromTag<G> = <G as Tagged>::Type;
