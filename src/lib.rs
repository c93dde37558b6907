//! tyseq - Compile-time algebra over ordered sequences of types
//!
//! # Overview
//!
//! A [`TypeSeq`] is an ordered, immutable list of types that exists only in
//! the type system. It can be queried (size, position, membership, counts),
//! transformed (map, filter, remove, append) and compared, and every result
//! is another static sequence or a constant. Nothing is computed at run
//! time: all values are zero-sized and every precondition is a trait bound,
//! so an out-of-range index or an ambiguous lookup is a compile error.
//!
//! # Quick Start
//!
//! ```
//! use tyseq::func::{IsSame, Not, ToOption};
//! use tyseq::{func, index, tag, type_seq, NPOS};
//!
//! let seq = type_seq![i32, u8, i32];
//!
//! assert_eq!(seq.size(), 3);
//! assert_eq!(seq.count_of(tag::<i32>()), 2);
//! assert_eq!(seq.index_of(tag::<u8>()), 1);
//! assert_eq!(seq.index_of(tag::<bool>()), NPOS);
//!
//! let no_ints = seq.filter(func::<Not<IsSame<i32>>>());
//! assert!(no_ints == type_seq![u8]);
//!
//! let wrapped = seq.apply_at(index::<1>(), func::<ToOption>());
//! assert!(wrapped == type_seq![i32, Option<u8>, i32]);
//!
//! assert!(seq.pop_back().append(seq.back()) == seq);
//! ```
//!
//! # Carriers
//!
//! Types, indices and functions are passed to sequence operations through
//! zero-sized carriers:
//!
//! - [`Tag<T>`] from [`tag::<T>()`](tag()), one type.
//! - [`Index<I>`] from [`index::<I>()`](index()), one static position.
//! - [`Func<F>`] from [`func::<F>()`](func()), one static transform or
//!   predicate (see the [`func`](mod@func) module).
//!
//! # Identity
//!
//! Operations that compare elements need the elements to implement
//! [`Descriptor`]. Primitives and common wrappers already do; user types use
//! `#[derive(Descriptor)]`.
//!
//! # Long Sequences
//!
//! [`Index<I>`] covers positions `0..=255`. Every operation recurses once per
//! element or index unit, so crates working with long sequences or large
//! indices may need a higher limit:
//!
//! ```
//! #![recursion_limit = "1024"]
//! ```

#![cfg_attr(not(test), no_std)]
#![recursion_limit = "1024"]

extern crate self as tyseq;

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

mod macros;

pub mod descriptor;
pub mod fold;
pub mod func;
pub mod inspect;
pub mod key;
pub mod list;
pub mod logic;
pub mod nat;
pub mod query;
pub mod seq;
pub mod tag;

pub use descriptor::Descriptor;
pub use func::{Func, func};
pub use nat::{Index, index};
pub use query::NPOS;
pub use seq::TypeSeq;
pub use tag::{Tag, tag};

pub use tyseq_macros::{Descriptor, key};
