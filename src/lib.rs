//! Range-checked integers whose numeric bounds live in the type, with
//! arithmetic operators that compute exact, provably-correct output bounds at
//! compile time.
//!
//! The central type is [`Ranged<MIN, MAX>`](Ranged), an integer known to lie
//! in the closed interval `[MIN, MAX]`. Adding two of them produces a value
//! of a *different* type whose bounds are the exact interval of the sum:
//!
//! ```
//! #![feature(generic_const_exprs)]
//! #![allow(incomplete_features)]
//! use ranged_integer::Ranged;
//!
//! let hours: Ranged<0, 23> = Ranged::from_const::<7>();
//! let offset: Ranged<-2, 2> = Ranged::from_const::<1>();
//! let shifted: Ranged<-2, 25> = hours + offset;
//! assert_eq!(shifted, 8);
//! ```
//!
//! Because every operator's output interval is computed by the engine in
//! [`bounds`], in-range inputs can never overflow at runtime: the only places
//! a runtime check happens are the boundary between unconstrained integers
//! and `Ranged` values ([`Ranged::new`], [`Ranged::narrow`], parsing,
//! deserialization), and those checks are driven by a pluggable
//! [`OverflowPolicy`].
//!
//! This crate requires nightly: the output bounds of arithmetic are const
//! expressions over the operands' const parameters, which needs
//! `generic_const_exprs`.
//!
//! # Features
//!
//! - `std`: implement [`std::error::Error`] for the error types. Implies
//!   `alloc`.
//! - `alloc`: indexing of `Vec` and `VecDeque` by provably-in-range values.
//! - `serde`: implement `Serialize` and `Deserialize`, validating the range
//!   on deserialization.
#![feature(generic_const_exprs)]
#![allow(incomplete_features)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bounds;

mod convert;
mod indexing;
mod iter;
mod ops;
mod option;
mod parse;
mod policy;
mod ranged;

pub use convert::constant;
pub use iter::{integer_range, IntegerRange};
pub use ops::{max, min};
pub use option::OptionRanged;
pub use parse::{ParseError, ParseErrorKind};
pub use policy::{
    Dynamic, OverflowPolicy, Panic, RangeError, RangeErrorKind, Reject, Saturate, Wrap,
};
pub use ranged::Ranged;

/// A type-level boolean, used to state compile-time conditions on `impl`s.
///
/// An operation gated on `Assert<{ condition }>: IsTrue` only exists when the
/// condition holds; using it otherwise is a compile error rather than a
/// runtime check.
pub struct Assert<const CONDITION: bool>;

/// Marker trait implemented only by [`Assert<true>`](Assert).
pub trait IsTrue {}

impl IsTrue for Assert<true> {}
