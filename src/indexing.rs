//! Indexing operations on [T], Vec<T> and VecDeque<T> for Ranged indices.
//!
//! Available when the index interval provably fits `usize`. The usual bounds
//! check against the container length still applies; what the type removes is
//! any possibility of negative or overflowing index arithmetic.

use core::ops::Index;
use core::ops::IndexMut;

use crate::bounds;
use crate::{Assert, IsTrue, Ranged};

impl<const MIN: i128, const MAX: i128, T> Index<Ranged<MIN, MAX>> for [T]
where
    Assert<{ bounds::fits_usize(MIN, MAX) }>: IsTrue,
{
    type Output = T;

    #[inline]
    fn index(&self, index: Ranged<MIN, MAX>) -> &Self::Output {
        &self[index.get() as usize]
    }
}

impl<const MIN: i128, const MAX: i128, T> IndexMut<Ranged<MIN, MAX>> for [T]
where
    Assert<{ bounds::fits_usize(MIN, MAX) }>: IsTrue,
{
    #[inline]
    fn index_mut(&mut self, index: Ranged<MIN, MAX>) -> &mut Self::Output {
        &mut self[index.get() as usize]
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "alloc")))]
impl<const MIN: i128, const MAX: i128, T> Index<Ranged<MIN, MAX>> for alloc::vec::Vec<T>
where
    Assert<{ bounds::fits_usize(MIN, MAX) }>: IsTrue,
{
    type Output = T;

    #[inline]
    fn index(&self, index: Ranged<MIN, MAX>) -> &Self::Output {
        &self[index.get() as usize]
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "alloc")))]
impl<const MIN: i128, const MAX: i128, T> IndexMut<Ranged<MIN, MAX>> for alloc::vec::Vec<T>
where
    Assert<{ bounds::fits_usize(MIN, MAX) }>: IsTrue,
{
    #[inline]
    fn index_mut(&mut self, index: Ranged<MIN, MAX>) -> &mut Self::Output {
        &mut self[index.get() as usize]
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "alloc")))]
impl<const MIN: i128, const MAX: i128, T> Index<Ranged<MIN, MAX>>
    for alloc::collections::VecDeque<T>
where
    Assert<{ bounds::fits_usize(MIN, MAX) }>: IsTrue,
{
    type Output = T;

    #[inline]
    fn index(&self, index: Ranged<MIN, MAX>) -> &Self::Output {
        &self[index.get() as usize]
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "alloc")))]
impl<const MIN: i128, const MAX: i128, T> IndexMut<Ranged<MIN, MAX>>
    for alloc::collections::VecDeque<T>
where
    Assert<{ bounds::fits_usize(MIN, MAX) }>: IsTrue,
{
    #[inline]
    fn index_mut(&mut self, index: Ranged<MIN, MAX>) -> &mut Self::Output {
        &mut self[index.get() as usize]
    }
}
