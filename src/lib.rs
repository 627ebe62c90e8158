//! Skipmap - an ordered map and set built on a skip list.
//!
//! A skip list keeps its entries on a sorted chain (level 0) plus a stack of
//! sparser express chains. Each node joins a random number of levels when it
//! is created, which gives O(log n) expected lookup, insertion and removal
//! without any rebalancing. The structure is meant to serve as the
//! in-memory index of a larger store, such as a memtable.
//!
//! Nodes live in an arena and link to each other by index. The header and
//! end of the list are explicit [`Link`] variants rather than special nodes.
//!
//! # Quick Start
//!
//! ```
//! use skipmap::SkipMap;
//!
//! let mut map = SkipMap::new();
//! for key in [4, 1, 2, 9, 10, 7, 3] {
//!     map.insert(key, key * 100);
//! }
//! assert_eq!(map.len(), 7);
//! assert_eq!(map.get(&9), Some(&900));
//!
//! map.remove(&9);
//! assert_eq!(map.get(&9), None);
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3, 4, 7, 10]);
//! ```
//!
//! # Custom ordering
//!
//! Any `Fn(&K, &K) -> bool` strict-less-than predicate can order the keys:
//!
//! ```
//! use skipmap::SkipMap;
//!
//! let mut map = SkipMap::with_comparator(|a: &i32, b: &i32| a > b);
//! map.insert(1, "one");
//! map.insert(3, "three");
//! map.insert(2, "two");
//! assert_eq!(map.first(), Some((&3, &"three")));
//! ```
//!
//! The predicate must stay a strict weak order for the life of the list.
//! See [`compare`] for what happens otherwise.
//!
//! # Concurrency
//!
//! None. Mutation takes `&mut self`; wrap the map in a lock to share it.

mod arena;
pub mod compare;
pub mod error;
pub mod iter;
pub mod level;
pub mod map;
mod node;
pub mod options;
pub mod set;

pub use compare::{Comparator, Natural};
pub use error::{Error, Result};
pub use iter::{Cursor, IntoIter, Iter, Range};
pub use level::{Geometric, LevelGenerator, XorShift};
pub use map::SkipMap;
pub use node::Link;
pub use options::Options;
pub use set::SkipSet;
