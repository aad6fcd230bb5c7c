//! # typed-store
//!
//! A name-addressed, type-safe heterogeneous container.
//!
//! `typed-store` lets unrelated pieces of code stash values of types they do not
//! share under string keys and read them back later with the concrete type
//! restored. It is meant for auxiliary data that has no fixed schema, such as the
//! per-step scratch values a computation pipeline hands from one stage to the next.
//!
//! ## Key Features
//!
//! - **Exact-type retrieval**: a value comes back only as the type it was stored
//!   as. No conversions, no unwrapping of boxes or newtypes.
//! - **Owned or aliased**: entries either belong to the store or borrow a value
//!   the caller keeps. Both are read through the same `get`.
//! - **Borrow-checked aliases**: the store carries the lifetime of its aliases,
//!   so an aliased value cannot be dropped while the store can still reach it.
//! - **Any type**: no `Send`, `Sync` or `Clone` bounds; `Rc` and `RefCell`
//!   values are fine. The store does no locking and stays on one thread.
//!
//! ## Usage Examples
//!
//! ### Owned values
//!
//! ```rust
//! use typed_store::{StoreError, TypedStore};
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut store = TypedStore::new();
//!
//!     store.insert_owned(4_usize, "n_dofs");
//!     store.insert_owned(vec![0.0_f64; 4], "residual");
//!     store.insert_owned("assembly".to_string(), "stage");
//!
//!     let n = *store.get::<usize>("n_dofs")?;
//!     store.get_mut::<Vec<f64>>("residual")?[n - 1] = 1.0;
//!
//!     println!("stage: {}", store.get::<String>("stage")?);
//!     println!("residual: {:?}", store.get::<Vec<f64>>("residual")?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Aliasing caller-owned values
//!
//! ```rust
//! use typed_store::{StoreError, TypedStore};
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut local_values = vec![1.0_f64, 2.0, 3.0];
//!     let tolerance = 1e-8_f64;
//!
//!     {
//!         let mut store = TypedStore::new();
//!         store.insert_alias(&mut local_values, "local_values");
//!         store.insert_alias_ref(&tolerance, "tolerance");
//!
//!         // Writes go straight to `local_values`.
//!         for v in store.get_mut::<Vec<f64>>("local_values")? {
//!             *v *= 2.0;
//!         }
//!         assert_eq!(*store.get::<f64>("tolerance")?, 1e-8);
//!     }
//!
//!     assert_eq!(local_values, vec![2.0, 4.0, 6.0]);
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use typed_store::{StoreError, TypedStore};
//!
//! let mut store = TypedStore::new();
//! store.insert_owned(5_i32, "count");
//!
//! match store.get::<String>("count") {
//!     Ok(value) => println!("count: {}", value),
//!     Err(StoreError::NameNotFound(key)) => println!("{} is not stored", key),
//!     Err(StoreError::TypeMismatch { requested, stored }) => {
//!         println!("asked for {}, but count holds {}", requested, stored)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! assert!(matches!(
//!     store.get::<i32>("missing"),
//!     Err(StoreError::NameNotFound(_))
//! ));
//! ```

mod error;
mod slot;
mod store;
mod type_tag;

pub use error::StoreError;
pub use store::TypedStore;
pub use type_tag::TypeTag;
