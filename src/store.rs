use crate::error::StoreError;
use crate::slot::Slot;
use crate::type_tag::TypeTag;
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// A name-addressed container for values of unrelated types.
///
/// Every entry is either *owned* by the store or an *alias* borrowed from the
/// caller for `'a`. Retrieval does not care which: `get::<T>` succeeds for both
/// as long as the entry was inserted as exactly `T`.
///
/// Any `'static` type can be stored, including `Rc` and `RefCell`. The store
/// does no locking of its own and is not `Send`.
///
/// # Examples
///
/// ```
/// use typed_store::{StoreError, TypedStore};
///
/// let mut weights = vec![0.5_f64, 0.5];
///
/// let mut store = TypedStore::new();
/// store.insert_owned(3_usize, "n_points");
/// store.insert_alias(&mut weights, "weights");
///
/// assert_eq!(*store.get::<usize>("n_points")?, 3);
/// store.get_mut::<Vec<f64>>("weights")?[1] = 0.25;
///
/// drop(store);
/// assert_eq!(weights, vec![0.5, 0.25]);
/// # Ok::<(), StoreError>(())
/// ```
pub struct TypedStore<'a> {
    entries: HashMap<String, Slot<'a>>,
}

impl<'a> TypedStore<'a> {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty store with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    fn insert_slot(&mut self, key: String, slot: Slot<'a>) {
        log::trace!("inserting {} {} under {:?}", slot.mode(), slot.tag(), key);
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                log::debug!(
                    "replacing {} {} under {:?} with {}",
                    entry.get().mode(),
                    entry.get().tag(),
                    entry.key(),
                    slot.tag()
                );
                entry.insert(slot);
            }
            Entry::Vacant(entry) => {
                entry.insert(slot);
            }
        }
    }

    /// Stores `value` under `key`, taking ownership of it.
    ///
    /// Any entry already stored under `key` is replaced. A replaced owned value
    /// is dropped; a replaced alias only releases its borrow.
    pub fn insert_owned<T: Any>(&mut self, value: T, key: impl Into<String>) {
        self.insert_slot(key.into(), Slot::owned(value));
    }

    /// Stores the value produced by `f` under `key`
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_store::TypedStore;
    ///
    /// let mut store = TypedStore::new();
    /// store.insert_with("squares", || (1..=4).map(|i| i * i).collect::<Vec<u32>>());
    ///
    /// assert_eq!(store.get::<Vec<u32>>("squares").unwrap(), &vec![1, 4, 9, 16]);
    /// ```
    pub fn insert_with<T, F>(&mut self, key: impl Into<String>, f: F)
    where
        T: Any,
        F: FnOnce() -> T,
    {
        self.insert_owned(f(), key);
    }

    /// Stores a mutable borrow of a caller-owned value under `key`.
    ///
    /// Nothing is copied. Writes made through [`get_mut`](Self::get_mut) land in
    /// the caller's value, and the borrow checker keeps that value alive and
    /// untouched for as long as the store holds the alias.
    ///
    /// The owner sees those writes once the store is gone, and a later store
    /// aliasing the same value sees the owner's changes. There is no live
    /// two-way access while the alias is held; store an owned `Rc<RefCell<T>>`
    /// for that.
    pub fn insert_alias<T: Any>(&mut self, value: &'a mut T, key: impl Into<String>) {
        self.insert_slot(key.into(), Slot::alias(value));
    }

    /// Stores a shared borrow of a caller-owned value under `key`.
    ///
    /// The entry can be read with [`get`](Self::get) like any other, but
    /// [`get_mut`](Self::get_mut) on it fails with [`StoreError::ReadOnlyAlias`].
    pub fn insert_alias_ref<T: Any>(&mut self, value: &'a T, key: impl Into<String>) {
        self.insert_slot(key.into(), Slot::alias_ref(value));
    }

    fn slot(&self, key: &str) -> Result<&Slot<'a>, StoreError> {
        self.entries
            .get(key)
            .ok_or_else(|| StoreError::NameNotFound(key.to_string()))
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::NameNotFound` if nothing is stored under `key`
    /// - Returns `StoreError::TypeMismatch` if the entry was not inserted as
    ///   exactly `T`
    pub fn get<T: Any>(&self, key: &str) -> Result<&T, StoreError> {
        let result = self.slot(key).and_then(|slot| slot.downcast_ref::<T>());
        if let Err(err) = &result {
            log::debug!("lookup of {:?} failed: {}", key, err);
        }
        result
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// For aliases the reference points into the caller's value.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::NameNotFound` if nothing is stored under `key`
    /// - Returns `StoreError::TypeMismatch` if the entry was not inserted as
    ///   exactly `T`
    /// - Returns `StoreError::ReadOnlyAlias` if the entry was inserted with
    ///   [`insert_alias_ref`](Self::insert_alias_ref)
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Result<&mut T, StoreError> {
        let slot = match self.entries.get_mut(key) {
            Some(slot) => slot,
            None => {
                log::debug!("lookup of {:?} failed: no such entry", key);
                return Err(StoreError::NameNotFound(key.to_string()));
            }
        };
        slot.downcast_mut::<T>(key).map_err(|err| {
            log::debug!("lookup of {:?} failed: {}", key, err);
            err
        })
    }

    /// Runs `f` against the value stored under `key` and returns its result
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn with<T, F, R>(&self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        self.get::<T>(key).map(f)
    }

    /// Runs `f` against a mutable reference to the value stored under `key`
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_store::{StoreError, TypedStore};
    ///
    /// let mut store = TypedStore::new();
    /// store.insert_owned(Vec::<String>::new(), "log");
    ///
    /// let len = store.with_mut("log", |log: &mut Vec<String>| {
    ///     log.push("assembled".to_string());
    ///     log.len()
    /// })?;
    /// assert_eq!(len, 1);
    /// # Ok::<(), StoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`get_mut`](Self::get_mut).
    pub fn with_mut<T, F, R>(&mut self, key: &str, f: F) -> Result<R, StoreError>
    where
        T: Any,
        F: FnOnce(&mut T) -> R,
    {
        self.get_mut::<T>(key).map(f)
    }

    /// Returns true if an entry of any type exists under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the type an entry was inserted as, or `None` if `key` is absent
    pub fn type_tag(&self, key: &str) -> Option<TypeTag> {
        self.entries.get(key).map(Slot::tag)
    }

    /// Returns `Some(true)` for an alias, `Some(false)` for an owned value and
    /// `None` if `key` is absent.
    pub fn is_aliased(&self, key: &str) -> Option<bool> {
        self.entries.get(key).map(Slot::is_aliased)
    }

    /// Returns the number of entries in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypedStore<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypedStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
