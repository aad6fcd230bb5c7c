use crate::error::StoreError;
use crate::type_tag::TypeTag;
use std::any::Any;
use std::fmt;

/// Storage behind a slot. Each variant is its own discriminant, so an owned
/// value can never be read back as an alias or the other way round.
pub(crate) enum Payload<'a> {
    Owned(Box<dyn Any>),
    Alias(&'a mut (dyn Any + 'static)),
    AliasRef(&'a (dyn Any + 'static)),
}

/// A type-erased entry together with the tag of the type it was inserted as
pub(crate) struct Slot<'a> {
    tag: TypeTag,
    payload: Payload<'a>,
}

impl<'a> Slot<'a> {
    pub(crate) fn owned<T: Any>(value: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            payload: Payload::Owned(Box::new(value)),
        }
    }

    pub(crate) fn alias<T: Any>(value: &'a mut T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            payload: Payload::Alias(value),
        }
    }

    pub(crate) fn alias_ref<T: Any>(value: &'a T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            payload: Payload::AliasRef(value),
        }
    }

    pub(crate) fn tag(&self) -> TypeTag {
        self.tag
    }

    pub(crate) fn is_aliased(&self) -> bool {
        !matches!(self.payload, Payload::Owned(_))
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self.payload {
            Payload::Owned(_) => "owned",
            Payload::Alias(_) => "alias",
            Payload::AliasRef(_) => "read-only alias",
        }
    }

    fn mismatch<T: Any>(&self) -> StoreError {
        StoreError::TypeMismatch {
            requested: TypeTag::of::<T>(),
            stored: self.tag,
        }
    }

    /// Shared access to the value if it was inserted as exactly `T`.
    ///
    /// Aliases are followed one extra level; owned values are downcast in place.
    pub(crate) fn downcast_ref<T: Any>(&self) -> Result<&T, StoreError> {
        if !self.tag.is::<T>() {
            return Err(self.mismatch::<T>());
        }
        let value = match &self.payload {
            Payload::Alias(value) => value.downcast_ref::<T>(),
            Payload::AliasRef(value) => value.downcast_ref::<T>(),
            Payload::Owned(value) => value.downcast_ref::<T>(),
        };
        value.ok_or_else(|| self.mismatch::<T>())
    }

    /// Exclusive access to the value if it was inserted as exactly `T`.
    ///
    /// `key` is only used to describe a read-only alias in the error.
    pub(crate) fn downcast_mut<T: Any>(&mut self, key: &str) -> Result<&mut T, StoreError> {
        if !self.tag.is::<T>() {
            return Err(self.mismatch::<T>());
        }
        let mismatch = self.mismatch::<T>();
        let value = match &mut self.payload {
            Payload::Alias(value) => value.downcast_mut::<T>(),
            Payload::AliasRef(_) => {
                return Err(StoreError::ReadOnlyAlias {
                    key: key.to_string(),
                    type_tag: self.tag,
                })
            }
            Payload::Owned(value) => value.downcast_mut::<T>(),
        };
        value.ok_or(mismatch)
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("type", &self.tag)
            .field("mode", &self.mode())
            .finish()
    }
}
