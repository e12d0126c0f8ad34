use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::interpreter::value::core::ObjectType;

/// The derived key under which a value is stored in a map.
///
/// Equal values always produce equal keys. Values of different types never
/// share a key because the type tag is part of it, even when the hashes
/// coincide (`1` and `true` both hash to `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapKey {
    /// Type tag of the original value.
    pub kind: ObjectType,
    /// 64-bit hash of the original value.
    pub hash: u64,
}

/// Values that can be used as map keys.
///
/// # Example
/// ```
/// use quill::interpreter::value::map_key::Mappable;
///
/// assert_eq!("name".map_key(), String::from("name").as_str().map_key());
/// assert_ne!(1_i64.map_key(), true.map_key());
/// ```
pub trait Mappable {
    /// Computes the map key of the value.
    fn map_key(&self) -> MapKey;
}

impl Mappable for i64 {
    #[allow(clippy::cast_sign_loss)]
    fn map_key(&self) -> MapKey {
        MapKey { kind: ObjectType::Integer,
                 hash: *self as u64, }
    }
}

impl Mappable for bool {
    fn map_key(&self) -> MapKey {
        MapKey { kind: ObjectType::Boolean,
                 hash: u64::from(*self), }
    }
}

impl Mappable for str {
    fn map_key(&self) -> MapKey {
        let mut hasher = FxHasher::default();
        hasher.write(self.as_bytes());
        MapKey { kind: ObjectType::Str,
                 hash: hasher.finish(), }
    }
}
