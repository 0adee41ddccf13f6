use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap as StdHashMap;

use bt_utils::hash::hashbrown::HashMap as HashbrownMap;
use serde_json::Value;

use crate::de::DeserializeDriver;
use crate::ops::{Map, MapKey};
use crate::{CoercionError, DeserializeError, Marshal, MarshalRef};

// Rebuilds a whole map; `None` for `null`.
fn collect_entries<K, V, C>(
    value: &Value,
    driver: &DeserializeDriver<'_>,
) -> Result<Option<C>, DeserializeError>
where
    K: MapKey,
    V: Marshal + Default,
    C: Default + Extend<(K, V)>,
{
    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(None),
        other => return Err(CoercionError::mismatch("object", other).into()),
    };

    let mut out = C::default();
    for (key, raw) in object {
        let entry_key = K::from_key(key).map_err(|error| DeserializeError::from(error).in_entry(key))?;
        let entry_value = driver
            .deserialize::<V>(raw)
            .map_err(|error| error.in_entry(key))?;
        out.extend(core::iter::once((entry_key, entry_value)));
    }
    Ok(Some(out))
}

macro_rules! impl_marshal_map {
    ($ty:ident < K, V $(, $s:ident)? > where K: $($key_bound:path),+) => {
        impl<K, V $(, $s)?> Marshal for $ty<K, V $(, $s)?>
        where
            K: MapKey $(+ $key_bound)+,
            V: Marshal + Default,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            #[inline]
            fn marshal_ref(&self) -> MarshalRef<'_> {
                MarshalRef::Map(self)
            }

            fn apply_json(
                &mut self,
                value: &Value,
                driver: &DeserializeDriver<'_>,
            ) -> Result<(), DeserializeError> {
                if let Some(map) = collect_entries::<K, V, Self>(value, driver)? {
                    *self = map;
                }
                Ok(())
            }
        }

        impl<K, V $(, $s)?> Map for $ty<K, V $(, $s)?>
        where
            K: MapKey $(+ $key_bound)+,
            V: Marshal + Default,
            $($s: BuildHasher + Default + Send + Sync + 'static,)?
        {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            fn entries(&self) -> Box<dyn Iterator<Item = (Cow<'_, str>, &dyn Marshal)> + '_> {
                Box::new(self.iter().map(|(key, value)| (key.to_key(), value as &dyn Marshal)))
            }
        }
    };
}

impl_marshal_map!(BTreeMap<K, V> where K: Ord);
impl_marshal_map!(StdHashMap<K, V, S> where K: Eq, Hash);
impl_marshal_map!(HashbrownMap<K, V, S> where K: Eq, Hash);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use bt_utils::hash::HashMap;
    use serde_json::json;

    use crate::naming::NamingPolicy;
    use crate::ops::Map;
    use crate::{DeserializeError, Marshal, MarshalConfig, de::DeserializeDriver};

    #[test]
    fn keys_are_wire_text() {
        let mut map = BTreeMap::new();
        map.insert(7_u32, String::from("seven"));
        map.insert(11, String::from("eleven"));

        let keys: Vec<_> = map.entries().map(|(key, _)| key.into_owned()).collect();
        assert_eq!(keys, ["7", "11"]);
    }

    #[test]
    fn rebuilds_from_object() {
        let policy = NamingPolicy::default();
        let config = MarshalConfig::default();
        let driver = DeserializeDriver::new(&policy, &config);

        let map: HashMap<String, u32> = driver
            .deserialize(&json!({ "first": 1, "second": "2" }))
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["second"], 2);

        let mut kept: BTreeMap<u8, u8> = BTreeMap::from([(1, 1)]);
        let error = kept.apply_json(&json!({ "2": 2, "x": 3 }), &driver).unwrap_err();
        assert!(matches!(error, DeserializeError::Entry { ref key, .. } if key == "x"));
        assert_eq!(kept, BTreeMap::from([(1, 1)]));
    }
}
