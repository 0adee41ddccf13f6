use serde_json::Value;

use crate::de::DeserializeDriver;
use crate::ops::List;
use crate::{CoercionError, DeserializeError, Marshal, MarshalRef};

impl<T: Marshal + Default> Marshal for Vec<T> {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        MarshalRef::List(self)
    }

    // The new contents are assigned only once every element coerced.
    fn apply_json(
        &mut self,
        value: &Value,
        driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Null => return Ok(()),
            other => return Err(CoercionError::mismatch("array", other).into()),
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let element = driver
                .deserialize::<T>(item)
                .map_err(|error| error.in_element(index))?;
            out.push(element);
        }
        *self = out;
        Ok(())
    }
}

impl<T: Marshal + Default> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Marshal> {
        <[T]>::get(self, index).map(|item| item as &dyn Marshal)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::naming::NamingPolicy;
    use crate::ops::{List, ListIter};
    use crate::{DeserializeError, Marshal, MarshalConfig, de::DeserializeDriver};

    #[test]
    fn iterates_in_order() {
        let values = vec![3_u8, 1, 2];
        let seen: Vec<_> = ListIter::new(&values)
            .map(|item| *item.downcast_ref::<u8>().unwrap())
            .collect();
        assert_eq!(seen, [3, 1, 2]);
        assert_eq!(ListIter::new(&values).len(), 3);
        assert_eq!(List::len(&values), 3);
    }

    #[test]
    fn failed_element_keeps_previous_contents() {
        let policy = NamingPolicy::default();
        let config = MarshalConfig::default();
        let driver = DeserializeDriver::new(&policy, &config);

        let mut values = vec![9_u8];
        let error = values
            .apply_json(&json!([1, "2", "three"]), &driver)
            .unwrap_err();

        assert!(matches!(error, DeserializeError::Element { index: 2, .. }));
        assert_eq!(values, [9]);

        values.apply_json(&json!([1, "2"]), &driver).unwrap();
        assert_eq!(values, [1, 2]);
    }
}
