use serde_json::Value;

use crate::de::DeserializeDriver;
use crate::{DeserializeError, Marshal, MarshalRef};

impl<T: Marshal + Default> Marshal for Option<T> {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        match self {
            Some(value) => value.marshal_ref(),
            None => MarshalRef::Null,
        }
    }

    fn apply_json(
        &mut self,
        value: &Value,
        driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        *self = match value {
            Value::Null => None,
            value => Some(driver.deserialize::<T>(value)?),
        };
        Ok(())
    }
}

impl<T: Marshal> Marshal for Box<T> {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        (**self).marshal_ref()
    }

    #[inline]
    fn apply_json(
        &mut self,
        value: &Value,
        driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        (**self).apply_json(value, driver)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::naming::NamingPolicy;
    use crate::{Marshal, MarshalConfig, MarshalKind, de::DeserializeDriver};

    #[test]
    fn option_follows_inner_shape() {
        assert_eq!(Some(3_u8).marshal_ref().kind(), MarshalKind::Scalar);
        assert_eq!(None::<u8>.marshal_ref().kind(), MarshalKind::Null);
        assert_eq!(Box::new(vec![1_u8]).marshal_ref().kind(), MarshalKind::List);
    }

    #[test]
    fn option_null_clears() {
        let policy = NamingPolicy::default();
        let config = MarshalConfig::default();
        let driver = DeserializeDriver::new(&policy, &config);

        assert_eq!(driver.deserialize::<Option<u8>>(&json!(null)), Ok(None));
        assert_eq!(driver.deserialize::<Option<u8>>(&json!("9")), Ok(Some(9)));

        let mut value = Some(String::from("kept"));
        value.apply_json(&json!(null), &driver).unwrap();
        assert_eq!(value, None);
    }
}
