use serde_json::Value;

use crate::de::{DeserializeDriver, coerce};
use crate::{DeserializeError, Marshal, MarshalRef, Scalar};

macro_rules! impl_marshal_integer {
    ($variant:ident as $wide:ty: $($ty:ty),* $(,)?) => {$(
        impl Marshal for $ty {
            #[inline]
            fn marshal_ref(&self) -> MarshalRef<'_> {
                MarshalRef::Scalar(Scalar::$variant(*self as $wide))
            }

            fn apply_json(
                &mut self,
                value: &Value,
                _driver: &DeserializeDriver<'_>,
            ) -> Result<(), DeserializeError> {
                if let Some(v) = coerce::integer::<$ty>(value, stringify!($ty))? {
                    *self = v;
                }
                Ok(())
            }
        }
    )*};
}

impl_marshal_integer!(Int as i64: i8, i16, i32, i64, isize);
impl_marshal_integer!(UInt as u64: u8, u16, u32, u64, usize);

macro_rules! impl_marshal_float {
    ($($ty:ty => $widen:path),* $(,)?) => {$(
        impl Marshal for $ty {
            #[inline]
            fn marshal_ref(&self) -> MarshalRef<'_> {
                MarshalRef::Scalar(Scalar::Float($widen(*self)))
            }

            fn apply_json(
                &mut self,
                value: &Value,
                _driver: &DeserializeDriver<'_>,
            ) -> Result<(), DeserializeError> {
                if let Some(v) = coerce::float(value, stringify!($ty))? {
                    *self = v as $ty;
                }
                Ok(())
            }
        }
    )*};
}

// Widens through the shortest decimal text, so `0.1_f32` is written `0.1`.
fn widen_f32(v: f32) -> f64 {
    if v.is_finite() {
        v.to_string().parse().unwrap_or(f64::from(v))
    } else {
        f64::from(v)
    }
}

#[inline]
fn widen_f64(v: f64) -> f64 {
    v
}

impl_marshal_float!(f32 => widen_f32, f64 => widen_f64);

impl Marshal for bool {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        MarshalRef::Scalar(Scalar::Bool(*self))
    }

    fn apply_json(
        &mut self,
        value: &Value,
        _driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        if let Some(v) = coerce::boolean(value)? {
            *self = v;
        }
        Ok(())
    }
}

impl Marshal for char {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        MarshalRef::Scalar(Scalar::Char(*self))
    }

    fn apply_json(
        &mut self,
        value: &Value,
        _driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        if let Some(v) = coerce::character(value)? {
            *self = v;
        }
        Ok(())
    }
}

impl Marshal for String {
    #[inline]
    fn marshal_ref(&self) -> MarshalRef<'_> {
        MarshalRef::Scalar(Scalar::Str(self))
    }

    fn apply_json(
        &mut self,
        value: &Value,
        _driver: &DeserializeDriver<'_>,
    ) -> Result<(), DeserializeError> {
        if let Some(v) = coerce::text(value)? {
            *self = v;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::naming::NamingPolicy;
    use crate::ser::SerializeDriver;
    use crate::{CoercionError, DeserializeError, Marshal, MarshalConfig, ScalarStyle, de::DeserializeDriver};

    fn driver_parts() -> (NamingPolicy, MarshalConfig) {
        (NamingPolicy::default(), MarshalConfig::default())
    }

    #[test]
    fn numeric_strings_coerce() {
        let (policy, config) = driver_parts();
        let driver = DeserializeDriver::new(&policy, &config);

        assert_eq!(driver.deserialize::<i32>(&json!("123")), Ok(123));
        assert_eq!(driver.deserialize::<u8>(&json!(" 7 ")), Ok(7));
        assert_eq!(driver.deserialize::<i64>(&json!(42.0)), Ok(42));
        assert_eq!(driver.deserialize::<f32>(&json!("1.5")), Ok(1.5));
        assert_eq!(driver.deserialize::<bool>(&json!("TRUE")), Ok(true));
        assert_eq!(driver.deserialize::<char>(&json!("x")), Ok('x'));
        assert_eq!(driver.deserialize::<String>(&json!(12)).unwrap(), "12");
    }

    #[test]
    fn impossible_coercions_fail() {
        let (policy, config) = driver_parts();
        let driver = DeserializeDriver::new(&policy, &config);

        assert!(matches!(
            driver.deserialize::<u8>(&json!(300)),
            Err(DeserializeError::Coercion(CoercionError::OutOfRange { .. }))
        ));
        assert!(matches!(
            driver.deserialize::<i32>(&json!("twelve")),
            Err(DeserializeError::Coercion(CoercionError::Unparsable { .. }))
        ));
        assert!(matches!(
            driver.deserialize::<i32>(&json!(1.5)),
            Err(DeserializeError::Coercion(CoercionError::Unparsable { .. }))
        ));
        assert!(matches!(
            driver.deserialize::<bool>(&json!([true])),
            Err(DeserializeError::Coercion(CoercionError::Mismatch { .. }))
        ));
        assert!(driver.deserialize::<char>(&json!("xy")).is_err());
        assert!(driver.deserialize::<String>(&json!({})).is_err());
    }

    #[test]
    fn null_keeps_current_value() {
        let (policy, config) = driver_parts();
        let driver = DeserializeDriver::new(&policy, &config);

        let mut value = 5_u32;
        value.apply_json(&json!(null), &driver).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn f32_is_written_as_its_shortest_text() {
        let policy = NamingPolicy::default();
        let native = MarshalConfig::new();
        let stringify = MarshalConfig::new().with_scalars(ScalarStyle::Stringify);

        let value = vec![0.1_f32, 2.5, -3.0e-7];
        assert_eq!(
            SerializeDriver::new(&policy, &native).serialize(&value).unwrap(),
            json!([0.1, 2.5, -3.0e-7])
        );
        assert_eq!(
            SerializeDriver::new(&policy, &stringify).serialize(&value).unwrap(),
            json!(["0.1", "2.5", "-0.0000003"])
        );
        assert_eq!(
            SerializeDriver::new(&policy, &native).serialize(&f32::NAN).unwrap(),
            json!(null)
        );
    }
}
