use core::any::{Any, TypeId, type_name};

// -----------------------------------------------------------------------------
// EnumInfo

/// The wire names of a unit enum's variants, in declaration order.
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty_id: TypeId,
    type_path: &'static str,
    variants: Box<[&'static str]>,
    ignore_case: bool,
}

impl EnumInfo {
    /// Creates the table of `T`.
    pub fn new<T: Any>(variants: &[&'static str]) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
            variants: variants.into(),
            ignore_case: false,
        }
    }

    /// Makes [`EnumInfo::index_of`] ignore ASCII case.
    #[inline]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Returns the wire name of the variant at `index`.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&'static str> {
        self.variants.get(index).copied()
    }

    #[inline]
    pub fn variant_names(&self) -> &[&'static str] {
        &self.variants
    }

    /// Returns the index of the variant whose wire name is `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        if self.ignore_case {
            self.variants.iter().position(|v| v.eq_ignore_ascii_case(name))
        } else {
            self.variants.iter().position(|v| *v == name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EnumInfo;

    enum Status {}

    #[test]
    fn case_sensitivity_is_opt_in() {
        let strict = EnumInfo::new::<Status>(&["ServerError", "Ok"]);
        assert_eq!(strict.index_of("Ok"), Some(1));
        assert_eq!(strict.index_of("OK"), None);

        let relaxed = strict.with_ignore_case(true);
        assert_eq!(relaxed.index_of("oK"), Some(1));
        assert_eq!(relaxed.index_of("SERVERERROR"), Some(0));
        assert_eq!(relaxed.index_of("server-error"), None);
        assert_eq!(relaxed.variant_at(0), Some("ServerError"));
    }
}
