// -----------------------------------------------------------------------------
// NamingConverter

/// A deterministic, side-effect-free transform of declared names.
///
/// Any `Fn(&str) -> String + Send + Sync` closure is a converter.
pub trait NamingConverter: Send + Sync {
    fn convert(&self, input: &str) -> String;

    /// [`convert`](NamingConverter::convert) lifted over absent input.
    #[inline]
    fn convert_opt(&self, input: Option<&str>) -> Option<String> {
        input.map(|input| self.convert(input))
    }
}

impl<F> NamingConverter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    #[inline]
    fn convert(&self, input: &str) -> String {
        self(input)
    }
}

// -----------------------------------------------------------------------------
// Primitives

/// Inserts `separator` before every uppercase character that does not
/// start the output. Case is left as is.
///
/// Each capital of an acronym run gets its own separator, and existing
/// separators are kept, not collapsed.
///
/// # Examples
///
/// ```
/// use bt_marshal::naming::separate_camel_case;
///
/// assert_eq!(separate_camel_case("startLine", '_'), "start_Line");
/// assert_eq!(separate_camel_case("mixedCASE", '-'), "mixed-C-A-S-E");
/// assert_eq!(separate_camel_case("Upper", '-'), "Upper");
/// ```
pub fn separate_camel_case(input: &str, separator: char) -> String {
    let mut output = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        if ch.is_uppercase() && !output.is_empty() {
            output.push(separator);
        }
        output.push(ch);
    }
    output
}

// -----------------------------------------------------------------------------
// Converters

/// Camel-case separation with `-`, then a full lowercase fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerCaseWithDash;

impl NamingConverter for LowerCaseWithDash {
    #[inline]
    fn convert(&self, input: &str) -> String {
        separate_camel_case(input, '-').to_lowercase()
    }
}

/// Keeps declared names as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl NamingConverter for Identity {
    #[inline]
    fn convert(&self, input: &str) -> String {
        input.into()
    }
}

#[cfg(test)]
mod tests {
    use super::{Identity, LowerCaseWithDash, NamingConverter, separate_camel_case};

    #[test]
    fn lower_case_with_dash() {
        let policy = LowerCaseWithDash;
        assert_eq!(policy.convert("camelCaseInput"), "camel-case-input");
        assert_eq!(policy.convert("UpperCaseInput"), "upper-case-input");
        assert_eq!(policy.convert("mixedCASEInput"), "mixed-c-a-s-e-input");
        assert_eq!(policy.convert("some-dashed-input"), "some-dashed-input");
        assert_eq!(policy.convert(""), "");
        assert_eq!(policy.convert_opt(None), None);
        assert_eq!(
            policy.convert_opt(Some("detailMessage")).as_deref(),
            Some("detail-message")
        );
    }

    #[test]
    fn non_letters_are_not_boundaries() {
        let policy = LowerCaseWithDash;
        assert_eq!(policy.convert("line2Number"), "line2-number");
        assert_eq!(policy.convert("with spaceInside"), "with space-inside");
        assert_eq!(policy.convert("already-Dashed"), "already--dashed");
        assert_eq!(policy.convert("_rxid"), "_rxid");
    }

    #[test]
    fn separation_keeps_case() {
        assert_eq!(separate_camel_case("camelCaseInput", '_'), "camel_Case_Input");
        assert_eq!(separate_camel_case("", '_'), "");
        assert_eq!(separate_camel_case("ABC", '.'), "A.B.C");
    }

    #[test]
    fn closures_and_identity() {
        let upper = |input: &str| input.to_uppercase();
        assert_eq!(upper.convert("rxId"), "RXID");
        assert_eq!(Identity.convert("rxId"), "rxId");
        assert_eq!(Identity.convert_opt(None), None);
    }
}
