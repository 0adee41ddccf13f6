use syn::Ident;
use syn::ext::IdentExt;

/// The declared name of a field: the lowerCamelCase form of its identifier.
///
/// `line_number` -> `lineNumber`, `r#type` -> `type`, `_rxid` -> `rxid`.
pub(crate) fn declared_name(ident: &Ident) -> String {
    snake_to_lower_camel(&ident.unraw().to_string())
}

fn snake_to_lower_camel(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    for (index, segment) in snake.split('_').filter(|s| !s.is_empty()).enumerate() {
        if index == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
