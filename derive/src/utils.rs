/// Derives the accessor lookup name for a field: `get` followed by the
/// upper-camel-case form of the field name.
///
/// Must stay in lockstep with `plainview::visibility::accessor_name`, which
/// performs the same derivation at extraction time.
pub(crate) fn accessor_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len() + 3);
    name.push_str("get");
    for part in field.split('_').filter(|part| !part.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::accessor_name;

    #[test]
    fn getter_names() {
        assert_eq!(accessor_name("count"), "getCount");
        assert_eq!(accessor_name("display_name"), "getDisplayName");
    }
}
