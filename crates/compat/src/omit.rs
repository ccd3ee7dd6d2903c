/// Returns None in place of an empty sequence.
pub fn nil_if_empty<T>(v: Vec<T>) -> Option<Vec<T>> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

/// Returns None in place of the zero value of a type.
pub fn omit_default<T: Default + PartialEq>(v: T) -> Option<T> {
    if v == T::default() {
        None
    } else {
        Some(v)
    }
}

#[cfg(test)]
mod test {
    use super::{nil_if_empty, omit_default};

    #[test]
    fn test_omission() {
        assert_eq!(nil_if_empty(Vec::<String>::new()), None);
        assert_eq!(nil_if_empty(vec![1]), Some(vec![1]));
        assert_eq!(omit_default(false), None);
        assert_eq!(omit_default(true), Some(true));
        assert_eq!(omit_default(String::new()), None);
        assert_eq!(omit_default("B".to_string()), Some("B".to_string()));
    }
}
