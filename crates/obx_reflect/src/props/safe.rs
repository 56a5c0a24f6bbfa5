// -----------------------------------------------------------------------------
// Safe getter helpers

/// Applies a getter to an object that may be absent.
///
/// Returns `None` when the object is absent or the getter itself produces
/// an absent value, making the call safe to chain.
///
/// # Examples
///
/// ```
/// use obx_reflect::props::safe_get;
///
/// struct User {
///     nickname: Option<String>,
/// }
///
/// let user = User { nickname: Some(String::from("kit")) };
/// let nick = safe_get(Some(&user), |u| u.nickname.clone());
/// assert_eq!(nick.as_deref(), Some("kit"));
///
/// let nobody: Option<&User> = None;
/// assert_eq!(safe_get(nobody, |u| u.nickname.clone()), None);
/// ```
pub fn safe_get<T, R>(obj: Option<&T>, getter: impl FnOnce(&T) -> Option<R>) -> Option<R> {
    obj.and_then(getter)
}

/// Like [`safe_get`], but falls back to a default value.
///
/// # Examples
///
/// ```
/// use obx_reflect::props::safe_get_or;
///
/// struct User {
///     nickname: Option<String>,
/// }
///
/// let nobody: Option<&User> = None;
/// let nick = safe_get_or(nobody, |u| u.nickname.clone(), String::from("anonymous"));
/// assert_eq!(nick, "anonymous");
/// ```
pub fn safe_get_or<T, R>(
    obj: Option<&T>,
    getter: impl FnOnce(&T) -> Option<R>,
    default: R,
) -> R {
    safe_get(obj, getter).unwrap_or(default)
}

/// Drops the absent entries from a list of optional values.
///
/// Returns a fresh mutable `Vec` that callers may extend further.
///
/// # Examples
///
/// ```
/// use obx_reflect::props::remove_nones;
///
/// let values = vec![Some(1), None, Some(2), None];
/// let mut clean = remove_nones(values);
/// assert_eq!(clean, [1, 2]);
/// clean.push(3);
/// ```
pub fn remove_nones<T>(values: Vec<Option<T>>) -> Vec<T> {
    values.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::{remove_nones, safe_get, safe_get_or};

    struct Account {
        label: Option<&'static str>,
    }

    #[test]
    fn safe_get_flattens_both_absences() {
        let present = Account { label: Some("main") };
        let unlabeled = Account { label: None };

        assert_eq!(safe_get(Some(&present), |a| a.label), Some("main"));
        assert_eq!(safe_get(Some(&unlabeled), |a| a.label), None);
        assert_eq!(safe_get(None::<&Account>, |a| a.label), None);
    }

    #[test]
    fn safe_get_or_falls_back() {
        let unlabeled = Account { label: None };
        assert_eq!(safe_get_or(Some(&unlabeled), |a| a.label, "none"), "none");
    }

    #[test]
    fn remove_nones_keeps_order() {
        assert_eq!(remove_nones(vec![None, Some(1), None, Some(2)]), [1, 2]);
        assert!(remove_nones(Vec::<Option<i32>>::new()).is_empty());
    }
}
