use crate::info::{FieldInfo, StructInfo, TypeInfo};
use crate::props::{AccessorKind, PropertyAccessor};

// -----------------------------------------------------------------------------
// Accessor discovery

/// Returns every getter of the struct, in field declaration order.
///
/// Getters follow the `get_*` / `is_*` naming convention and exist for
/// public and private fields alike; invocation is where visibility is
/// enforced.
///
/// The returned list is owned and may be filtered or reordered freely.
///
/// # Examples
///
/// ```
/// use obx_reflect::derive::Reflect;
/// use obx_reflect::info::Typed;
/// use obx_reflect::props::getters;
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub name: String,
///     pub active: bool,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let names: Vec<_> = getters(info).iter().map(|g| g.name()).collect();
/// assert_eq!(names, ["get_name", "is_active"]);
/// ```
pub fn getters(info: &StructInfo) -> Vec<&PropertyAccessor> {
    info.iter().filter_map(FieldInfo::getter).collect()
}

/// Returns every setter of the struct, in field declaration order.
///
/// Setters follow the `set_*` naming convention. See [`getters`] for the
/// visibility behavior.
pub fn setters(info: &StructInfo) -> Vec<&PropertyAccessor> {
    info.iter().filter_map(FieldInfo::setter).collect()
}

/// Returns every accessor of the struct, getters then setters per field.
pub fn accessors(info: &StructInfo) -> Vec<&PropertyAccessor> {
    info.iter()
        .flat_map(|field| [field.getter(), field.setter()])
        .flatten()
        .collect()
}

// -----------------------------------------------------------------------------
// Accessor filtering

/// How [`filter_accessors`] treats matching entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Drop accessors whose field matches one of the names.
    Exclude,
    /// Keep only accessors whose field matches one of the names.
    Retain,
}

/// Filters an accessor list by field name.
///
/// Matching is case-insensitive, so `"firstName"` and `"firstname"` select
/// the same accessors.
pub fn filter_accessors<'a>(
    accessors: Vec<&'a PropertyAccessor>,
    names: &[&str],
    mode: FilterMode,
) -> Vec<&'a PropertyAccessor> {
    let matches = |accessor: &PropertyAccessor| {
        names
            .iter()
            .any(|name| accessor.field().eq_ignore_ascii_case(name))
    };

    accessors
        .into_iter()
        .filter(|accessor| match mode {
            FilterMode::Exclude => !matches(accessor),
            FilterMode::Retain => matches(accessor),
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Field discovery

/// Returns the struct's own fields, in declaration order.
///
/// The returned list is owned and may be modified freely.
pub fn fields(info: &'static StructInfo) -> Vec<&'static FieldInfo> {
    info.iter().collect()
}

/// Returns the struct's fields with `#[reflect(flatten)]` fields expanded.
///
/// A flattened field stands in for an embedded "base" struct (composition
/// being the Rust counterpart of a class hierarchy); it is replaced in the
/// result by its own fields, recursively. Non-struct flattened fields are
/// kept as-is.
pub fn fields_including_ancestors(info: &'static StructInfo) -> Vec<&'static FieldInfo> {
    let mut collected = Vec::with_capacity(info.field_len());
    collect_fields(info, &mut collected);
    collected
}

fn collect_fields(info: &'static StructInfo, collected: &mut Vec<&'static FieldInfo>) {
    for field in info.iter() {
        match field.type_info() {
            TypeInfo::Struct(inner) if field.is_flattened() => collect_fields(inner, collected),
            _ => collected.push(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterMode, filter_accessors};
    use crate::error::ReflectError;
    use crate::props::PropertyAccessor;

    fn getter(name: &'static str, field: &'static str) -> PropertyAccessor {
        PropertyAccessor::getter(name, field, true, |_: &dyn crate::Reflect| {
            Err(ReflectError::NotAStruct { type_path: "test" })
        })
    }

    #[test]
    fn filter_is_case_insensitive() {
        let a = getter("get_name", "name");
        let b = getter("get_age", "age");
        let all = vec![&a, &b];

        let kept = filter_accessors(all.clone(), &["NAME"], FilterMode::Retain);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].field(), "name");

        let kept = filter_accessors(all, &["NAME"], FilterMode::Exclude);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].field(), "age");
    }
}
