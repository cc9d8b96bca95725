/// Declares a static table of `FieldDescriptor`s.
///
/// ```ignore
/// field_table! {
///     pub VTG_FIELDS = [
///         Ttmg => 1, Float;
///         Mtmg => 3, Float;
///     ]
/// }
/// ```
macro_rules! field_table {
    ($vis:vis $name:ident = [ $($key:ident => $index:expr, $kind:ident;)* ]) => {
        $vis static $name: &[$crate::fields::FieldDescriptor] = &[
            $($crate::fields::FieldDescriptor {
                key: $crate::fields::Key::$key,
                index: $index,
                kind: $crate::fields::ValueKind::$kind,
            },)*
        ];
    };
}
