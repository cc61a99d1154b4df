use crate::BaseWidth;

#[test]
fn parses_unsigned_type_names() {
    assert_eq!(BaseWidth::from_type_name("u8"), Some(BaseWidth::U8));
    assert_eq!(BaseWidth::from_type_name("uint16"), Some(BaseWidth::U16));
    assert_eq!(BaseWidth::from_type_name("uint32_t"), Some(BaseWidth::U32));
    assert_eq!(BaseWidth::from_type_name(" u64 "), Some(BaseWidth::U64));
}

#[test]
fn rejects_signed_and_unknown_names() {
    for name in ["i32", "int32", "int", "u24", "usize", "uint", "float", ""] {
        assert_eq!(BaseWidth::from_type_name(name), None, "`{name}`");
    }
}

#[test]
fn max_values_match_widths() {
    assert_eq!(BaseWidth::U8.max_value(), 0xff);
    assert_eq!(BaseWidth::U16.max_value(), 0xffff);
    assert_eq!(BaseWidth::U32.max_value(), u32::MAX as u64);
    assert_eq!(BaseWidth::U64.max_value(), u64::MAX);
    assert_eq!(BaseWidth::U16.bytes(), 2);
    assert_eq!(BaseWidth::default(), BaseWidth::U32);
}
