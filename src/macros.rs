/// Concatenates two or more fragments into a rope.
///
/// Each argument may be anything that converts into a [`Rope`](crate::Rope):
/// string slices, byte slices, `Bytes`, or ropes themselves. Fewer than two
/// arguments does not compile.
///
/// ```
/// use text_rope::rope;
///
/// let rope = rope!["abc", "def", "ghi"];
/// assert_eq!(rope.to_string(), "abcdefghi");
/// ```
///
/// ```compile_fail
/// let rope = text_rope::rope!["abc"];
/// ```
#[macro_export]
macro_rules! rope {
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {{
        let rest: ::std::vec::Vec<$crate::Rope> = ::std::vec![$($crate::Rope::from($rest)),*];
        $crate::Rope::concat_many($crate::Rope::from($a), $crate::Rope::from($b), rest)
    }};
}
