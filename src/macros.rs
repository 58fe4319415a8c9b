/// Build a [`LinkedList`](crate::LinkedList) from literal values, in order.
///
/// ```
/// use forward_list::forward_list;
///
/// let list = forward_list![1, 2, 3];
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// let zeros = forward_list![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! forward_list {
    () => {
        $crate::LinkedList::new()
    };
    ($value:expr; $count:expr) => {
        ::core::iter::repeat($value)
            .take($count)
            .collect::<$crate::LinkedList<_>>()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::LinkedList::from([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn literal_forms() {
        let empty: LinkedList<i32> = forward_list![];
        assert!(empty.is_empty());

        let list = forward_list!["a", "b", "c",];
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&"a"));

        let repeated = forward_list![String::from("x"); 3];
        assert!(repeated.iter().all(|s| s == "x"));
        assert_eq!(repeated.len(), 3);
    }
}
