/// Checks whether page text contains the search string
///
/// An exact, case-sensitive substring always counts as a hit. With
/// `case_insensitive` set, a hit after lowercasing both sides counts as well, so
/// case-insensitive mode finds everything case-sensitive mode finds.
///
/// # Examples
///
/// ```
/// use sumi_seek::crawler::contains_search_string;
///
/// assert!(contains_search_string("hello", "hello world", false));
/// assert!(contains_search_string("Hello", "hello world", true));
/// assert!(!contains_search_string("Hello", "hello world", false));
/// ```
pub fn contains_search_string(search_string: &str, text: &str, case_insensitive: bool) -> bool {
    (case_insensitive && text.to_lowercase().contains(&search_string.to_lowercase()))
        || text.contains(search_string)
}
