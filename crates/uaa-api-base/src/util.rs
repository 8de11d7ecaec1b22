/// URL-encodes a string for use as a single path segment, e.g. the ids in `/Users/{id}`.
///
/// `/`, `?`, `#`, `&` and `%` are escaped so the value can never change the structure of the
/// request URL.
pub fn urlencode<T: AsRef<str>>(s: T) -> String {
    url::form_urlencoded::byte_serialize(s.as_ref().as_bytes()).collect()
}
