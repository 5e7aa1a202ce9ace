const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Length of the ids produced by [`request_id`]
pub const REQUEST_ID_LEN: usize = 12;

/// Generates a short id used to correlate the log lines of one outbound call
///
/// The original request, the refresh call and the retry all share the same id.
///
/// # Examples
/// ```
/// use dashboard_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LEN, &ALPHABET)
}
