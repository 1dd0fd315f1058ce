//! The tag body scanner (§4.5): given a pointer to `<`, finds the matching
//! `>` that isn't inside a `"`…`"` quoted run.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagError;

/// `rest` starts at `<`. Returns the tag body (without angle brackets) and
/// the number of bytes consumed including both brackets.
pub(crate) fn scan(rest: &[u8]) -> Result<(&str, usize), TagError> {
    debug_assert_eq!(rest.first(), Some(&b'<'));
    let mut i = 1usize;
    let mut in_quote = false;

    loop {
        match rest.get(i) {
            None => return Err(TagError),
            Some(b'"') => {
                in_quote = !in_quote;
                i += 1;
            }
            Some(b'>') if !in_quote => {
                let body = std::str::from_utf8(&rest[1..i]).map_err(|_| TagError)?;
                return Ok((body, i + 1));
            }
            Some(_) => i += 1,
        }
    }
}
