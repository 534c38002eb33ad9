use crate::target::TargetLength;

/// Marker that stands in for the home directory
pub const HOME_MARKER: u8 = b'~';

/// Shorten `current_dir` so that it fits in `target`
///
/// If the path doesn't already fit (or `target` is forced), the `home_dir` prefix is replaced
/// with `~`, and then directories are abbreviated to their first character, left to right, until
/// the path fits. The final path component is never abbreviated, so the result may still be
/// longer than `target`.
///
/// Paths are raw bytes, so names that aren't valid UTF-8 pass through untouched, and lengths are
/// byte lengths. A directory abbreviated to a multi-byte UTF-8 character keeps the whole
/// character.
///
/// ```
/// use ppwd::{TargetLength, compress};
///
/// let short = compress(
///     b"/home/alice/projects/rust/ppwd",
///     Some(b"/home/alice".as_slice()),
///     TargetLength::new(15),
/// );
/// assert_eq!(short, b"~/p/rust/ppwd");
/// ```
pub fn compress(current_dir: &[u8], home_dir: Option<&[u8]>, target: TargetLength) -> Vec<u8> {
    let lossy_dir = String::from_utf8_lossy(current_dir);
    if !target.forced && current_dir.len() < target.len {
        tracing::debug!("{lossy_dir:?} already fits in {} bytes", target.len);
        return current_dir.to_vec();
    }

    let mut output = Vec::with_capacity(current_dir.len());
    let mut cursor = home_prefix_len(current_dir, home_dir);
    if cursor > 0 {
        output.push(HOME_MARKER);
    }

    let last_slash = current_dir.iter().rposition(|&b| b == b'/');

    while output.len() + (current_dir.len() - cursor) > target.len {
        if Some(cursor) == last_slash {
            tracing::trace!("Reached the final path component at {cursor}");
            break;
        }
        let Some(&b) = current_dir.get(cursor) else {
            break;
        };

        if b == b'/' {
            output.push(b);
            cursor += 1;
            continue;
        }

        let start = cursor;
        let end = current_dir[start..]
            .iter()
            .position(|&b| b == b'/')
            .map_or(current_dir.len(), |i| start + i);
        let segment = &current_dir[start..end];
        let first = first_char_len(segment);
        output.extend_from_slice(&segment[..first]);
        cursor = end;
        tracing::trace!(
            "Abbreviated {:?} to {:?}",
            String::from_utf8_lossy(segment),
            String::from_utf8_lossy(&segment[..first])
        );
    }

    output.extend_from_slice(&current_dir[cursor..]);
    tracing::debug!(
        "Compressed {lossy_dir:?} to {:?}",
        String::from_utf8_lossy(&output)
    );
    output
}

/// Number of bytes of `current_dir` covered by the home directory
///
/// This is a literal prefix test, so `/usr` also covers the first four bytes of `/usrx`. An empty
/// home directory covers nothing.
fn home_prefix_len(current_dir: &[u8], home_dir: Option<&[u8]>) -> usize {
    match home_dir {
        Some(home) if !home.is_empty() && current_dir.starts_with(home) => home.len(),
        _ => 0,
    }
}

/// Length in bytes of the first character of a non-empty segment
///
/// Invalid UTF-8 counts one byte at a time.
fn first_char_len(segment: &[u8]) -> usize {
    segment
        .utf8_chunks()
        .next()
        .and_then(|chunk| chunk.valid().chars().next())
        .map_or(1, char::len_utf8)
}
