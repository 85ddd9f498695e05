use std::path::MAIN_SEPARATOR;

const ELLIPSIS: &str = "...";

/// Shortens `path` for the Filename column using the platform separator.
pub fn display_file_path(path: &str, parts: i32) -> String {
    shorten_file_path(path, parts, MAIN_SEPARATOR)
}

/// Applies the path-shortening rule:
///
/// * `parts > 0` keeps the last `parts` segments behind an ellipsis, or the
///   whole path when it has no more segments than that.
/// * `parts == 0` keeps only the basename.
/// * `parts < 0` keeps the whole path.
pub fn shorten_file_path(path: &str, parts: i32, separator: char) -> String {
    match parts {
        p if p > 0 => {
            // The separator right before the first kept segment.
            match path.rmatch_indices(separator).nth(p as usize - 1) {
                Some((index, _)) if index > 0 => format!("{}{}", ELLIPSIS, &path[index..]),
                _ => path.to_string(),
            }
        }
        0 => match path.rfind(separator) {
            Some(index) => path[index + separator.len_utf8()..].to_string(),
            None => path.to_string(),
        },
        _ => path.to_string(),
    }
}
