//! Archive-entry bookkeeping: which entries count as applicant
//! documents and which applicant each entry belongs to.

/// Only PDF entries are documents; macOS resource-fork folders are
/// metadata the uploader did not intend to submit.
pub(crate) fn is_candidate_document(entry_path: &str) -> bool {
    let lowered = entry_path.to_lowercase();
    lowered.ends_with(".pdf") && !entry_path.contains("__MACOSX")
}

/// Applicant identity for an archive entry: the leading folder name
/// when the archive is folder-structured, otherwise the filename prefix
/// before the first `_`, `-`, or space.
pub(crate) fn applicant_key_for(entry_path: &str) -> String {
    let normalized = entry_path.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').collect();

    if parts.len() >= 2 {
        return parts[0].trim().to_string();
    }

    let basename = match parts[0].rsplit_once('.') {
        Some((stem, _extension)) => stem,
        None => parts[0],
    };
    for separator in ['_', '-', ' '] {
        if let Some((prefix, _)) = basename.split_once(separator) {
            return prefix.trim().to_string();
        }
    }
    basename.trim().to_string()
}
