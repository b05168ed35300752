/// Category a source-archive file is routed into. Every file classifies
/// successfully; unrecognized extensions land in `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Sprite,
    Sound,
    Ignored,
}

/// Case-sensitive suffix match, same rule the original page applies.
pub fn classify(file_name: &str) -> AssetKind {
    if file_name.ends_with(".png") || file_name.ends_with(".svg") {
        AssetKind::Sprite
    } else if file_name.ends_with(".wav") || file_name.ends_with(".mp3") {
        AssetKind::Sound
    } else {
        AssetKind::Ignored
    }
}

/// Last `/`-separated segment; directory structure is discarded when an
/// asset is placed into the output tree.
pub fn base_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
