//! Inline SVG icons

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Search,
    Person,
    Note,
    Plus,
    Trash,
    Close,
}

impl IconKind {
    const fn path(self) -> &'static str {
        match self {
            Self::Search => "M11 4a7 7 0 1 0 4.2 12.6l4.6 4.6 1.4-1.4-4.6-4.6A7 7 0 0 0 11 4zm0 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10z",
            Self::Person => "M12 4a4 4 0 1 1 0 8 4 4 0 0 1 0-8zm0 10c4.4 0 8 1.8 8 4v2H4v-2c0-2.2 3.6-4 8-4z",
            Self::Note => "M6 3h9l5 5v13H6zm8 1.5V9h4.5M8 13h8M8 17h6",
            Self::Plus => "M11 5h2v6h6v2h-6v6h-2v-6H5v-2h6z",
            Self::Trash => "M9 3h6l1 2h4v2H4V5h4zm-3 6h12l-1 12H7z",
            Self::Close => "M6.4 5 12 10.6 17.6 5 19 6.4 13.4 12l5.6 5.6-1.4 1.4L12 13.4 6.4 19 5 17.6 10.6 12 5 6.4z",
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 16)] size: u32,
    #[props(into, default = "currentColor".to_string())] color: String,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{color}",
            style: "flex-shrink: 0;",
            path { d: kind.path() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_paths_are_distinct() {
        let kinds = [
            IconKind::Search,
            IconKind::Person,
            IconKind::Note,
            IconKind::Plus,
            IconKind::Trash,
            IconKind::Close,
        ];
        for (i, a) in kinds.iter().enumerate() {
            assert!(!a.path().is_empty());
            for b in &kinds[i + 1..] {
                assert_ne!(a.path(), b.path(), "{a:?} and {b:?} share a path");
            }
        }
    }
}
