//! In-memory folder tree browsed by the explorer, plus the per-window navigation state.

use serde::{Deserialize, Serialize};

/// Id of the tree root.
pub const ROOT_ID: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

/// Coarse modification age; the tree is static so absolute dates carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modified {
    Today,
    Yesterday,
    LastWeek,
}

impl Modified {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastWeek => "Last week",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsNode {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: NodeKind,
    pub path: &'static str,
    pub parent_id: Option<&'static str>,
    pub children: &'static [&'static str],
    /// Byte size, files only.
    pub size: Option<u64>,
    pub modified: Modified,
    /// Icon token: `home`, `folder`, `text`, `image`, `music`, `file`, `download`, `monitor`.
    pub icon: &'static str,
}

impl FsNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Size column text: human-readable for files, `--` otherwise.
    pub fn size_label(&self) -> String {
        match (self.kind, self.size) {
            (NodeKind::File, Some(bytes)) => format_file_size(bytes),
            _ => "--".to_string(),
        }
    }
}

const fn folder(
    id: &'static str,
    name: &'static str,
    path: &'static str,
    parent_id: Option<&'static str>,
    children: &'static [&'static str],
    modified: Modified,
    icon: &'static str,
) -> FsNode {
    FsNode {
        id,
        name,
        kind: NodeKind::Folder,
        path,
        parent_id,
        children,
        size: None,
        modified,
        icon,
    }
}

const fn file(
    id: &'static str,
    name: &'static str,
    path: &'static str,
    parent_id: &'static str,
    size: u64,
    modified: Modified,
    icon: &'static str,
) -> FsNode {
    FsNode {
        id,
        name,
        kind: NodeKind::File,
        path,
        parent_id: Some(parent_id),
        children: &[],
        size: Some(size),
        modified,
        icon,
    }
}

use Modified::{LastWeek, Today, Yesterday};

pub static FILESYSTEM: [FsNode; 24] = [
    folder(
        ROOT_ID,
        "Home",
        "/",
        None,
        &["documents", "pictures", "music", "downloads", "desktop"],
        Today,
        "home",
    ),
    folder(
        "documents",
        "Documents",
        "/Documents",
        Some(ROOT_ID),
        &["work-folder", "personal-folder", "archive"],
        Today,
        "folder",
    ),
    folder(
        "work-folder",
        "Work",
        "/Documents/Work",
        Some("documents"),
        &["project-proposal", "budget-2026", "meeting-notes"],
        Yesterday,
        "folder",
    ),
    file(
        "project-proposal",
        "Project Proposal.docx",
        "/Documents/Work/Project Proposal.docx",
        "work-folder",
        45_056,
        Yesterday,
        "text",
    ),
    file(
        "budget-2026",
        "Budget 2026.xlsx",
        "/Documents/Work/Budget 2026.xlsx",
        "work-folder",
        32_768,
        LastWeek,
        "text",
    ),
    file(
        "meeting-notes",
        "Meeting Notes.txt",
        "/Documents/Work/Meeting Notes.txt",
        "work-folder",
        2_048,
        Today,
        "text",
    ),
    folder(
        "personal-folder",
        "Personal",
        "/Documents/Personal",
        Some("documents"),
        &["resume", "ideas"],
        Yesterday,
        "folder",
    ),
    file(
        "resume",
        "Resume.pdf",
        "/Documents/Personal/Resume.pdf",
        "personal-folder",
        156_000,
        LastWeek,
        "file",
    ),
    file(
        "ideas",
        "Ideas.txt",
        "/Documents/Personal/Ideas.txt",
        "personal-folder",
        1_024,
        Yesterday,
        "text",
    ),
    folder(
        "pictures",
        "Pictures",
        "/Pictures",
        Some(ROOT_ID),
        &["vacation-folder", "screenshots-folder"],
        Yesterday,
        "image",
    ),
    folder(
        "vacation-folder",
        "Vacation",
        "/Pictures/Vacation",
        Some("pictures"),
        &["beach-photo", "sunset-photo"],
        LastWeek,
        "folder",
    ),
    file(
        "beach-photo",
        "beach.jpg",
        "/Pictures/Vacation/beach.jpg",
        "vacation-folder",
        2_500_000,
        LastWeek,
        "image",
    ),
    file(
        "sunset-photo",
        "sunset.png",
        "/Pictures/Vacation/sunset.png",
        "vacation-folder",
        3_200_000,
        LastWeek,
        "image",
    ),
    folder(
        "screenshots-folder",
        "Screenshots",
        "/Pictures/Screenshots",
        Some("pictures"),
        &["screenshot-001"],
        Yesterday,
        "folder",
    ),
    file(
        "screenshot-001",
        "screenshot-001.png",
        "/Pictures/Screenshots/screenshot-001.png",
        "screenshots-folder",
        450_000,
        Yesterday,
        "image",
    ),
    folder(
        "music",
        "Music",
        "/Music",
        Some(ROOT_ID),
        &["favorites-folder"],
        LastWeek,
        "music",
    ),
    folder(
        "favorites-folder",
        "Favorites",
        "/Music/Favorites",
        Some("music"),
        &["playlist"],
        LastWeek,
        "folder",
    ),
    file(
        "playlist",
        "playlist.m3u",
        "/Music/Favorites/playlist.m3u",
        "favorites-folder",
        512,
        LastWeek,
        "music",
    ),
    folder(
        "downloads",
        "Downloads",
        "/Downloads",
        Some(ROOT_ID),
        &["installer", "document-pdf"],
        Today,
        "download",
    ),
    file(
        "installer",
        "installer.dmg",
        "/Downloads/installer.dmg",
        "downloads",
        85_000_000,
        Yesterday,
        "file",
    ),
    file(
        "document-pdf",
        "document.pdf",
        "/Downloads/document.pdf",
        "downloads",
        125_000,
        Today,
        "file",
    ),
    folder(
        "desktop",
        "Desktop",
        "/Desktop",
        Some(ROOT_ID),
        &["desktop-notes"],
        Yesterday,
        "monitor",
    ),
    file(
        "desktop-notes",
        "Quick Notes.txt",
        "/Desktop/Quick Notes.txt",
        "desktop",
        256,
        Yesterday,
        "text",
    ),
    folder(
        "archive",
        "Archive",
        "/Documents/Archive",
        Some("documents"),
        &[],
        LastWeek,
        "folder",
    ),
];

pub fn node(id: &str) -> Option<&'static FsNode> {
    FILESYSTEM.iter().find(|node| node.id == id)
}

pub fn node_by_path(path: &str) -> Option<&'static FsNode> {
    FILESYSTEM.iter().find(|node| node.path == path)
}

/// Children of `parent_id` in declaration order. Unknown ids and files yield nothing.
pub fn children_of(parent_id: &str) -> Vec<&'static FsNode> {
    node(parent_id)
        .map(|parent| parent.children.iter().filter_map(|id| node(id)).collect())
        .unwrap_or_default()
}

/// `512 B`, `44.0 KB`, `2.4 MB`, `1.0 GB`.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Navigation and selection for one explorer window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    current_folder_id: &'static str,
    selected: Vec<&'static str>,
    view_mode: ViewMode,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            current_folder_id: ROOT_ID,
            selected: Vec::new(),
            view_mode: ViewMode::Grid,
        }
    }
}

impl ExplorerState {
    pub fn current_folder(&self) -> Option<&'static FsNode> {
        node(self.current_folder_id)
    }

    pub fn current_path(&self) -> &'static str {
        self.current_folder().map(|folder| folder.path).unwrap_or("/")
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| *selected == id)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn can_navigate_up(&self) -> bool {
        self.current_folder()
            .is_some_and(|folder| folder.parent_id.is_some())
    }

    /// Enters `folder_id` and clears the selection. Files and unknown ids are ignored.
    pub fn navigate_to(&mut self, folder_id: &str) -> bool {
        match node(folder_id) {
            Some(folder) if folder.is_folder() => {
                self.current_folder_id = folder.id;
                self.selected.clear();
                true
            }
            _ => false,
        }
    }

    pub fn navigate_up(&mut self) -> bool {
        match self.current_folder().and_then(|folder| folder.parent_id) {
            Some(parent_id) => self.navigate_to(parent_id),
            None => false,
        }
    }

    /// Plain click replaces the selection; `multi` toggles `id` in or out of it.
    pub fn select(&mut self, id: &str, multi: bool) {
        let Some(item) = node(id) else {
            return;
        };
        if !multi {
            self.selected = vec![item.id];
            return;
        }
        if self.is_selected(item.id) {
            self.selected.retain(|selected| *selected != item.id);
        } else {
            self.selected.push(item.id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Contents of the current folder: folders first, then case-insensitive by name.
    pub fn current_children(&self) -> Vec<&'static FsNode> {
        let mut children = children_of(self.current_folder_id);
        children.sort_by(|a, b| {
            b.is_folder()
                .cmp(&a.is_folder())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        children
    }

    /// Root-first chain ending at the current folder.
    pub fn breadcrumbs(&self) -> Vec<&'static FsNode> {
        let mut crumbs = Vec::new();
        let mut cursor = self.current_folder();
        while let Some(current) = cursor {
            crumbs.push(current);
            cursor = current.parent_id.and_then(node);
        }
        crumbs.reverse();
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(nodes: &[&FsNode]) -> Vec<&'static str> {
        nodes.iter().map(|node| node.name).collect()
    }

    #[test]
    fn tree_links_are_consistent() {
        for parent in FILESYSTEM.iter() {
            for child_id in parent.children {
                let child = node(child_id).expect("child exists");
                assert_eq!(child.parent_id, Some(parent.id), "{}", child.id);
            }
        }
        assert_eq!(node_by_path("/Documents/Work").map(|n| n.id), Some("work-folder"));
    }

    #[test]
    fn navigation_enters_folders_only() {
        let mut state = ExplorerState::default();
        assert!(!state.can_navigate_up());

        assert!(state.navigate_to("documents"));
        assert!(!state.navigate_to("resume"));
        assert!(!state.navigate_to("missing"));
        assert_eq!(state.current_path(), "/Documents");

        assert!(state.navigate_to("work-folder"));
        assert_eq!(
            names(&state.breadcrumbs()),
            vec!["Home", "Documents", "Work"]
        );

        assert!(state.navigate_up());
        assert!(state.navigate_up());
        assert!(!state.navigate_up());
        assert_eq!(state.current_path(), "/");
    }

    #[test]
    fn folders_sort_before_files() {
        let mut state = ExplorerState::default();
        state.navigate_to("documents");
        assert_eq!(
            names(&state.current_children()),
            vec!["Archive", "Personal", "Work"]
        );

        state.navigate_to("work-folder");
        assert_eq!(
            names(&state.current_children()),
            vec!["Budget 2026.xlsx", "Meeting Notes.txt", "Project Proposal.docx"]
        );
    }

    #[test]
    fn multi_select_toggles_and_navigation_clears() {
        let mut state = ExplorerState::default();
        state.navigate_to("work-folder");

        state.select("budget-2026", false);
        state.select("meeting-notes", true);
        assert_eq!(state.selected(), &["budget-2026", "meeting-notes"]);

        state.select("budget-2026", true);
        assert_eq!(state.selected(), &["meeting-notes"]);

        state.select("resume", false);
        assert_eq!(state.selected(), &["resume"]);

        state.navigate_up();
        assert!(state.selected().is_empty());
    }

    #[test]
    fn empty_folder_has_no_children() {
        let mut state = ExplorerState::default();
        assert!(state.navigate_to("archive"));
        assert!(state.current_children().is_empty());
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(45_056), "44.0 KB");
        assert_eq!(format_file_size(2_500_000), "2.4 MB");
        assert_eq!(format_file_size(85_000_000), "81.1 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }
}
