/// Navigation commands exposed to the keyboard layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    ChangeCategory(i32),
    ChangeSubcategory(i32),
    ChangeGroup(i32),
    ChangeItem(i32),
    AnnounceDistance,
    MoveCursorToItem,
}

impl NavCommand {
    /// Whether the command re-reads the world before acting.
    ///
    /// `ChangeSubcategory` only rescans when no subcategory map is cached.
    pub const fn always_rescans(self) -> bool {
        matches!(self, Self::ChangeCategory(_) | Self::ChangeGroup(_))
    }
}
