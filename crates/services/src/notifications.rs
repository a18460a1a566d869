/// Visual tone of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
        }
    }
}

/// One-off feedback produced by a user action. Never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    FavoriteAdded,
    FavoriteRemoved,
    CourseCompleted { title: String },
}

impl Notification {
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::FavoriteAdded | Notification::CourseCompleted { .. } => {
                NotificationKind::Success
            }
            Notification::FavoriteRemoved => NotificationKind::Info,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Notification::FavoriteAdded => "Added to favorites".to_string(),
            Notification::FavoriteRemoved => "Removed from favorites".to_string(),
            Notification::CourseCompleted { title } => {
                format!("Well done! You finished \"{title}\"!")
            }
        }
    }
}
