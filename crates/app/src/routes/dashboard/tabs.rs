use crate::format_helpers::capitalize_first;

/// Sidebar navigation entries on the dashboard.
///
/// Selecting a tab only changes the header title and the highlighted nav
/// entry. Which panel renders is decided by the user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Projects,
    Payments,
    Media,
    Docs,
}

impl DashboardTab {
    /// All tabs in sidebar order.
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::Projects,
        DashboardTab::Payments,
        DashboardTab::Media,
        DashboardTab::Docs,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Projects => "projects",
            DashboardTab::Payments => "payments",
            DashboardTab::Media => "media",
            DashboardTab::Docs => "docs",
        }
    }

    /// Sidebar label. Differs from the id for media and docs.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Projects => "Projects",
            DashboardTab::Payments => "Payments",
            DashboardTab::Media => "Photo Gallery",
            DashboardTab::Docs => "Documents",
        }
    }

    /// Page header text: the id with its first letter capitalized.
    pub fn title(&self) -> String {
        capitalize_first(self.id())
    }
}
