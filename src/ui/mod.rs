pub mod daily_summary;
pub mod dialogs;
pub mod project_manager;
pub mod sidebar;
pub mod task_manager;
pub mod theme;
pub mod toolbar;
pub mod widgets;
